use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Please enter text to encrypt/decrypt.")]
    EmptyText,

    #[error("Please select a cipher method. Unknown cipher: {0}")]
    UnknownCipher(String),

    #[error("Unknown operation: {0}. Must be encrypt or decrypt")]
    UnknownOperation(String),

    #[error("Shift amount must be between 1 and 25.")]
    InvalidShift(i64),

    /// `noun` is "key" or "keyword" depending on the cipher
    #[error("Please enter a {noun} for the {cipher}.")]
    MissingKey {
        noun: &'static str,
        cipher: &'static str,
    },

    #[error("The {0} key must contain only alphabetic characters.")]
    NonAlphabeticKey(&'static str),

    #[error("Please enter valid keys for the Affine cipher.")]
    InvalidAffineKeys { a: i64, b: i64 },

    #[error("'a' must be coprime with 26.")]
    NotCoprime(u32),

    #[error("Multiplicative inverse of 'a' does not exist.")]
    NoInverse(u32),

    #[error("Number of rails must be at least 2.")]
    InvalidRails(i64),

    #[error("Invalid character in text.")]
    InvalidCharacter(char),

    #[error("Invalid characters in Morse code. Use dots (.), dashes (-), and spaces.")]
    InvalidMorse,
}

/// Coarse classification reported alongside a failed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Bad or missing input supplied by the caller
    Validation,
    /// Internal inconsistency found while transforming
    Processing,
    /// File or stream handling outside the ciphers
    Io,
}

impl CipherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::NoInverse(_) | Self::InvalidCharacter(_) => ErrorKind::Processing,
            Self::Json(_)
            | Self::EmptyText
            | Self::UnknownCipher(_)
            | Self::UnknownOperation(_)
            | Self::InvalidShift(_)
            | Self::MissingKey { .. }
            | Self::NonAlphabeticKey(_)
            | Self::InvalidAffineKeys { .. }
            | Self::NotCoprime(_)
            | Self::InvalidRails(_)
            | Self::InvalidMorse => ErrorKind::Validation,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Validation => "validation",
            Self::Processing => "processing",
            Self::Io => "io",
        };
        f.write_str(name)
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
