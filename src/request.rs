//! Request and result records, and the dispatch that connects them to the
//! ciphers.
//!
//! ```text
//! CipherRequest → empty-text check → Cipher::from_params → Cipher::apply → CipherResult
//! ```

use crate::alphabet::fold_accents;
use crate::cipher::Cipher;
use crate::error::{CipherError, ErrorKind, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Which cipher a request selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    Caesar,
    Atbash,
    Vigenere,
    Affine,
    #[serde(alias = "rail-fence", alias = "rail_fence")]
    RailFence,
    Playfair,
    Columnar,
    Morse,
}

impl CipherKind {
    pub const ALL: [CipherKind; 8] = [
        Self::Caesar,
        Self::Atbash,
        Self::Vigenere,
        Self::Affine,
        Self::RailFence,
        Self::Playfair,
        Self::Columnar,
        Self::Morse,
    ];

    /// Identifier used on the command line and in JSON
    pub fn id(&self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Atbash => "atbash",
            Self::Vigenere => "vigenere",
            Self::Affine => "affine",
            Self::RailFence => "railfence",
            Self::Playfair => "playfair",
            Self::Columnar => "columnar",
            Self::Morse => "morse",
        }
    }
}

impl std::str::FromStr for CipherKind {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "caesar" => Ok(Self::Caesar),
            "atbash" => Ok(Self::Atbash),
            "vigenere" | "vigenère" => Ok(Self::Vigenere),
            "affine" => Ok(Self::Affine),
            "railfence" | "rail-fence" | "rail_fence" => Ok(Self::RailFence),
            "playfair" => Ok(Self::Playfair),
            "columnar" => Ok(Self::Columnar),
            "morse" => Ok(Self::Morse),
            _ => Err(CipherError::UnknownCipher(s.to_string())),
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Direction of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    #[serde(alias = "encode")]
    Encrypt,
    #[serde(alias = "decode")]
    Decrypt,
}

impl std::str::FromStr for Operation {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "encrypt" | "encode" => Ok(Self::Encrypt),
            "decrypt" | "decode" => Ok(Self::Decrypt),
            _ => Err(CipherError::UnknownOperation(s.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => f.write_str("encrypt"),
            Self::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// Unvalidated parameters as supplied by a caller. Which fields matter
/// depends on the cipher kind; see [`Cipher::from_params`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rails: Option<i64>,
}

/// One text-in/text-out job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherRequest {
    pub cipher: CipherKind,
    #[serde(default)]
    pub operation: Operation,
    pub text: String,
    #[serde(flatten)]
    pub params: CipherParams,
    /// Fold accented letters to ASCII before the cipher runs
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fold_accents: bool,
}

impl CipherRequest {
    pub fn new(cipher: CipherKind, operation: Operation, text: impl Into<String>) -> Self {
        Self {
            cipher,
            operation,
            text: text.into(),
            params: CipherParams::default(),
            fold_accents: false,
        }
    }

    pub fn with_params(mut self, params: CipherParams) -> Self {
        self.params = params;
        self
    }
}

/// Outcome of a request: transformed text or a classified error, never both
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CipherResult {
    Text {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    Error {
        error_kind: ErrorKind,
        message: String,
    },
}

impl CipherResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Error { .. } => None,
        }
    }
}

impl From<CipherError> for CipherResult {
    fn from(err: CipherError) -> Self {
        Self::Error {
            error_kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<Result<String>> for CipherResult {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(text) => Self::Text { text },
            Err(err) => err.into(),
        }
    }
}

/// Validate and run a request, keeping the crate error
pub fn run(request: &CipherRequest) -> Result<String> {
    debug!(
        "{} {} ({} chars)",
        request.operation,
        request.cipher,
        request.text.chars().count()
    );

    if request.text.is_empty() {
        return Err(CipherError::EmptyText);
    }

    let cipher = Cipher::from_params(request.cipher, &request.params)?;

    let text = if request.fold_accents {
        Cow::Owned(fold_accents(&request.text))
    } else {
        Cow::Borrowed(request.text.as_str())
    };

    cipher.apply(request.operation, &text)
}

/// Validate and run a request, folding any failure into the result record
pub fn process(request: &CipherRequest) -> CipherResult {
    let result = run(request);
    if let Err(err) = &result {
        info!("{} {} failed ({}): {}", request.operation, request.cipher, err.kind(), err);
    }
    result.into()
}
