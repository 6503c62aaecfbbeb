//! The cipher implementations and the validated cipher selection that
//! dispatches to them.

pub mod affine;
pub mod atbash;
pub mod caesar;
pub mod columnar;
pub mod playfair;
pub mod railfence;
pub mod vigenere;

pub use playfair::KeySquare;

use crate::alphabet::{gcd, letter_index, ALPHABET_LEN};
use crate::error::{CipherError, Result};
use crate::morse;
use crate::request::{CipherKind, CipherParams, Operation};
use std::fmt;

/// A non-empty, purely alphabetic keyword, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(String);

impl Key {
    /// Validate a keyword. `cipher` names the cipher in error messages.
    pub fn parse(raw: &str, cipher: &'static str) -> Result<Self> {
        if raw.is_empty() {
            return Err(CipherError::MissingKey { noun: "key", cipher });
        }
        if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CipherError::NonAlphabeticKey(cipher));
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Alphabet positions of the key letters
    pub fn indices(&self) -> Vec<u32> {
        self.0.chars().filter_map(letter_index).collect()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A cipher together with its validated parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    Caesar { shift: u32 },
    Atbash,
    Vigenere { key: Key },
    Affine { a: u32, b: u32 },
    RailFence { rails: usize },
    Playfair { key: Key },
    Columnar { key: Key },
    Morse,
}

impl Cipher {
    /// Validate the raw parameter bag for `kind`. Parameters that the kind
    /// does not use are ignored.
    pub fn from_params(kind: CipherKind, params: &CipherParams) -> Result<Self> {
        let cipher = match kind {
            CipherKind::Caesar => {
                let shift = params.shift.unwrap_or(0);
                if !(1..=25).contains(&shift) {
                    return Err(CipherError::InvalidShift(shift));
                }
                Self::Caesar { shift: shift as u32 }
            }
            CipherKind::Atbash => Self::Atbash,
            CipherKind::Vigenere => Self::Vigenere {
                key: required_key(params, "key", "Vigenère cipher", "Vigenère")?,
            },
            CipherKind::Affine => {
                let a = params.a.unwrap_or(0);
                let b = params.b.unwrap_or(0);
                if a <= 0 || !(0..26).contains(&b) {
                    return Err(CipherError::InvalidAffineKeys { a, b });
                }
                let a = a.rem_euclid(i64::from(ALPHABET_LEN)) as u32;
                if gcd(a, ALPHABET_LEN) != 1 {
                    return Err(CipherError::NotCoprime(a));
                }
                Self::Affine { a, b: b as u32 }
            }
            CipherKind::RailFence => {
                let rails = params.rails.unwrap_or(0);
                if rails < 2 {
                    return Err(CipherError::InvalidRails(rails));
                }
                // Counts past usize still behave as "more rails than letters"
                Self::RailFence {
                    rails: usize::try_from(rails).unwrap_or(usize::MAX),
                }
            }
            CipherKind::Playfair => Self::Playfair {
                key: required_key(params, "keyword", "Playfair cipher", "Playfair")?,
            },
            CipherKind::Columnar => Self::Columnar {
                key: required_key(
                    params,
                    "keyword",
                    "Columnar Transposition cipher",
                    "Columnar Transposition",
                )?,
            },
            CipherKind::Morse => Self::Morse,
        };
        Ok(cipher)
    }

    pub fn kind(&self) -> CipherKind {
        match self {
            Self::Caesar { .. } => CipherKind::Caesar,
            Self::Atbash => CipherKind::Atbash,
            Self::Vigenere { .. } => CipherKind::Vigenere,
            Self::Affine { .. } => CipherKind::Affine,
            Self::RailFence { .. } => CipherKind::RailFence,
            Self::Playfair { .. } => CipherKind::Playfair,
            Self::Columnar { .. } => CipherKind::Columnar,
            Self::Morse => CipherKind::Morse,
        }
    }

    /// Run the cipher in the given direction. All-or-nothing: either the
    /// whole text is transformed or an error is returned.
    pub fn apply(&self, operation: Operation, text: &str) -> Result<String> {
        use Operation::{Decrypt, Encrypt};

        let output = match (self, operation) {
            (Self::Caesar { shift }, Encrypt) => caesar::encrypt(text, *shift),
            (Self::Caesar { shift }, Decrypt) => caesar::decrypt(text, *shift),
            (Self::Atbash, _) => atbash::transform(text),
            (Self::Vigenere { key }, Encrypt) => vigenere::encrypt(text, key),
            (Self::Vigenere { key }, Decrypt) => vigenere::decrypt(text, key),
            (Self::Affine { a, b }, Encrypt) => affine::encrypt(text, *a, *b)?,
            (Self::Affine { a, b }, Decrypt) => affine::decrypt(text, *a, *b)?,
            (Self::RailFence { rails }, Encrypt) => railfence::encrypt(text, *rails)?,
            (Self::RailFence { rails }, Decrypt) => railfence::decrypt(text, *rails)?,
            (Self::Playfair { key }, Encrypt) => playfair::encrypt(text, key)?,
            (Self::Playfair { key }, Decrypt) => playfair::decrypt(text, key)?,
            (Self::Columnar { key }, Encrypt) => columnar::encrypt(text, key),
            (Self::Columnar { key }, Decrypt) => columnar::decrypt(text, key),
            (Self::Morse, Encrypt) => morse::encode(text),
            (Self::Morse, Decrypt) => {
                morse::validate(text)?;
                morse::decode(text)
            }
        };
        Ok(output)
    }
}

/// Keys for the keyword ciphers. `noun` and `cipher` fill the missing-key
/// message, `label` the non-alphabetic one.
fn required_key(
    params: &CipherParams,
    noun: &'static str,
    cipher: &'static str,
    label: &'static str,
) -> Result<Key> {
    match params.key.as_deref() {
        None | Some("") => Err(CipherError::MissingKey { noun, cipher }),
        Some(raw) => Key::parse(raw, label),
    }
}
