//! Ciphertool - classical text ciphers and a Morse transcoder
//!
//! Every cipher is a pure function from text to text. A request names the
//! cipher, the direction and the raw parameters; dispatch validates them and
//! returns either the transformed text or a classified error.
//!
//! ## Ciphers
//!
//! - **Caesar**: shift each letter by 1-25 places
//! - **Atbash**: mirror the alphabet (self-inverse)
//! - **Vigenère**: per-letter shift driven by a repeating keyword
//! - **Affine**: `E(x) = (a * x + b) mod 26`, `a` coprime with 26
//! - **Rail Fence**: zigzag transposition over 2+ rails
//! - **Playfair**: digraph substitution on a 5x5 key square
//! - **Columnar**: column transposition ordered by a keyword
//! - **Morse**: dots and dashes, `/` between words
//!
//! Substitution ciphers pass non-letters through; the transpositions and
//! Playfair strip them, so decryption yields the uppercased, stripped text.
//!
//! ## Example
//!
//! ```
//! use ciphertool::{process, CipherKind, CipherParams, CipherRequest, Operation};
//!
//! let request = CipherRequest::new(CipherKind::Caesar, Operation::Encrypt, "Hello")
//!     .with_params(CipherParams {
//!         shift: Some(3),
//!         ..Default::default()
//!     });
//! assert_eq!(process(&request).text(), Some("KHOOR"));
//! ```

pub mod alphabet;
pub mod catalog;
pub mod cipher;
pub mod cli;
pub mod error;
pub mod logging;
pub mod morse;
pub mod request;

pub use catalog::CipherInfo;
pub use cipher::{Cipher, Key, KeySquare};
pub use error::{CipherError, ErrorKind, Result};
pub use request::{process, run, CipherKind, CipherParams, CipherRequest, CipherResult, Operation};
