use crate::request::CipherKind;
use serde::Serialize;

/// Human-readable description of a cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CipherInfo {
    pub name: &'static str,
    pub parameters: &'static str,
    pub description: &'static str,
    pub history: &'static str,
}

impl CipherKind {
    pub fn info(&self) -> CipherInfo {
        match self {
            Self::Caesar => CipherInfo {
                name: "Caesar Cipher",
                parameters: "--shift <1-25>",
                description: "A substitution cipher in which each letter is shifted a certain number of places down the alphabet.",
                history: "Named after Julius Caesar, who used it to communicate with his generals.",
            },
            Self::Atbash => CipherInfo {
                name: "Atbash Cipher",
                parameters: "none",
                description: "Replaces each letter with its counterpart from the reversed alphabet.",
                history: "An ancient cipher used in Hebrew scripts dating back to 500-600 BCE.",
            },
            Self::Vigenere => CipherInfo {
                name: "Vigenère Cipher",
                parameters: "--key <letters>",
                description: "Encrypts text by applying a series of Caesar ciphers based on the letters of a keyword.",
                history: "Developed by Blaise de Vigenère in the 16th century, considered unbreakable for centuries.",
            },
            Self::Affine => CipherInfo {
                name: "Affine Cipher",
                parameters: "-a <coprime with 26> -b <0-25>",
                description: "Encrypts letters with the function E(x) = (a * x + b) mod 26.",
                history: "An extension of the Caesar cipher, adding complexity through multiplication and addition.",
            },
            Self::RailFence => CipherInfo {
                name: "Rail Fence Cipher",
                parameters: "--rails <2 or more>",
                description: "A transposition cipher that writes the message diagonally over a number of rails and reads it row by row.",
                history: "Named for its resemblance to the zigzag pattern of a rail fence.",
            },
            Self::Playfair => CipherInfo {
                name: "Playfair Cipher",
                parameters: "--key <letters>",
                description: "Encrypts pairs of letters using a 5x5 key square constructed from a keyword.",
                history: "Invented by Charles Wheatstone, promoted by Lord Playfair in the 19th century.",
            },
            Self::Columnar => CipherInfo {
                name: "Columnar Transposition Cipher",
                parameters: "--key <letters>",
                description: "Writes the plaintext in rows and reads the columns in an order based on a keyword.",
                history: "Used historically for its simplicity in manual encryption during wars.",
            },
            Self::Morse => CipherInfo {
                name: "Morse Code",
                parameters: "none",
                description: "Encodes text characters as standardized sequences of dots and dashes.",
                history: "Developed by Samuel Morse in the 1830s, revolutionizing long-distance communication.",
            },
        }
    }
}
