//! Playfair digraph substitution over a 5x5 key square.
//!
//! The square holds A-Z without J; J is folded to I everywhere.

use crate::alphabet::letters_only;
use crate::cipher::Key;
use crate::error::{CipherError, Result};
use std::fmt;

const SIZE: usize = 5;
const FILLER: char = 'X';

/// 5x5 grid of the 25 letters A-Z minus J, key letters first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    cells: [[char; SIZE]; SIZE],
}

impl KeySquare {
    /// Build the square: deduplicated key letters in first-occurrence order,
    /// then the rest of the alphabet in natural order.
    pub fn generate(key: &str) -> Self {
        let mut letters: Vec<char> = Vec::with_capacity(SIZE * SIZE);
        let key_letters = letters_only(key).replace('J', "I");

        for c in key_letters.chars().chain('A'..='Z') {
            if c != 'J' && !letters.contains(&c) {
                letters.push(c);
            }
        }

        let mut cells = [[' '; SIZE]; SIZE];
        for (i, c) in letters.into_iter().enumerate() {
            cells[i / SIZE][i % SIZE] = c;
        }
        Self { cells }
    }

    /// (row, column) of a letter, or `None` if it is not in the square
    pub fn position(&self, letter: char) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(|&c| c == letter)
                .map(|col| (row, col))
        })
    }

    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[row % SIZE][col % SIZE]
    }

    pub fn rows(&self) -> &[[char; SIZE]; SIZE] {
        &self.cells
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Uppercase, keep letters only, fold J into I
fn prepare(text: &str) -> Vec<char> {
    letters_only(text)
        .chars()
        .map(|c| if c == 'J' { 'I' } else { c })
        .collect()
}

/// Split plaintext into digraphs. A doubled letter gets an X inserted after
/// its first half; a trailing single letter is padded with X.
fn plaintext_digraphs(chars: &[char]) -> Vec<(char, char)> {
    let mut digraphs = Vec::with_capacity(chars.len() / 2 + 1);
    let mut i = 0;
    while i < chars.len() {
        let first = chars[i];
        match chars.get(i + 1) {
            Some(&second) if second != first => {
                digraphs.push((first, second));
                i += 2;
            }
            _ => {
                digraphs.push((first, FILLER));
                i += 1;
            }
        }
    }
    digraphs
}

/// Pair ciphertext blindly; only a trailing odd letter is padded
fn ciphertext_digraphs(chars: &[char]) -> Vec<(char, char)> {
    chars
        .chunks(2)
        .map(|pair| (pair[0], pair.get(1).copied().unwrap_or(FILLER)))
        .collect()
}

fn substitute(square: &KeySquare, digraphs: &[(char, char)], step: usize) -> Result<String> {
    let mut out = String::with_capacity(digraphs.len() * 2);

    for &(a, b) in digraphs {
        let (r1, c1) = square.position(a).ok_or(CipherError::InvalidCharacter(a))?;
        let (r2, c2) = square.position(b).ok_or(CipherError::InvalidCharacter(b))?;

        let (p, q) = if r1 == r2 {
            ((r1, c1 + step), (r2, c2 + step))
        } else if c1 == c2 {
            ((r1 + step, c1), (r2 + step, c2))
        } else {
            ((r1, c2), (r2, c1))
        };

        out.push(square.at(p.0, p.1));
        out.push(square.at(q.0, q.1));
    }
    Ok(out)
}

pub fn encrypt(text: &str, key: &Key) -> Result<String> {
    let square = KeySquare::generate(key.as_str());
    let digraphs = plaintext_digraphs(&prepare(text));
    substitute(&square, &digraphs, 1)
}

/// Decryption shifts left/up by one, which is a step of 4 modulo 5
pub fn decrypt(text: &str, key: &Key) -> Result<String> {
    let square = KeySquare::generate(key.as_str());
    let digraphs = ciphertext_digraphs(&prepare(text));
    substitute(&square, &digraphs, SIZE - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> Key {
        Key::parse(s, "Playfair").unwrap()
    }

    #[test]
    fn test_key_square_layout() {
        let square = KeySquare::generate("PLAYFAIR");
        assert_eq!(
            square.to_string(),
            "P L A Y F\nI R B C D\nE G H K M\nN O Q S T\nU V W X Z\n"
        );
        assert_eq!(square, KeySquare::generate("PLAYFAIR"));
    }

    #[test]
    fn test_key_square_folds_j() {
        let square = KeySquare::generate("JUMP");
        assert_eq!(square.rows()[0], ['I', 'U', 'M', 'P', 'A']);
        assert_eq!(square.position('J'), None);
    }

    #[test]
    fn test_key_square_contains_each_letter_once() {
        let square = KeySquare::generate("THEQUICKBROWNFOX");
        let mut seen: Vec<char> = square.rows().iter().flatten().copied().collect();
        seen.sort_unstable();
        let expected: Vec<char> = ('A'..='Z').filter(|&c| c != 'J').collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_digraph_split() {
        let chars = prepare("balloon");
        assert_eq!(
            plaintext_digraphs(&chars),
            vec![('B', 'A'), ('L', 'X'), ('L', 'O'), ('O', 'N')]
        );
        assert_eq!(plaintext_digraphs(&prepare("abc")), vec![('A', 'B'), ('C', 'X')]);
    }

    #[test]
    fn test_textbook_vector() {
        let k = key("MONARCHY");
        // Published vector pads the odd letter with Z
        assert_eq!(encrypt("INSTRUMENTSZ", &k).unwrap(), "GATLMZCLRQTX");
        assert_eq!(decrypt("GATLMZCLRQTX", &k).unwrap(), "INSTRUMENTSZ");

        // Our own padding is X
        assert_eq!(encrypt("INSTRUMENTS", &k).unwrap(), "GATLMZCLRQXA");
        assert_eq!(decrypt("GATLMZCLRQXA", &k).unwrap(), "INSTRUMENTSX");
    }

    #[test]
    fn test_row_column_and_rectangle_rules() {
        // Square for MONARCHY:
        // M O N A R / C H Y B D / E F G I K / L P Q S T / U V W X Z
        let k = key("MONARCHY");
        assert_eq!(encrypt("MO", &k).unwrap(), "ON"); // same row
        assert_eq!(encrypt("RZ", &k).unwrap(), "DR"); // same column, wraps
        assert_eq!(encrypt("HS", &k).unwrap(), "BP"); // rectangle
        assert_eq!(decrypt("ON", &k).unwrap(), "MO");
        assert_eq!(decrypt("DR", &k).unwrap(), "RZ");
    }

    #[test]
    fn test_decrypt_pairs_blindly() {
        let k = key("MONARCHY");
        // An odd trailing letter is padded, doubled letters are not split
        let plain = decrypt("GAT", &k).unwrap();
        assert_eq!(plain.len(), 4);
        assert_eq!(&plain[..2], "IN");
    }

    #[test]
    fn test_roundtrip_without_doubles() {
        let k = key("KEYWORD");
        let cipher = encrypt("Hide the gold", &k).unwrap();
        assert_eq!(decrypt(&cipher, &k).unwrap(), "HIDETHEGOLDX");
    }

    #[test]
    fn test_invalid_character_is_processing_error() {
        let square = KeySquare::generate("KEY");
        let err = substitute(&square, &[('A', '#')], 1).unwrap_err();
        assert!(matches!(err, CipherError::InvalidCharacter('#')));
    }
}
