//! Rail Fence transposition.
//!
//! Whitespace is removed and the rest uppercased before either direction, so
//! decryption returns the stripped form of the original plaintext.

use crate::error::{CipherError, Result};

/// Row visited by each character position when zigzagging over `rails` rows
fn zigzag_rows(len: usize, rails: usize) -> Vec<usize> {
    let mut rows = Vec::with_capacity(len);
    let mut row = 0usize;
    let mut down = false;

    for _ in 0..len {
        if row == 0 || row == rails - 1 {
            down = !down;
        }
        rows.push(row);
        if down {
            row += 1;
        } else {
            row -= 1;
        }
    }
    rows
}

/// Rails beyond the text length never get visited, so cap them there.
fn effective_rails(rails: usize, len: usize) -> Result<usize> {
    if rails < 2 {
        return Err(CipherError::InvalidRails(i64::try_from(rails).unwrap_or(i64::MAX)));
    }
    Ok(rails.min(len.max(2)))
}

fn prepare(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Write the text in a zigzag over `rails` rows, then read row by row.
/// `rails` must be at least 2.
pub fn encrypt(text: &str, rails: usize) -> Result<String> {
    let chars = prepare(text);
    let rails = effective_rails(rails, chars.len())?;
    let rows = zigzag_rows(chars.len(), rails);

    let mut fence = vec![String::new(); rails];
    for (c, &row) in chars.iter().zip(&rows) {
        fence[row].push(*c);
    }
    Ok(fence.concat())
}

/// Rebuild the zigzag pattern, fill it row-major with the ciphertext, then
/// read it back in zigzag order.
pub fn decrypt(text: &str, rails: usize) -> Result<String> {
    let chars = prepare(text);
    let rails = effective_rails(rails, chars.len())?;
    let rows = zigzag_rows(chars.len(), rails);

    let mut row_lens = vec![0usize; rails];
    for &row in &rows {
        row_lens[row] += 1;
    }

    // Slice the ciphertext into one run per rail
    let mut fence: Vec<std::slice::Iter<'_, char>> = Vec::with_capacity(rails);
    let mut start = 0;
    for len in row_lens {
        fence.push(chars[start..start + len].iter());
        start += len;
    }

    Ok(rows
        .iter()
        .filter_map(|&row| fence[row].next().copied())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zigzag_rows() {
        assert_eq!(zigzag_rows(7, 3), vec![0, 1, 2, 1, 0, 1, 2]);
        assert_eq!(zigzag_rows(5, 2), vec![0, 1, 0, 1, 0]);
        assert!(zigzag_rows(0, 3).is_empty());
    }

    #[test]
    fn test_known_vector() {
        let plain = "WE ARE DISCOVERED FLEE AT ONCE";
        let cipher = encrypt(plain, 3).unwrap();
        assert_eq!(cipher, "WECRLTEERDSOEEFEAOCAIVDEN");
        assert_eq!(decrypt(&cipher, 3).unwrap(), "WEAREDISCOVEREDFLEEATONCE");
    }

    #[test]
    fn test_keeps_punctuation_and_digits() {
        assert_eq!(encrypt("a1,b2", 2).unwrap(), "A,21B");
        assert_eq!(decrypt("A,21B", 2).unwrap(), "A1,B2");
    }

    #[test]
    fn test_rails_exceeding_length_is_identity() {
        assert_eq!(encrypt("abc", 5).unwrap(), "ABC");
        assert_eq!(decrypt("ABC", 5).unwrap(), "ABC");
        assert_eq!(encrypt("abc", 3).unwrap(), "ABC");
    }

    #[test]
    fn test_empty_after_stripping() {
        assert_eq!(encrypt("   ", 3).unwrap(), "");
        assert_eq!(decrypt("\t\n", 3).unwrap(), "");
    }

    #[test]
    fn test_single_rail_rejected() {
        assert!(matches!(encrypt("abc", 1), Err(CipherError::InvalidRails(1))));
        assert!(matches!(decrypt("abc", 0), Err(CipherError::InvalidRails(0))));
    }

    #[test]
    fn test_huge_rail_count_is_identity() {
        assert_eq!(encrypt("he llo", usize::MAX).unwrap(), "HELLO");
        assert_eq!(decrypt("HELLO", usize::MAX).unwrap(), "HELLO");
        assert_eq!(effective_rails(1_000_000, 5).unwrap(), 5);
        assert_eq!(effective_rails(7, 0).unwrap(), 2);
    }

    proptest! {
        #[test]
        fn prop_roundtrip(text in "[a-zA-Z0-9 .,!?]{0,80}", rails in 2usize..12) {
            let expected: String = text
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| c.to_ascii_uppercase())
                .collect();
            prop_assert_eq!(decrypt(&encrypt(&text, rails).unwrap(), rails).unwrap(), expected);
        }
    }
}
