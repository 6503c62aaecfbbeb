use crate::alphabet::{map_letters, ALPHABET_LEN};

/// Shift every letter forward by `shift` positions (mod 26).
/// The caller is responsible for keeping `shift` in 1..=25.
pub fn encrypt(text: &str, shift: u32) -> String {
    let shift = shift % ALPHABET_LEN;
    map_letters(text, |p| p + shift)
}

/// Inverse of [`encrypt`]: shifting by `26 - shift`
pub fn decrypt(text: &str, shift: u32) -> String {
    encrypt(text, ALPHABET_LEN - shift % ALPHABET_LEN)
}
