//! Morse code transcoder.
//!
//! Encoded symbols are separated by a single space and words by ` / `.
//! Characters without a code are dropped when encoding, unknown symbols are
//! dropped when decoding.

use crate::error::{CipherError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Word separator token in encoded output
pub const WORD_SEPARATOR: &str = " / ";

/// International Morse code for letters, digits and punctuation
pub const MORSE_TABLE: [(char, &str); 54] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

fn encode_table() -> &'static HashMap<char, &'static str> {
    static TABLE: OnceLock<HashMap<char, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| MORSE_TABLE.iter().copied().collect())
}

fn decode_table() -> &'static HashMap<&'static str, char> {
    static TABLE: OnceLock<HashMap<&'static str, char>> = OnceLock::new();
    TABLE.get_or_init(|| MORSE_TABLE.iter().map(|&(c, code)| (code, c)).collect())
}

/// Code for a single character, case-insensitive
pub fn code_for(c: char) -> Option<&'static str> {
    encode_table().get(&c.to_ascii_uppercase()).copied()
}

/// Character for a single code symbol
pub fn char_for(symbol: &str) -> Option<char> {
    decode_table().get(symbol).copied()
}

/// Encode text. A space becomes the `/` word token; unsupported characters
/// are silently dropped.
pub fn encode(text: &str) -> String {
    let tokens: Vec<&str> = text
        .chars()
        .filter_map(|c| if c == ' ' { Some("/") } else { code_for(c) })
        .collect();
    tokens.join(" ")
}

/// Reject anything but dots, dashes, spaces and slashes
pub fn validate(code: &str) -> Result<()> {
    if code.chars().all(|c| matches!(c, '.' | '-' | ' ' | '/')) {
        Ok(())
    } else {
        Err(CipherError::InvalidMorse)
    }
}

/// Decode Morse. Words are split on ` / `, symbols on single spaces, and
/// symbols with no table entry are dropped. Words are rejoined with one space.
pub fn decode(code: &str) -> String {
    let words: Vec<String> = code
        .split(WORD_SEPARATOR)
        .map(|word| word.trim().split(' ').filter_map(char_for).collect())
        .collect();
    words.join(" ").trim().to_string()
}
