use crate::alphabet::map_letters;

/// Mirror every letter through the alphabet (A <-> Z, B <-> Y, ...).
/// The same function encrypts and decrypts.
pub fn transform(text: &str) -> String {
    map_letters(text, |p| 25 - p)
}
