use crate::alphabet::{index_letter, letter_index, ALPHABET_LEN};
use crate::cipher::Key;

/// Shift each letter by the next key letter. Non-letters pass through and
/// do not advance the key.
pub fn encrypt(text: &str, key: &Key) -> String {
    apply(text, key, |p, k| p + k)
}

pub fn decrypt(text: &str, key: &Key) -> String {
    apply(text, key, |p, k| p + ALPHABET_LEN - k)
}

fn apply<F>(text: &str, key: &Key, combine: F) -> String
where
    F: Fn(u32, u32) -> u32,
{
    let shifts = key.indices();
    let mut cursor = 0usize;

    text.chars()
        .map(|c| match letter_index(c) {
            Some(p) => {
                let k = shifts[cursor % shifts.len()];
                cursor += 1;
                index_letter(combine(p, k))
            }
            None => c.to_ascii_uppercase(),
        })
        .collect()
}
