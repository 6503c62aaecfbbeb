//! Shared letter and modular-arithmetic primitives.
//!
//! Only ASCII `A`-`Z` (after uppercasing) count as letters. Everything else,
//! including non-ASCII letters, is a non-letter unless it was folded first
//! with [`fold_accents`].

/// Size of the Latin alphabet every cipher works modulo
pub const ALPHABET_LEN: u32 = 26;

/// Greatest common divisor by the Euclidean algorithm. `gcd(a, 0) == a`.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

/// Modular multiplicative inverse of `a` modulo `m` by linear search.
/// Returns `None` when `gcd(a, m) != 1`.
pub fn mod_inverse(a: u32, m: u32) -> Option<u32> {
    if m < 2 {
        return None;
    }
    let a = a % m;
    (1..m).find(|&x| (a * x) % m == 1)
}

/// True for ASCII letters in either case
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Position of an ASCII letter in the alphabet (A = 0), case-insensitive
pub fn letter_index(c: char) -> Option<u32> {
    if is_letter(c) {
        Some(c.to_ascii_uppercase() as u32 - 'A' as u32)
    } else {
        None
    }
}

/// Uppercase letter at `index` (taken modulo 26)
pub fn index_letter(index: u32) -> char {
    (b'A' + (index % ALPHABET_LEN) as u8) as char
}

/// Uppercase the text and pass every letter position through `map`.
/// Non-letters are copied unchanged.
pub fn map_letters<F>(text: &str, mut map: F) -> String
where
    F: FnMut(u32) -> u32,
{
    text.chars()
        .map(|c| match letter_index(c) {
            Some(p) => index_letter(map(p)),
            None => c.to_ascii_uppercase(),
        })
        .collect()
}

/// Uppercase and drop everything that is not an ASCII letter
pub fn letters_only(text: &str) -> String {
    text.chars()
        .filter(|c| is_letter(*c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Fold accented Latin letters (Latin-1 through Latin Extended-B) to their
/// ASCII base letters. Ligatures expand (`Æ` -> `AE`, `ß` -> `ss`); anything
/// outside that range, or without a plain-letter transliteration, is left alone.
pub fn fold_accents(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match fold_char(c) {
            Some(base) => out.push_str(base),
            None => out.push(c),
        }
    }
    out
}

fn fold_char(c: char) -> Option<&'static str> {
    if !('\u{00C0}'..='\u{024F}').contains(&c) || !c.is_alphabetic() {
        return None;
    }
    deunicode::deunicode_char(c)
        .filter(|base| !base.is_empty() && base.chars().all(|b| b.is_ascii_alphabetic()))
}
