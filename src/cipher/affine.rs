use crate::alphabet::{gcd, map_letters, mod_inverse, ALPHABET_LEN};
use crate::error::{CipherError, Result};

/// Encrypt with `E(x) = (a * x + b) mod 26`.
/// `a` must be coprime with 26.
pub fn encrypt(text: &str, a: u32, b: u32) -> Result<String> {
    check_coprime(a)?;
    let a = a % ALPHABET_LEN;
    let b = b % ALPHABET_LEN;
    Ok(map_letters(text, |x| a * x + b))
}

/// Decrypt with `D(y) = a⁻¹ * (y - b + 26) mod 26`
pub fn decrypt(text: &str, a: u32, b: u32) -> Result<String> {
    check_coprime(a)?;
    let a_inv = mod_inverse(a, ALPHABET_LEN).ok_or(CipherError::NoInverse(a))?;
    let b = b % ALPHABET_LEN;
    Ok(map_letters(text, |y| a_inv * (y + ALPHABET_LEN - b)))
}

fn check_coprime(a: u32) -> Result<()> {
    if gcd(a, ALPHABET_LEN) != 1 {
        return Err(CipherError::NotCoprime(a));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VALID_A: [u32; 12] = [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25];

    #[test]
    fn test_known_vector() {
        assert_eq!(encrypt("AFFINE CIPHER", 5, 8).unwrap(), "IHHWVC SWFRCP");
        assert_eq!(decrypt("IHHWVC SWFRCP", 5, 8).unwrap(), "AFFINE CIPHER");
    }

    #[test]
    fn test_rejects_non_coprime_a() {
        assert!(matches!(encrypt("abc", 2, 3), Err(CipherError::NotCoprime(2))));
        assert!(matches!(encrypt("abc", 13, 0), Err(CipherError::NotCoprime(13))));
        assert!(matches!(decrypt("abc", 26, 0), Err(CipherError::NotCoprime(26))));
    }

    #[test]
    fn test_large_a_wraps() {
        assert_eq!(encrypt("HELLO", 27, 0).unwrap(), "HELLO");
    }

    proptest! {
        #[test]
        fn prop_roundtrip(text in "[a-zA-Z ,]{0,64}", idx in 0usize..12, b in 0u32..26) {
            let a = VALID_A[idx];
            let cipher = encrypt(&text, a, b).unwrap();
            prop_assert_eq!(decrypt(&cipher, a, b).unwrap(), text.to_ascii_uppercase());
        }
    }
}
