use crate::cipher::{Key, KeySquare};
use crate::error::{CipherError, Result};

/// Render the Playfair key square for a keyword
pub fn show_square(key: &str) -> Result<String> {
    if key.is_empty() {
        return Err(CipherError::MissingKey { noun: "keyword", cipher: "Playfair cipher" });
    }
    let key = Key::parse(key, "Playfair")?;
    let square = KeySquare::generate(key.as_str());

    let mut output = String::new();
    output.push_str(&format!("Playfair key square for {}\n\n", key));
    output.push_str(&square.to_string());
    Ok(output)
}
