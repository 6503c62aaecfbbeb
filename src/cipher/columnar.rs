use crate::alphabet::letters_only;
use crate::cipher::Key;

/// Order in which columns are read: key letters sorted alphabetically, ties
/// broken left to right.
pub fn column_order(key: &Key) -> Vec<usize> {
    let letters = key.as_str().as_bytes();
    let mut order: Vec<usize> = (0..letters.len()).collect();
    // sort_by_key is stable, so repeated letters keep their key order
    order.sort_by_key(|&i| letters[i]);
    order
}

/// Deal letters round-robin into one column per key letter, then read the
/// columns in [`column_order`].
pub fn encrypt(text: &str, key: &Key) -> String {
    let text = letters_only(text);
    let width = key.len();

    let mut columns = vec![String::new(); width];
    for (i, c) in text.chars().enumerate() {
        columns[i % width].push(c);
    }

    column_order(key)
        .into_iter()
        .map(|col| columns[col].as_str())
        .collect()
}

pub fn decrypt(text: &str, key: &Key) -> String {
    let text: Vec<char> = letters_only(text).chars().collect();
    let width = key.len();
    let rows = text.len().div_ceil(width);

    // The first `full` columns hold `rows` letters, the rest one fewer
    let full = match text.len() % width {
        0 => width,
        rem => rem,
    };
    let column_len = |col: usize| if col < full { rows } else { rows - 1 };

    let mut columns: Vec<&[char]> = vec![&text[..0]; width];
    let mut start = 0;
    for col in column_order(key) {
        let len = column_len(col);
        columns[col] = &text[start..start + len];
        start += len;
    }

    let mut plain = String::with_capacity(text.len());
    for row in 0..rows {
        for column in &columns {
            if let Some(&c) = column.get(row) {
                plain.push(c);
            }
        }
    }
    plain
}
