use crate::error::Result;
use crate::request::{process, CipherKind, CipherParams, CipherRequest, CipherResult, Operation};
use log::debug;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

/// Options for the encrypt and decrypt commands
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub params: CipherParams,
    pub fold_accents: bool,
    /// Print the result record as JSON instead of bare text
    pub json: bool,
}

/// Read the input text. One trailing line ending is dropped from file and
/// stdin input so that `echo ... |` behaves like an inline argument.
pub fn read_text(source: &TextSource) -> Result<String> {
    let mut text = match source {
        TextSource::Inline(text) => return Ok(text.clone()),
        TextSource::File(path) => std::fs::read_to_string(path)?,
        TextSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// Build the request for one command-line invocation and run it
pub fn run_cipher(
    cipher: CipherKind,
    operation: Operation,
    text: String,
    options: &RunOptions,
) -> CipherResult {
    let request = CipherRequest {
        cipher,
        operation,
        text,
        params: options.params.clone(),
        fold_accents: options.fold_accents,
    };
    process(&request)
}

/// Render a result the way the command prints it
pub fn render_result(result: &CipherResult, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(result)?);
    }
    match result {
        CipherResult::Text { text } => Ok(text.clone()),
        CipherResult::Error { message, .. } => Ok(message.clone()),
    }
}

/// Write command output to a file, or stdout when no path is given
pub fn write_output(output: Option<&Path>, body: &str) -> Result<()> {
    match output {
        Some(path) => {
            debug!("writing {} bytes to {}", body.len(), path.display());
            std::fs::write(path, body)?;
        }
        None => println!("{}", body),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_text_inline() {
        let text = read_text(&TextSource::Inline("hello\n".into())).unwrap();
        assert_eq!(text, "hello\n");
    }

    #[test]
    fn test_read_text_file_drops_one_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "line one\nline two\r\n").unwrap();

        let text = read_text(&TextSource::File(path)).unwrap();
        assert_eq!(text, "line one\nline two");
    }

    #[test]
    fn test_read_text_missing_file() {
        let dir = tempdir().unwrap();
        let result = read_text(&TextSource::File(dir.path().join("nope.txt")));
        assert!(result.is_err());
    }

    #[test]
    fn test_run_cipher() {
        let options = RunOptions {
            params: CipherParams {
                rails: Some(3),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = run_cipher(
            CipherKind::RailFence,
            Operation::Encrypt,
            "WE ARE DISCOVERED FLEE AT ONCE".into(),
            &options,
        );
        assert_eq!(result.text(), Some("WECRLTEERDSOEEFEAOCAIVDEN"));
    }

    #[test]
    fn test_render_result() {
        let ok = CipherResult::Text { text: "ABC".into() };
        assert_eq!(render_result(&ok, false).unwrap(), "ABC");
        assert_eq!(render_result(&ok, true).unwrap(), r#"{"text":"ABC"}"#);
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_output(Some(&path), "SVOOL").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "SVOOL");
    }
}
