use std::error::Error;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

fn ciphertool_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ciphertool"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(ciphertool_command().args(args).output()?)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn version_flag_prints_build_information() -> Result<(), Box<dyn Error>> {
    let output = run(&["--version"])?;
    assert!(output.status.success());
    assert!(
        stdout(&output).starts_with("ciphertool "),
        "unexpected version line: {}",
        stdout(&output)
    );
    Ok(())
}

#[test]
fn running_without_subcommand_displays_help() -> Result<(), Box<dyn Error>> {
    let output = ciphertool_command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));
    Ok(())
}

#[test]
fn encrypt_and_decrypt_inline_text() -> Result<(), Box<dyn Error>> {
    let enc = run(&["encrypt", "caesar", "Hello, World!", "--shift", "3"])?;
    assert!(
        enc.status.success(),
        "encrypt failed: {}",
        String::from_utf8_lossy(&enc.stderr)
    );
    assert_eq!(stdout(&enc), "KHOOR, ZRUOG!");

    let dec = run(&["d", "caesar", "KHOOR, ZRUOG!", "--shift", "3"])?;
    assert_eq!(stdout(&dec), "HELLO, WORLD!");
    Ok(())
}

#[test]
fn keyword_and_numeric_parameters() -> Result<(), Box<dyn Error>> {
    let vig = run(&["encrypt", "vigenere", "ATTACKATDAWN", "--key", "lemon"])?;
    assert_eq!(stdout(&vig), "LXFOPVEFRNHR");

    let affine = run(&["encrypt", "affine", "AFFINE CIPHER", "-a", "5", "-b", "8"])?;
    assert_eq!(stdout(&affine), "IHHWVC SWFRCP");

    let rail = run(&["decrypt", "rail-fence", "WECRLTEERDSOEEFEAOCAIVDEN", "--rails", "3"])?;
    assert_eq!(stdout(&rail), "WEAREDISCOVEREDFLEEATONCE");

    let morse = run(&["decrypt", "morse", "... --- ..."])?;
    assert_eq!(stdout(&morse), "SOS");
    Ok(())
}

#[test]
fn validation_error_exits_non_zero() -> Result<(), Box<dyn Error>> {
    let output = run(&["encrypt", "affine", "hello", "-a", "13", "-b", "2"])?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("'a' must be coprime with 26."));

    let output = run(&["encrypt", "caesar", "hello", "--shift", "26"])?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("between 1 and 25"));

    let output = run(&["encrypt", "enigma", "hello"])?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn json_flag_prints_result_record() -> Result<(), Box<dyn Error>> {
    let ok = run(&["encrypt", "atbash", "hello", "--json"])?;
    assert!(ok.status.success());
    assert_eq!(stdout(&ok), r#"{"text":"SVOOL"}"#);

    let err = run(&["encrypt", "railfence", "hello", "--rails", "1", "--json"])?;
    assert!(!err.status.success());
    assert_eq!(
        stdout(&err),
        r#"{"errorKind":"validation","message":"Number of rails must be at least 2."}"#
    );
    Ok(())
}

#[test]
fn file_input_and_output() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("plain.txt");
    let output = dir.path().join("cipher.txt");
    fs::write(&input, "We are discovered. Flee at once!\n")?;

    let enc = run(&[
        "encrypt",
        "columnar",
        "--key",
        "ZEBRAS",
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])?;
    assert!(
        enc.status.success(),
        "encrypt failed: {}",
        String::from_utf8_lossy(&enc.stderr)
    );
    assert_eq!(fs::read_to_string(&output)?, "EVLNACDTESEAROFODEECWIREE");
    Ok(())
}

#[test]
fn stdin_input() -> Result<(), Box<dyn Error>> {
    let mut child = ciphertool_command()
        .args(["encrypt", "morse"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .ok_or("stdin not captured")?
        .write_all(b"SOS\n")?;
    let output = child.wait_with_output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "... --- ...");
    Ok(())
}

#[test]
fn batch_command_reports_each_request() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let batch = dir.path().join("requests.json");
    fs::write(
        &batch,
        r#"[
            {"cipher": "playfair", "operation": "encrypt", "text": "hide the gold", "key": "keyword"},
            {"cipher": "playfair", "operation": "encrypt", "text": "hide", "key": "key word"},
            {"cipher": "caesar", "operation": "encrypt", "text": "", "shift": 4}
        ]"#,
    )?;

    let output = run(&["batch", batch.to_str().unwrap()])?;
    assert!(output.status.success());

    let results: Vec<serde_json::Value> = serde_json::from_str(&stdout(&output))?;
    assert_eq!(results.len(), 3);
    assert!(results[0]["text"].is_string());
    assert_eq!(
        results[1]["message"],
        "The Playfair key must contain only alphabetic characters."
    );
    assert_eq!(results[2]["message"], "Please enter text to encrypt/decrypt.");
    Ok(())
}

#[test]
fn list_and_square_commands() -> Result<(), Box<dyn Error>> {
    let list = run(&["list"])?;
    assert!(list.status.success());
    assert!(stdout(&list).contains("Playfair Cipher (playfair)"));

    let square = run(&["square", "PLAYFAIR"])?;
    assert!(square.status.success());
    assert!(stdout(&square).contains("P L A Y F\nI R B C D\nE G H K M\nN O Q S T\nU V W X Z"));

    let bad = run(&["square", "123"])?;
    assert!(!bad.status.success());
    Ok(())
}
