use crate::request::CipherKind;

/// Describe every supported cipher
pub fn show_list() -> String {
    let mut output = String::new();

    output.push_str("Supported Ciphers\n");
    output.push_str("=================\n");

    for kind in CipherKind::ALL {
        let info = kind.info();
        output.push_str(&format!("\n{} ({})\n", info.name, kind.id()));
        output.push_str(&format!("  Parameters: {}\n", info.parameters));
        output.push_str(&format!("  Description: {}\n", info.description));
        output.push_str(&format!("  History: {}\n", info.history));
    }

    output
}
