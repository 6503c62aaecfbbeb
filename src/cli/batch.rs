use crate::error::{CipherError, Result};
use crate::request::{process, CipherRequest, CipherResult};
use log::info;
use std::path::Path;

/// Options for the batch command
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub pretty: bool,
}

/// Run every request in a JSON array. A malformed or failing entry yields an
/// error record in its slot; only an unreadable array fails the whole batch.
pub fn process_batch(json: &str) -> Result<Vec<CipherResult>> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;

    let results: Vec<CipherResult> = entries
        .into_iter()
        .map(|entry| match serde_json::from_value::<CipherRequest>(entry) {
            Ok(request) => process(&request),
            Err(e) => CipherError::from(e).into(),
        })
        .collect();

    let failed = results.iter().filter(|r| !r.is_ok()).count();
    info!("processed {} requests ({} failed)", results.len(), failed);
    Ok(results)
}

/// Read a batch file and return the JSON array of results
pub fn run_batch(input_path: &Path, options: &BatchOptions) -> Result<String> {
    let json = std::fs::read_to_string(input_path)?;
    let results = process_batch(&json)?;

    let output = if options.pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };
    Ok(output)
}
