//! `logist validate`: Check an exchange document.

use anyhow::Context;
use std::path::Path;

pub fn run(file: &Path) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    match logist_validator::validate_encoded(&text) {
        Ok(data) => {
            let kind = if data.get(logist_validator::REQUEST_KEY).is_some() {
                "request"
            } else {
                "response"
            };
            println!("✅ {} is a valid {kind} document", file.display());
            Ok(())
        }
        Err(violation) => anyhow::bail!("{} is invalid: {violation}", file.display()),
    }
}
