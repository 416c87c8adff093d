//! Input resolution for CLI commands.
//!
//! Supports three input sources:
//! - Inline JSON string via `--input` / `-i`
//! - JSON file via `--input-file` / `-f`
//! - Stdin via `--input-file -`

use std::io::Read;
use std::path::Path;

/// Resolves the final JSON params string from CLI arguments.
///
/// `--input-file` takes precedence over `--input`; a file argument of
/// `-` reads stdin instead.
pub fn resolve_input(input: &str, input_file: Option<&str>) -> anyhow::Result<String> {
    match input_file {
        Some("-") => read_from_stdin(),
        Some(path) => read_from_file(path),
        None => Ok(input.to_string()),
    }
}

fn read_from_file(path: &str) -> anyhow::Result<String> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("params file not found: {path}");
    }
    let content = std::fs::read_to_string(file_path)
        .map_err(|e| anyhow::anyhow!("failed to read params file: {e}"))?;
    let trimmed = content.trim().to_string();
    validate_json(&trimmed)?;
    Ok(trimmed)
}

fn read_from_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("failed to read stdin: {e}"))?;
    let trimmed = buffer.trim().to_string();
    validate_json(&trimmed)?;
    Ok(trimmed)
}

fn validate_json(input: &str) -> anyhow::Result<()> {
    serde_json::from_str::<serde_json::Value>(input)
        .map_err(|e| anyhow::anyhow!("invalid JSON params: {e}"))?;
    Ok(())
}
