//! JSON output formatting

use anyhow::Result;
use serde::Serialize;
use serde_json::json;

/// Prints any serializable payload as pretty JSON.
pub fn print<T: Serialize>(payload: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}

/// Prints the no-results outcome as a structured error payload.
pub fn print_not_found(message: &str) -> Result<()> {
    print(&json!({
        "error": message,
        "status": 404,
    }))
}
