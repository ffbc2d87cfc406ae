use serde::{Deserialize, Serialize};

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DATABASE_NOT_INITIALIZED: &str = "⚠️  Available but not initialized";
pub const DATABASE_WORKING: &str = "✅ Connected & Working";
pub const ENV_SET: &str = "✅ Set";
pub const ENV_NOT_SET: &str = "❌ Not Set";
pub const CONNECTED: &str = "Connected";
pub const NOT_CONNECTED: &str = "Not Connected";

/// Collections reported by the diagnostics endpoint.
pub const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Store errors are cut to this many characters in diagnostics.
pub const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub fn env_status(is_set: bool) -> String {
    let status = if is_set { ENV_SET } else { ENV_NOT_SET };
    status.to_string()
}

pub fn connected_with_error(error: &str) -> String {
    format!("⚠️  Connected but Error: {}", truncate_chars(error, MAX_ERROR_CHARS))
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
