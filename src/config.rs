//! Startup configuration.
//!
//! Settings come from a `.env` file when present, then the process
//! environment, then CLI flags; they are loaded once in `main` and passed by
//! reference. No global state.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const DB_PATH_KEY: &str = "WALLET_DB";
pub const ADMIN_ID_KEY: &str = "WALLET_ADMIN_ID";

const DEFAULT_DB_PATH: &str = "wallet_watch.db";
const DEFAULT_ADMIN_ID: i64 = 777;

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the SQLite database file.
    pub db_path: String,
    /// Reserved user id that is granted administrator access.
    pub admin_id: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            admin_id: DEFAULT_ADMIN_ID,
        }
    }
}

impl Config {
    /// Builds the configuration from `.env` (if the file exists) and the
    /// process environment. Environment variables win over `.env` entries;
    /// missing or unparsable values fall back to the defaults.
    pub fn load() -> Self {
        let mut config = Config::default();
        let dotenv = read_dotenv(Path::new(".env"));

        if let Some(path) = lookup(DB_PATH_KEY, &dotenv) {
            config.db_path = path;
        }
        if let Some(id) = lookup(ADMIN_ID_KEY, &dotenv).and_then(|v| v.parse::<i64>().ok()) {
            config.admin_id = id;
        }

        tracing::debug!(db_path = %config.db_path, admin_id = config.admin_id, "configuration loaded");
        config
    }
}

fn lookup(key: &str, dotenv: &HashMap<String, String>) -> Option<String> {
    std::env::var(key).ok().or_else(|| dotenv.get(key).cloned())
}

/// Parses `KEY=VALUE` lines; anything else is ignored. A missing file is not
/// an error, the defaults cover it.
fn read_dotenv(path: &Path) -> HashMap<String, String> {
    let Ok(contents) = fs::read_to_string(path) else {
        return HashMap::new();
    };

    contents
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            line.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        })
        .collect()
}
