//! Configuration parsing – reads a `KEY=VALUE` file (`dashboard.conf`).

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use tracing::info;

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // ── range picker ─────────────────────────────────────────────────
    /// Length of the initial range, ending today.
    pub initial_range_days: u32,

    // ── collaborators ────────────────────────────────────────────────
    /// Base URL the charts and table refetch from.
    pub backend_url: String,
    /// Row count requested by the best-sellers table.
    pub bestsellers_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_range_days: 30,
            backend_url: "http://localhost:3001/".into(),
            bestsellers_limit: 20,
        }
    }
}

impl Config {
    /// Default config path.
    pub fn default_path() -> &'static str {
        "/etc/dashboard/dashboard.conf"
    }

    /// `(today - initial_range_days, today)`.
    pub fn initial_range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let from = today
            .checked_sub_signed(Duration::days(i64::from(self.initial_range_days)))
            .unwrap_or(today);
        (from, today)
    }
}

/// Parse a `KEY=VALUE` configuration file.
///
/// Lines starting with `#` are comments.  Values may be optionally
/// double-quoted.  Unknown keys are silently ignored; unparseable values
/// fall back to their defaults.
pub fn load(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config: {}", path.display()))?;
    let config = from_str(&text);
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Like [`load`], but a missing file yields the defaults.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    load(path)
}

pub fn from_str(text: &str) -> Config {
    let map = parse_conf(text);
    let defaults = Config::default();

    let get = |key: &str| -> Option<String> { map.get(key).cloned() };
    let get_u32 = |key: &str, default: u32| -> u32 {
        get(key).and_then(|v| v.parse().ok()).unwrap_or(default)
    };

    let mut backend_url = get("BACKEND_URL")
        .filter(|s| !s.is_empty())
        .unwrap_or(defaults.backend_url);
    if !backend_url.ends_with('/') {
        backend_url.push('/');
    }

    Config {
        initial_range_days: get_u32("INITIAL_RANGE_DAYS", defaults.initial_range_days),
        backend_url,
        bestsellers_limit: get_u32("BESTSELLERS_LIMIT", defaults.bestsellers_limit),
    }
}

/// Parse `KEY=VALUE` lines into a map, stripping optional double-quotes.
fn parse_conf(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            let key = key.trim();
            let val = val.trim().trim_matches('"');
            map.insert(key.to_string(), val.to_string());
        }
    }
    map
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_conf() {
        let text = r#"
# comment
INITIAL_RANGE_DAYS=7
BACKEND_URL="https://shop.example.com/"
SOMETHING_ELSE = ignored
"#;
        let map = parse_conf(text);
        assert_eq!(map["INITIAL_RANGE_DAYS"], "7");
        assert_eq!(map["BACKEND_URL"], "https://shop.example.com/");
        assert_eq!(map["SOMETHING_ELSE"], "ignored");
    }

    #[test]
    fn test_defaults_and_fallbacks() {
        let config = from_str("INITIAL_RANGE_DAYS=soon\nBACKEND_URL=http://api:8080\n");
        assert_eq!(config.initial_range_days, 30);
        assert_eq!(config.backend_url, "http://api:8080/");
        assert_eq!(config.bestsellers_limit, 20);
    }

    #[test]
    fn test_initial_range_ends_today() {
        let config = from_str("INITIAL_RANGE_DAYS=30\n");
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let (from, to) = config.initial_range(today);
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(to, today);
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile("BESTSELLERS_LIMIT=50\n");
        let config = load(tmp.as_path()).unwrap();
        assert_eq!(config.bestsellers_limit, 50);
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("dash_test_missing").join("none.conf");
        assert!(load(&path).is_err());
        assert_eq!(load_or_default(&path).unwrap(), Config::default());
    }

    fn tempfile(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("dash_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.conf");
        std::fs::write(&path, content).unwrap();
        path
    }
}
