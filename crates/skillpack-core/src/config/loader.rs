//! Environment loading helpers.
//!
//! Keeps the fallback chain in one place so callers never touch `std::env::var`.

use std::env;
use std::path::Path;

/// Load `.env` from the current directory (never overrides variables already set).
pub fn load_dotenv() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let path = env::current_dir()
            .map(|d| d.join(".env"))
            .unwrap_or_else(|_| std::path::PathBuf::from(".env"));
        apply_dotenv_file(&path);
    });
}

fn apply_dotenv_file(path: &Path) {
    let Ok(content) = std::fs::read_to_string(path) else {
        return;
    };
    for (key, value) in parse_dotenv(&content) {
        if env::var(&key).is_err() {
            set_env_var(&key, &value);
        }
    }
}

/// Parse `KEY=value` lines. Blank lines and `#` comments are skipped, matching
/// quotes are stripped, and an unquoted inline `# comment` is dropped.
pub fn parse_dotenv(content: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some(eq_pos) = line.find('=') else {
            continue;
        };
        let key = line[..eq_pos].trim();
        let mut value = line[eq_pos + 1..].trim();
        if let Some(hash_pos) = value.find('#') {
            let before_hash = value[..hash_pos].trim_end();
            if !before_hash.contains('"') && !before_hash.contains('\'') {
                value = before_hash;
            }
        }
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value = &value[1..value.len() - 1];
        }
        if !key.is_empty() {
            pairs.push((key.to_string(), value.to_string()));
        }
    }
    pairs
}

/// Read the primary variable or the first set alias, falling back to `default`.
pub fn env_or<F>(primary: &str, aliases: &[&str], default: F) -> String
where
    F: FnOnce() -> String,
{
    env_optional(primary, aliases).unwrap_or_else(default)
}

/// Read the primary variable or an alias; empty values count as unset.
pub fn env_optional(primary: &str, aliases: &[&str]) -> Option<String> {
    env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()))
        .and_then(|s| {
            let s = s.trim().to_string();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        })
}

/// Boolean variable: `0/false/no/off` are false, anything else set is true.
pub fn env_bool(primary: &str, aliases: &[&str], default: bool) -> bool {
    match env_optional(primary, aliases) {
        Some(s) => !matches!(
            s.to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}

/// Comma separated list variable. Items are trimmed and empties dropped.
pub fn env_list(primary: &str, aliases: &[&str]) -> Option<Vec<String>> {
    let raw = env_optional(primary, aliases)?;
    let items: Vec<String> = split_list(&raw);
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// Only called from `load_dotenv`, before any threads are spawned.
fn set_env_var(key: &str, value: &str) {
    env::set_var(key, value);
}
