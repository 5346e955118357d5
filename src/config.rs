//! Environment-backed configuration, extracted once at startup.

use serde::Deserialize;

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_cache_size() -> usize {
    1000
}

fn default_cache_expire_minutes() -> u64 {
    60
}

fn default_word_size() -> u32 {
    10
}

fn default_window_size() -> u32 {
    30
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port the web server binds.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base level for the tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Base URL of the suggest backend.
    pub suggest_base_url: String,
    /// Maximum number of cached word lists.
    #[serde(default = "default_cache_size")]
    pub popular_word_cache_size: usize,
    /// Minutes a cached word list stays fresh, measured from write time.
    #[serde(default = "default_cache_expire_minutes")]
    pub popular_word_cache_expire_minutes: u64,
    /// Ranked terms requested per backend query.
    #[serde(default = "default_word_size")]
    pub popular_word_size: u32,
    /// Ranking window the backend scans per query.
    #[serde(default = "default_window_size")]
    pub popular_word_window_size: u32,
    /// Whether the popular-words web API is exposed.
    #[serde(default = "default_enabled")]
    pub popular_word_enabled: bool,
    /// Comma-separated default tags applied when a request has none.
    #[serde(default)]
    pub popular_word_tags: Option<String>,
    /// Comma-separated default fields applied when a request has none.
    #[serde(default)]
    pub popular_word_fields: Option<String>,
    /// Comma-separated default excludes applied when a request has none.
    #[serde(default)]
    pub popular_word_excludes: Option<String>,
    /// Comma-separated roles resolved for requests without explicit roles.
    #[serde(default)]
    pub default_roles: Option<String>,
}

impl Config {
    pub fn popular_word_tag_list(&self) -> Vec<String> {
        split_csv(self.popular_word_tags.as_deref())
    }

    pub fn popular_word_field_list(&self) -> Vec<String> {
        split_csv(self.popular_word_fields.as_deref())
    }

    pub fn popular_word_exclude_list(&self) -> Vec<String> {
        split_csv(self.popular_word_excludes.as_deref())
    }

    pub fn default_role_list(&self) -> Vec<String> {
        split_csv(self.default_roles.as_deref())
    }
}

/// Split a comma-separated config value into trimmed, non-empty entries.
fn split_csv(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .collect()
}
