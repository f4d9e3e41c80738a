use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory holding the local rating blob.
    pub data_dir: PathBuf,
    /// Items requested per catalog page. Always greater than zero.
    pub page_size: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub punk_base_url: String,
    /// Requests allowed against the Punk catalog per rolling window.
    pub punk_max_requests: u32,
    pub punk_window_secs: u64,
    /// `None` when `BARLIE_WINEYVIBE_BASE_URL` is unset.
    pub wineyvibe: Option<WineyVibeSettings>,
}

/// Connection settings for the WineyVibe catalog.
#[derive(Clone)]
pub struct WineyVibeSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub beers_path: String,
    /// Path template; `{id}` is replaced by the beer id.
    pub details_path: String,
    pub search_path: String,
    pub max_requests: u32,
    pub window_secs: u64,
}

impl std::fmt::Debug for WineyVibeSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WineyVibeSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("beers_path", &self.beers_path)
            .field("details_path", &self.details_path)
            .field("search_path", &self.search_path)
            .field("max_requests", &self.max_requests)
            .field("window_secs", &self.window_secs)
            .finish()
    }
}
