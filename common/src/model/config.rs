use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_LOOKUP_LIMIT: u32 = 100;

/// Runtime settings the host hands to the console at `/console/config.json`.
///
/// Missing fields fall back to their defaults so an older host keeps working
/// with a newer console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Prefix for REST calls. Empty means same origin.
    pub api_base: String,
    pub page_size: u32,
    pub search_debounce_ms: u32,
    /// Upper bound on options fetched for dropdown fields.
    pub lookup_limit: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_DEBOUNCE_MS,
            lookup_limit: DEFAULT_LOOKUP_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_documents_use_defaults() {
        let config: ConsoleConfig =
            serde_json::from_str(r#"{"api_base": "http://localhost:8000"}"#).unwrap();
        assert_eq!(config.api_base, "http://localhost:8000");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.lookup_limit, 100);
    }
}
