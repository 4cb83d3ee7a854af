//! Host settings read from the environment.
//!
//! Every variable is optional. Missing ones fall back to their default with an
//! `info` line; unparsable ones fall back with a `warn` line, so a typo never
//! keeps the console from starting.

use std::{env, fmt::Display, str::FromStr};

use common::model::config::{
    ConsoleConfig, DEFAULT_LOOKUP_LIMIT, DEFAULT_PAGE_SIZE, DEFAULT_DEBOUNCE_MS,
};
use log::{info, warn};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    /// Launch the default browser on the console URL once bound.
    pub open_browser: bool,
    /// Served verbatim at `/console/config.json`.
    pub console: ConsoleConfig,
}

impl HostConfig {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the settings from any key lookup; `load` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let page_size: u32 = try_load(&lookup, "CONSOLE_PAGE_SIZE", DEFAULT_PAGE_SIZE);
        let page_size = if page_size == 0 {
            warn!("CONSOLE_PAGE_SIZE must be at least 1, using default: {DEFAULT_PAGE_SIZE}");
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };

        Self {
            host: try_load(&lookup, "CONSOLE_HOST", DEFAULT_HOST.to_string()),
            port: try_load(&lookup, "CONSOLE_PORT", DEFAULT_PORT),
            open_browser: load_flag(&lookup, "CONSOLE_OPEN_BROWSER", true),
            console: ConsoleConfig {
                api_base: try_load(&lookup, "CONSOLE_API_BASE", String::new())
                    .trim_end_matches('/')
                    .to_string(),
                page_size,
                search_debounce_ms: try_load(
                    &lookup,
                    "CONSOLE_DEBOUNCE_MS",
                    DEFAULT_DEBOUNCE_MS,
                ),
                lookup_limit: DEFAULT_LOOKUP_LIMIT,
            },
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
            default
        }),
    }
}

fn load_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    match lookup(key).map(|raw| raw.trim().to_ascii_lowercase()) {
        None => default,
        Some(raw) => match raw.as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => {
                warn!("Invalid {key} value '{raw}', using default: {default}");
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> HostConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config(&[]);
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 8080);
        assert!(cfg.open_browser);
        assert_eq!(cfg.console, ConsoleConfig::default());
        assert_eq!(cfg.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            ("CONSOLE_HOST", "0.0.0.0"),
            ("CONSOLE_PORT", "9000"),
            ("CONSOLE_API_BASE", "http://api.local:8000/"),
            ("CONSOLE_PAGE_SIZE", "25"),
            ("CONSOLE_DEBOUNCE_MS", "150"),
            ("CONSOLE_OPEN_BROWSER", "no"),
        ]);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 9000);
        assert!(!cfg.open_browser);
        assert_eq!(cfg.console.api_base, "http://api.local:8000");
        assert_eq!(cfg.console.page_size, 25);
        assert_eq!(cfg.console.search_debounce_ms, 150);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let cfg = config(&[
            ("CONSOLE_PORT", "eighty"),
            ("CONSOLE_PAGE_SIZE", "0"),
            ("CONSOLE_DEBOUNCE_MS", "-5"),
            ("CONSOLE_OPEN_BROWSER", "maybe"),
        ]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.console.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(cfg.console.search_debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert!(cfg.open_browser);
    }
}
