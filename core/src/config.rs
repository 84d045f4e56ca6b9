//! Client configuration.

/// Environment variable holding the collection's base URL.
pub const BASE_URL_ENV: &str = "INVENTORY_API_URL";

/// Used when `INVENTORY_API_URL` is unset; matches the mock server's default port.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    pub base_url: String,
}

impl InventoryConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
