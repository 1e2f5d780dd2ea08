//! Server configuration

use std::path::PathBuf;

pub const DEFAULT_ASSETS_DIR: &str = "assets";

pub const DEFAULT_LOG_FILTER: &str = "auric_site=info,auric_core=info,tower_http=info";

/// Settings read from the environment (after `.env` is loaded).
///
/// Address, site root and pkg dir come from the Leptos options instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub assets_dir: PathBuf,
    /// Used when `RUST_LOG` is unset or invalid.
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            assets_dir: non_empty("AURIC_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            log_filter: non_empty("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[]));
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[("AURIC_ASSETS_DIR", "/srv/auric"), ("RUST_LOG", "debug")]));
        assert_eq!(config.assets_dir, PathBuf::from("/srv/auric"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = SiteConfig::from_lookup(lookup(&[("AURIC_ASSETS_DIR", "  ")]));
        assert_eq!(config.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
    }
}
