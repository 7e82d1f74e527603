use std::time::Duration;

use anyhow::{bail, Context, Result};

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Backend settings loaded from the environment. Site address and asset paths
/// come from `[package.metadata.leptos]` instead.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub backend_url: String,
    pub request_timeout: Duration,
    pub rust_log: String,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // .env is optional
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend_url = lookup("BACKEND_URL")
            .filter(|url| !url.trim().is_empty())
            .context("Required environment variable 'BACKEND_URL' is not set")?;
        let backend_url = backend_url.trim().trim_end_matches('/').to_string();

        let timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("REQUEST_TIMEOUT_SECS must be at least 1");
        }

        Ok(Self {
            backend_url,
            request_timeout: Duration::from_secs(timeout_secs),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[("BACKEND_URL", "http://localhost:8001/")]))
            .unwrap();
        assert_eq!(config.backend_url, "http://localhost:8001");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_backend_url() {
        let err = SiteConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("BACKEND_URL"));
        assert!(SiteConfig::from_lookup(lookup(&[("BACKEND_URL", "  ")])).is_err());
    }

    #[test]
    fn test_timeout_parsing() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("BACKEND_URL", "http://api"),
            ("REQUEST_TIMEOUT_SECS", "3"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.rust_log, "debug");

        for bad in ["0", "ten", "-1"] {
            assert!(SiteConfig::from_lookup(lookup(&[
                ("BACKEND_URL", "http://api"),
                ("REQUEST_TIMEOUT_SECS", bad),
            ]))
            .is_err());
        }
    }
}
