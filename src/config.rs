// SPDX-License-Identifier: MPL-2.0

use crate::service::Service;
use crate::source::systemd::ServiceScope;
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

/// Overrides [`Config::api_url`] when set.
pub const API_URL_ENV: &str = "PIKA_API_URL";

const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Where the service list comes from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    #[default]
    Http,
    Systemd(ServiceScope),
    Memory,
}

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    pub source: SourceKind,
    pub api_url: String,
    /// Served by [`SourceKind::Memory`].
    pub services: Vec<Service>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            api_url: DEFAULT_API_URL.to_string(),
            services: Vec::new(),
        }
    }
}

impl Config {
    /// Base URL of the REST backend, taking the environment override into account.
    pub fn api_url(&self) -> String {
        self.api_url_with(std::env::var(API_URL_ENV).ok())
    }

    fn api_url_with(&self, from_env: Option<String>) -> String {
        match from_env.filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                tracing::info!(%url, env = API_URL_ENV, "api url overridden from the environment");
                url
            }
            None => self.api_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.source, SourceKind::Http);
        assert_eq!(config.api_url, "http://localhost:3000");
        assert!(config.services.is_empty());
    }

    #[test]
    fn environment_overrides_api_url() {
        let config = Config::default();
        assert_eq!(
            config.api_url_with(Some("http://pika:8080".to_string())),
            "http://pika:8080"
        );
    }

    #[test]
    fn blank_environment_value_is_ignored() {
        let config = Config::default();
        assert_eq!(config.api_url_with(Some("  ".to_string())), DEFAULT_API_URL);
        assert_eq!(config.api_url_with(None), DEFAULT_API_URL);
    }
}
