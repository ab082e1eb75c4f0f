// SPDX-License-Identifier: MPL-2.0

//! Collaborators that deliver the service list.

pub mod http;
pub mod memory;
pub mod systemd;

use crate::config::{Config, SourceKind};
use crate::error::Result;
use crate::service::Service;
use futures_util::future::BoxFuture;
use std::fmt::Debug;
use std::sync::Arc;

pub use http::HttpSource;
pub use memory::MemorySource;
pub use systemd::SystemdSource;

/// Something that can hand out the ordered list of services.
///
/// The returned future owns its data so the runtime can drive it after the
/// caller has moved on.
pub trait ServiceSource: Debug + Send + Sync {
    fn get_services(&self) -> BoxFuture<'static, Result<Vec<Service>>>;
}

/// Builds the source selected by `config`.
pub fn from_config(config: &Config) -> Arc<dyn ServiceSource> {
    match config.source {
        SourceKind::Http => Arc::new(HttpSource::new(&config.api_url())),
        SourceKind::Systemd(scope) => Arc::new(SystemdSource::new(scope)),
        SourceKind::Memory => Arc::new(MemorySource::new(config.services.clone())),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::SourceError;
    use futures_util::FutureExt;

    /// A source whose fetch never completes.
    #[derive(Debug)]
    pub struct PendingSource;

    impl ServiceSource for PendingSource {
        fn get_services(&self) -> BoxFuture<'static, Result<Vec<Service>>> {
            futures_util::future::pending().boxed()
        }
    }

    /// A source whose fetch always fails.
    #[derive(Debug)]
    pub struct FailingSource(pub SourceError);

    impl ServiceSource for FailingSource {
        fn get_services(&self) -> BoxFuture<'static, Result<Vec<Service>>> {
            futures_util::future::ready(Err(self.0.clone())).boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_config_serves_configured_services() {
        let config = Config {
            source: SourceKind::Memory,
            services: vec![Service::new("1", "A")],
            ..Config::default()
        };

        let services = from_config(&config).get_services().await.unwrap();

        assert_eq!(services, vec![Service::new("1", "A")]);
    }

    #[test]
    fn default_config_talks_http() {
        let source = from_config(&Config::default());
        assert!(format!("{source:?}").contains("HttpSource"));
    }
}
