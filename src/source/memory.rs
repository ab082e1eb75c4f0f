// SPDX-License-Identifier: MPL-2.0

use super::ServiceSource;
use crate::error::Result;
use crate::service::Service;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;

/// Serves a fixed list, in the order it was given.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    services: Vec<Service>,
}

impl MemorySource {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }
}

impl ServiceSource for MemorySource {
    fn get_services(&self) -> BoxFuture<'static, Result<Vec<Service>>> {
        futures_util::future::ready(Ok(self.services.clone())).boxed()
    }
}
