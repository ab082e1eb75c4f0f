// SPDX-License-Identifier: MPL-2.0

use crate::config::Config;
use crate::error::Result;
use crate::service::Service;
use crate::types::ContextPage;

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    LaunchUrl(String),
    ToggleContextPage(ContextPage),
    UpdateConfig(Config),
    LoadServices,
    /// Outcome of the fetch with the given generation.
    ServicesLoaded(u64, Result<Vec<Service>>),
}
