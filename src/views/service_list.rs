// SPDX-License-Identifier: MPL-2.0

use super::node::{HeadingLevel, ListItem, ViewNode};
use super::service_item::view_service_item;
use crate::error::Result;
use crate::fl;
use crate::service::Service;
use crate::source::ServiceSource;
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Progress of the most recent fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Loads the service collection from its source and lays it out as a list.
///
/// The collection stays absent until a fetch succeeds. Each successful fetch
/// replaces it wholesale; a failed one leaves it as it was.
#[derive(Debug)]
pub struct ServiceListView {
    source: Arc<dyn ServiceSource>,
    services: Option<Vec<Service>>,
    status: LoadStatus,
    /// Generation of the most recently started fetch.
    generation: u64,
}

/// A started fetch, tagged with the generation [`ServiceListView::resolve`] expects.
pub struct Fetch {
    pub generation: u64,
    pub future: BoxFuture<'static, Result<Vec<Service>>>,
}

impl ServiceListView {
    pub fn new(source: Arc<dyn ServiceSource>) -> Self {
        Self {
            source,
            services: None,
            status: LoadStatus::Idle,
            generation: 0,
        }
    }

    /// Starts a fetch. Feed its output back through [`Self::resolve`] along
    /// with the fetch's generation.
    pub fn activate(&mut self) -> Fetch {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        Fetch {
            generation: self.generation,
            future: self.source.get_services(),
        }
    }

    /// Applies a fetch outcome. Outcomes of fetches superseded by a later
    /// [`Self::activate`] are dropped.
    pub fn resolve(&mut self, generation: u64, result: Result<Vec<Service>>) {
        if generation != self.generation {
            tracing::debug!(generation, latest = self.generation, "dropping stale fetch");
            return;
        }

        match result {
            Ok(services) => {
                tracing::info!(count = services.len(), "services loaded");
                self.services = Some(services);
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not load services");
                self.status = LoadStatus::Failed(err.to_string());
            }
        }
    }

    /// Swaps the source. The current collection stays until the next fetch resolves.
    pub fn set_source(&mut self, source: Arc<dyn ServiceSource>) {
        self.source = source;
    }

    pub fn services(&self) -> Option<&[Service]> {
        self.services.as_deref()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn view(&self) -> ViewNode {
        let mut children = vec![ViewNode::Heading {
            level: HeadingLevel::Page,
            text: fl!("app-title"),
        }];

        match &self.status {
            LoadStatus::Loading => children.push(ViewNode::Text(fl!("loading-services"))),
            LoadStatus::Failed(reason) => {
                children.push(ViewNode::Text(fl!("load-failed", reason = reason.clone())))
            }
            LoadStatus::Idle | LoadStatus::Loaded => {}
        }

        if let Some(services) = &self.services {
            children.push(ViewNode::List(
                services
                    .iter()
                    .map(|service| ListItem::new(view_service_item(Some(service))))
                    .collect(),
            ));
        }

        ViewNode::Column(children)
    }
}
