// SPDX-License-Identifier: MPL-2.0

use crate::app::AppModel;
use crate::config::Config;
use crate::fl;
use crate::message::Message;
use crate::source;
use crate::views::service_list::{Fetch, ServiceListView};
use cosmic::prelude::*;

impl AppModel {
    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<cosmic::Action<Message>> {
        let window_title = fl!("app-title");

        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }

    /// Starts a fetch and routes its outcome back as [`Message::ServicesLoaded`].
    pub fn load_services(&mut self) -> Task<cosmic::Action<Message>> {
        perform(self.services.activate())
    }
}

fn perform(fetch: Fetch) -> Task<cosmic::Action<Message>> {
    let generation = fetch.generation;
    Task::perform(fetch.future, move |result| {
        cosmic::Action::from(Message::ServicesLoaded(generation, result))
    })
}

/// Applies a watched config update. When it differs from `current`, the
/// source is rebuilt and a fetch from it is started.
fn apply_config(
    current: &mut Config,
    services: &mut ServiceListView,
    config: Config,
) -> Option<Fetch> {
    if config == *current {
        return None;
    }

    tracing::info!(source = ?config.source, "configuration changed");
    *current = config;
    services.set_source(source::from_config(current));
    Some(services.activate())
}

impl AppModel {
    /// Handles messages emitted by the application and its widgets.
    pub fn update_message(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            Message::LoadServices => {
                return self.load_services();
            }

            Message::ServicesLoaded(generation, result) => {
                self.services.resolve(generation, result);
            }

            Message::ToggleContextPage(context_page) => {
                if self.context_page == context_page {
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    self.context_page = context_page;
                    self.core.window.show_context = true;
                }
            }

            Message::UpdateConfig(config) => {
                if let Some(fetch) = apply_config(&mut self.config, &mut self.services, config) {
                    return perform(fetch);
                }
            }

            Message::LaunchUrl(url) => match open::that_detached(&url) {
                Ok(()) => {}
                Err(err) => {
                    tracing::warn!(%url, error = %err, "failed to open url");
                }
            },
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceKind;
    use crate::service::Service;

    fn memory_config(services: Vec<Service>) -> Config {
        Config {
            source: SourceKind::Memory,
            services,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn changed_config_rebuilds_source_and_fetches() {
        let mut config = memory_config(vec![Service::new("1", "A")]);
        let mut services = ServiceListView::new(source::from_config(&config));
        let first = services.activate();
        let result = first.future.await;
        services.resolve(first.generation, result);

        let updated = memory_config(vec![Service::new("2", "B")]);
        let fetch = apply_config(&mut config, &mut services, updated.clone()).unwrap();

        assert_eq!(config, updated);
        // The old collection stays until the new fetch resolves.
        assert_eq!(services.services(), Some(&[Service::new("1", "A")][..]));

        let result = fetch.future.await;
        services.resolve(fetch.generation, result);

        assert_eq!(services.services(), Some(&[Service::new("2", "B")][..]));
    }

    #[test]
    fn unchanged_config_starts_nothing() {
        let mut config = memory_config(vec![Service::new("1", "A")]);
        let mut services = ServiceListView::new(source::from_config(&config));

        assert!(apply_config(&mut config, &mut services, config.clone()).is_none());
        assert!(services.services().is_none());
        assert_eq!(services.status(), &crate::views::service_list::LoadStatus::Idle);
    }

    #[tokio::test]
    async fn fetch_started_before_config_change_is_ignored() {
        let mut config = memory_config(vec![Service::new("old", "Old")]);
        let mut services = ServiceListView::new(source::from_config(&config));
        let stale = services.activate();

        let updated = memory_config(vec![Service::new("new", "New")]);
        let fetch = apply_config(&mut config, &mut services, updated).unwrap();
        let result = fetch.future.await;
        services.resolve(fetch.generation, result);
        let result = stale.future.await;
        services.resolve(stale.generation, result);

        assert_eq!(services.services(), Some(&[Service::new("new", "New")][..]));
    }
}
