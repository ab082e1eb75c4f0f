// SPDX-License-Identifier: MPL-2.0

use super::ServiceSource;
use crate::error::Result;
use crate::service::Service;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use zbus::Connection;
use zbus::zvariant::OwnedObjectPath;

/// Which bus the systemd manager is reached on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceScope {
    System,
    User,
}

type UnitRow = (
    String,
    String,
    String,
    String,
    String,
    String,
    OwnedObjectPath,
    u32,
    String,
    OwnedObjectPath,
);

pub struct SystemdManager {
    connection: Connection,
}

impl SystemdManager {
    pub async fn new(scope: ServiceScope) -> zbus::Result<Self> {
        let connection = match scope {
            ServiceScope::System => Connection::system().await?,
            ServiceScope::User => Connection::session().await?,
        };
        Ok(Self { connection })
    }

    /// Loaded `.service` units, in the order the manager reports them.
    pub async fn list_services(&self) -> zbus::Result<Vec<Service>> {
        let proxy = zbus::Proxy::new(
            &self.connection,
            "org.freedesktop.systemd1",
            "/org/freedesktop/systemd1",
            "org.freedesktop.systemd1.Manager",
        )
        .await?;

        let units: Vec<UnitRow> = proxy.call("ListUnits", &()).await?;

        Ok(units
            .into_iter()
            .filter_map(|(name, description, ..)| service_from_unit(name, description))
            .collect())
    }
}

/// Maps a unit onto a [`Service`]: the unit name is the id, the description
/// the display name. Non-service units are skipped.
fn service_from_unit(name: String, description: String) -> Option<Service> {
    if !name.ends_with(".service") {
        return None;
    }

    let display = if description.trim().is_empty() {
        name.clone()
    } else {
        description
    };

    Some(Service::new(name, display))
}

/// Lists systemd services over D-Bus.
#[derive(Debug, Clone, Copy)]
pub struct SystemdSource {
    scope: ServiceScope,
}

impl SystemdSource {
    pub fn new(scope: ServiceScope) -> Self {
        Self { scope }
    }
}

impl ServiceSource for SystemdSource {
    fn get_services(&self) -> BoxFuture<'static, Result<Vec<Service>>> {
        let scope = self.scope;

        async move {
            tracing::debug!(?scope, "listing systemd services");
            let manager = SystemdManager::new(scope).await?;
            Ok(manager.list_services().await?)
        }
        .boxed()
    }
}
