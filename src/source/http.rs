// SPDX-License-Identifier: MPL-2.0

use super::ServiceSource;
use crate::error::{Result, SourceError};
use crate::service::{self, Service};
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use reqwest::header::ACCEPT;
use serde::Deserialize;

/// Error body answered by the backend on failure.
#[derive(Debug, Deserialize)]
struct ApiError {
    text: String,
}

/// Fetches services from the REST backend at `GET {base}/service`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: services_endpoint(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ServiceSource for HttpSource {
    fn get_services(&self) -> BoxFuture<'static, Result<Vec<Service>>> {
        let client = self.client.clone();
        let url = self.endpoint.clone();

        async move {
            tracing::debug!(%url, "fetching services");

            let response = client
                .get(&url)
                .header(ACCEPT, "application/json")
                // The backend router only matches XHR-style requests.
                .header("X-Requested-With", "XMLHttpRequest")
                .send()
                .await
                .map_err(|e| SourceError::Request {
                    url: url.clone(),
                    reason: e.to_string(),
                })?;

            let status = response.status();
            let body = response.text().await.map_err(|e| SourceError::Request {
                url: url.clone(),
                reason: e.to_string(),
            })?;

            if !status.is_success() {
                return Err(SourceError::Status {
                    url,
                    status: status.as_u16(),
                    text: error_text(&body),
                });
            }

            let services = service::decode_services(&body)?;
            tracing::debug!(count = services.len(), "services fetched");
            Ok(services)
        }
        .boxed()
    }
}

fn services_endpoint(base_url: &str) -> String {
    format!("{}/service", base_url.trim_end_matches('/'))
}

fn error_text(body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(err) => err.text,
        Err(_) => body.trim().to_string(),
    }
}
