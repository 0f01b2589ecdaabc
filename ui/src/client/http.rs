//! Browser HTTP Client
//!
//! Plain GET requests through `gloo-net` (the browser fetch API). No headers,
//! credentials or query parameters are sent.

use gloo_net::http::Request;
use octofit_shared::{ApiBase, ResourceKind};

use super::{ClientError, ResourceClient};

/// Client for the OctoFit REST API
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpClient {
    base: ApiBase,
}

impl HttpClient {
    pub fn new(base: ApiBase) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }
}

#[async_trait::async_trait(?Send)]
impl ResourceClient for HttpClient {
    async fn fetch_body(&self, kind: ResourceKind) -> Result<String, ClientError> {
        let url = self.base.endpoint(kind);
        tracing::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(ClientError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ClientError::ConnectionFailed(e.to_string()))
    }
}
