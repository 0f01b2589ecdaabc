//! API Client Abstraction Layer
//!
//! Views never talk to the network directly. They go through the
//! `ResourceClient` trait, which the browser implements with `HttpClient`
//! and tests implement with canned responses.

mod http;

pub use http::HttpClient;

use async_trait::async_trait;
use octofit_shared::{decode_collection, DecodeError, Resource, ResourceKind};

/// Error types for collection fetches
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Trait for collection transports
#[async_trait(?Send)]
pub trait ResourceClient {
    /// Issue one GET for a collection and return the raw response body
    async fn fetch_body(&self, kind: ResourceKind) -> Result<String, ClientError>;
}

/// Fetch and decode the collection of `R`
pub async fn fetch_collection<R, C>(client: &C) -> Result<Vec<R>, ClientError>
where
    R: Resource,
    C: ResourceClient + ?Sized,
{
    let body = client.fetch_body(R::KIND).await?;
    Ok(decode_collection::<R>(&body)?)
}
