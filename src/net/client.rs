//! Authenticated HTTP gateway for all REST traffic.
//!
//! Every request reads the persisted session and, when a token is present,
//! attaches it as a bearer credential. Every 401 response clears the
//! persisted session and broadcasts on the unauthorized channel exactly once
//! before the error reaches the caller.
//!
//! The gateway knows nothing about UI state: it is constructed before any
//! component exists and couples to the session provider only through the
//! durable store and the broadcast channel.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use futures::channel::mpsc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::storage::SessionStore;

/// Base URL prefix for the REST API, matching the server's mount point.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Message shown for a 401 whose body carries no server message.
const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

/// Receiving end of the gateway's authorization-failure broadcast.
pub type UnauthorizedReceiver = mpsc::UnboundedReceiver<()>;

/// Errors surfaced by the request gateway.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server rejected the request with 401. The session has already
    /// been cleared and the unauthorized broadcast fired by the time the
    /// caller sees this.
    #[error("{message}")]
    Unauthorized { message: String },
    /// Any other non-success HTTP status.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// Transport-level failure; no response was received.
    #[error("network error: {0}")]
    Network(String),
    /// The response arrived but its body did not match the expected shape.
    #[error("unexpected response payload: {0}")]
    Decode(String),
    /// Request issued outside a browser context (SSR).
    #[error("not available outside the browser")]
    Unavailable,
}

/// HTTP client wrapper that authenticates outgoing requests and reacts to
/// authorization failures. Cheap to clone; clones share the store and the
/// broadcast channel.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    store: SessionStore,
    unauthorized_tx: mpsc::UnboundedSender<()>,
}

impl ApiClient {
    /// Build a client over `store`, returning it together with the receiver
    /// for its unauthorized broadcast. The session provider owns the
    /// receiver; the gateway itself never learns who is listening.
    pub fn new(base_url: impl Into<String>, store: SessionStore) -> (Self, UnauthorizedReceiver) {
        let (unauthorized_tx, unauthorized_rx) = mpsc::unbounded();
        let client = Self {
            base_url: base_url.into(),
            store,
            unauthorized_tx,
        };
        (client, unauthorized_rx)
    }

    /// Token from the persisted session, if any. A missing or malformed
    /// stored session means the request goes out unauthenticated.
    pub fn bearer_token(&self) -> Option<String> {
        self.store.read().map(|session| session.token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Side effects for a 401 response: drop the persisted session and fire
    /// the broadcast. Called once per failing response.
    fn handle_unauthorized(&self) {
        self.store.clear();
        let _ = self.unauthorized_tx.unbounded_send(());
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_with_query(path, &[]).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::Request::get(&self.url(path));
            if !query.is_empty() {
                builder = builder.query(query.iter().map(|(k, v)| (*k, v.as_str())));
            }
            let resp = self.send(builder).await?;
            Self::decode(self.check(resp).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, query);
            Err(ApiError::Unavailable)
        }
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .authorize(gloo_net::http::Request::post(&self.url(path)))
                .json(body)
                .map_err(|err| ApiError::Decode(err.to_string()))?;
            let resp = request
                .send()
                .await
                .map_err(|err| ApiError::Network(err.to_string()))?;
            Self::decode(self.check(resp).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .authorize(gloo_net::http::Request::put(&self.url(path)))
                .json(body)
                .map_err(|err| ApiError::Decode(err.to_string()))?;
            let resp = request
                .send()
                .await
                .map_err(|err| ApiError::Network(err.to_string()))?;
            Self::decode(self.check(resp).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// DELETE with no response body expected.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .send(gloo_net::http::Request::delete(&self.url(path)))
                .await?;
            self.check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.bearer_token() {
            Some(token) => builder.header("Authorization", &bearer_header_value(&token)),
            None => builder,
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send(
        &self,
        builder: gloo_net::http::RequestBuilder,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let request = self
            .authorize(builder)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }

    /// Map non-success statuses to errors, running the 401 side effects
    /// before the error propagates.
    #[cfg(feature = "hydrate")]
    async fn check(
        &self,
        resp: gloo_net::http::Response,
    ) -> Result<gloo_net::http::Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if status == 401 {
            self.handle_unauthorized();
        }
        Err(response_error(status, &body))
    }

    #[cfg(feature = "hydrate")]
    async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

/// `Authorization` header value for a bearer token.
fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Pull the server's `{"message": ...}` out of an error body, if present.
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(ToOwned::to_owned)
}

/// Map a failed response to an [`ApiError`], preferring the server-provided
/// message over a generic one.
fn response_error(status: u16, body: &str) -> ApiError {
    let message = extract_message(body);
    if status == 401 {
        ApiError::Unauthorized {
            message: message.unwrap_or_else(|| SESSION_EXPIRED_MESSAGE.to_owned()),
        }
    } else {
        ApiError::Api {
            status,
            message: message.unwrap_or_else(|| format!("request failed with status {status}")),
        }
    }
}
