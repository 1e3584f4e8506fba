//! HTTP client for the equity computation service.
//!
//! Protocol:
//! - `POST {base}/equity/preflop` body `{"hands": [hero, villain], "board": ""}`
//! - `POST {base}/equity/street` body `{"hero": .., "villain": .., "board": ".."}`
//! - `GET  {base}/healthz`
//!
//! Success is HTTP 200 with `{"equities": [hero, villain]}`; any other status
//! carries `{"error": "<message>"}` (message may be absent). The client
//! imposes its own request timeout — the service does no such bounding.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{EquityPair, EquityService};
use crate::cards::Board;
use crate::config::ServiceConfig;
use crate::error::EquityError;

/// Fallback when a failure response carries no usable error message.
const UNKNOWN_ERROR: &str = "Unknown error";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct PreflopRequest<'a> {
    hands: [&'a str; 2],
    board: &'a str,
}

#[derive(Debug, Serialize)]
struct StreetRequest<'a> {
    hero: &'a str,
    villain: &'a str,
    board: String,
}

#[derive(Debug, Deserialize)]
struct EquityResponse {
    equities: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<String>,
}

/// Reduce the wire `equities` array to a pair; anything but exactly two
/// entries is a malformed response.
fn pair_from_response(resp: EquityResponse) -> Result<EquityPair, EquityError> {
    match resp.equities.as_slice() {
        [hero, villain] => Ok(EquityPair {
            hero: *hero,
            villain: *villain,
        }),
        other => Err(EquityError::Parse(format!(
            "expected 2 equities, got {}",
            other.len()
        ))),
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Reqwest-based `EquityService` implementation.
pub struct HttpEquityClient {
    http: Client,
    base_url: String,
}

impl HttpEquityClient {
    /// Build a client with the configured timeout. The timeout is the only
    /// bound on a request — there is no retry and no cancellation.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent("headsup/0.1.0 (equity-client)")
            .build()
            .context("Failed to build HTTP client for equity service")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST a JSON body and reduce the response per the protocol.
    async fn post_equity(
        &self,
        path: &str,
        body: &(impl serde::Serialize + Sync),
    ) -> Result<EquityPair, EquityError> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "Sending equity request");

        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| EquityError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let message = resp
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|e| e.error)
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            warn!(%status, message = %message, "Equity service returned an error");
            return Err(EquityError::Service(message));
        }

        let parsed: EquityResponse = resp
            .json()
            .await
            .map_err(|e| EquityError::Parse(e.to_string()))?;

        pair_from_response(parsed)
    }
}

#[async_trait]
impl EquityService for HttpEquityClient {
    async fn preflop_equity(
        &self,
        hero: &str,
        villain: &str,
    ) -> Result<EquityPair, EquityError> {
        let body = PreflopRequest {
            hands: [hero, villain],
            board: "",
        };
        self.post_equity("/equity/preflop", &body).await
    }

    async fn street_equity(
        &self,
        hero: &str,
        villain: &str,
        board: &Board,
    ) -> Result<EquityPair, EquityError> {
        let body = StreetRequest {
            hero,
            villain,
            board: board.token(),
        };
        self.post_equity("/equity/street", &body).await
    }

    async fn health(&self) -> Result<(), EquityError> {
        let url = format!("{}/healthz", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| EquityError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(EquityError::Service(format!(
                "health check failed with status {}",
                resp.status()
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
