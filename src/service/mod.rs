//! Equity computation service boundary.
//!
//! Defines the `EquityService` trait — the seam that lets the orchestrator
//! and tests run against a scripted service instead of a live network — and
//! the HTTP implementation speaking the service's JSON protocol.

pub mod http;

use async_trait::async_trait;

use crate::cards::Board;
use crate::error::EquityError;

/// Win probabilities for the two competing hands, each in [0, 1].
///
/// The service decides how ties are attributed; the pair is not required to
/// sum to exactly 1 and is not validated here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquityPair {
    pub hero: f64,
    pub villain: f64,
}

/// Abstraction over the remote equity computation service.
///
/// Hands are passed as 4-character wire tokens (two concatenated card
/// tokens, e.g. `AsKd`). The core never evaluates hands itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EquityService: Send + Sync {
    /// Heads-up equity with an empty board.
    async fn preflop_equity(
        &self,
        hero: &str,
        villain: &str,
    ) -> Result<EquityPair, EquityError>;

    /// Heads-up equity on a partial or complete board (flop/turn/river).
    async fn street_equity(
        &self,
        hero: &str,
        villain: &str,
        board: &Board,
    ) -> Result<EquityPair, EquityError>;

    /// Liveness probe against the service.
    async fn health(&self) -> Result<(), EquityError>;
}
