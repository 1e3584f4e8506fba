//! Equity request orchestration.
//!
//! Reduces the asynchronous service call into the `RequestStatus` state
//! machine on `GameState`. Submission is split into `begin` (gate + flip to
//! `Loading` + snapshot the hands) and `resolve` (apply the outcome), so the
//! `Loading` → `Succeeded`/`Failed` transition is testable without a live
//! network; `submit` ties the two together around the actual service call.
//!
//! At most one request is in flight: `begin` declines while `Loading`.
//! There is no cancellation and no retry — a failed request waits for the
//! user to submit again.

use tracing::{debug, info, warn};

use crate::error::EquityError;
use crate::hands::HandPair;
use crate::service::{EquityPair, EquityService};
use crate::session::{GameState, RequestStatus};

// ---------------------------------------------------------------------------
// Pending request
// ---------------------------------------------------------------------------

/// Snapshot of the hand tokens an in-flight request was built from.
///
/// Responses are applied only if the hands still match the snapshot; a
/// response for hands the user has since edited is discarded rather than
/// displayed against the wrong selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    hero: String,
    villain: String,
}

impl PendingRequest {
    pub fn hero_token(&self) -> &str {
        &self.hero
    }

    pub fn villain_token(&self) -> &str {
        &self.villain
    }

    fn matches(&self, hands: &HandPair) -> bool {
        hands.hero().token() == self.hero && hands.villain().token() == self.villain
    }
}

// ---------------------------------------------------------------------------
// State transitions
// ---------------------------------------------------------------------------

/// Gate and open a request: requires two complete hands and no request in
/// flight. On success the status flips to `Loading` and the hands' wire
/// tokens are snapshotted. Returns `None` (leaving state untouched) when the
/// precondition fails — callers are expected to have checked `can_submit`.
pub fn begin(state: &mut GameState) -> Option<PendingRequest> {
    if !state.can_submit() {
        debug!(
            hero_len = state.hands().hero().len(),
            villain_len = state.hands().villain().len(),
            loading = state.status().is_loading(),
            "Submit declined"
        );
        return None;
    }

    let pending = PendingRequest {
        hero: state.hands().hero().token(),
        villain: state.hands().villain().token(),
    };
    state.set_status(RequestStatus::Loading);
    info!(
        hero = %pending.hero,
        villain = %pending.villain,
        "Equity request opened"
    );
    Some(pending)
}

/// Apply a completed request's outcome to the state machine.
///
/// A response whose originating hands no longer match the current hands is
/// discarded and the status returns to `Idle`.
pub fn resolve(
    state: &mut GameState,
    pending: &PendingRequest,
    outcome: Result<EquityPair, EquityError>,
) {
    if !pending.matches(state.hands()) {
        info!(
            hero = %pending.hero,
            villain = %pending.villain,
            "Discarding equity response for edited hands"
        );
        state.set_status(RequestStatus::Idle);
        return;
    }

    match outcome {
        Ok(pair) => {
            info!(hero = pair.hero, villain = pair.villain, "Equity received");
            state.set_status(RequestStatus::Succeeded {
                hero: pair.hero,
                villain: pair.villain,
            });
        }
        Err(err) => {
            warn!(error = %err, "Equity request failed");
            state.set_status(RequestStatus::Failed(err.to_string()));
        }
    }
}

/// Full submit flow: gate, call the service, reduce the outcome. A silent
/// no-op when the submit precondition does not hold — no network call is
/// issued and the state is left unchanged.
pub async fn submit(state: &mut GameState, service: &dyn EquityService) {
    let Some(pending) = begin(state) else {
        return;
    };

    let outcome = service
        .preflop_equity(pending.hero_token(), pending.villain_token())
        .await;

    resolve(state, &pending, outcome);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
