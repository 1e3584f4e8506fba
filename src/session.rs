//! Per-session game state: draft selection, both hands, and request status.
//!
//! `GameState` is created once per session and mutated in place by the
//! operations below; there is no persistence. All state transitions are
//! serialized on one logical thread of control — only the equity fetch
//! itself suspends (see `orchestrator`).

use tracing::debug;

use crate::cards::{Card, Rank, Suit};
use crate::hands::{HandPair, HandRole};

// ---------------------------------------------------------------------------
// Request status
// ---------------------------------------------------------------------------

/// Lifecycle of the most recent equity request.
///
/// The equity result lives inside `Succeeded`, so "result defined only while
/// succeeded" holds by construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded { hero: f64, villain: f64 },
    Failed(String),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }
}

// ---------------------------------------------------------------------------
// Game state
// ---------------------------------------------------------------------------

/// All mutable session state, threaded explicitly through every operation.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    draft_suit: Option<Suit>,
    draft_rank: Option<Rank>,
    hands: HandPair,
    status: RequestStatus,
}

impl GameState {
    /// Fresh session: no drafts, empty hands, `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hands(&self) -> &HandPair {
        &self.hands
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn draft_suit(&self) -> Option<Suit> {
        self.draft_suit
    }

    pub fn draft_rank(&self) -> Option<Rank> {
        self.draft_rank
    }

    pub(crate) fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }

    // -- Draft selection -------------------------------------------------

    /// Replace the draft suit. Never validated in isolation and never
    /// auto-commits.
    pub fn set_draft_suit(&mut self, suit: Suit) {
        self.draft_suit = Some(suit);
    }

    /// Replace the draft rank.
    pub fn set_draft_rank(&mut self, rank: Rank) {
        self.draft_rank = Some(rank);
    }

    /// The candidate card, defined iff both draft fields are set.
    pub fn draft_card(&self) -> Option<Card> {
        match (self.draft_rank, self.draft_suit) {
            (Some(rank), Some(suit)) => Some(Card::new(rank, suit)),
            _ => None,
        }
    }

    /// Whether committing the draft to `role`'s hand would succeed.
    pub fn can_commit(&self, role: HandRole) -> bool {
        self.draft_card()
            .map(|card| self.hands.can_add(role, card))
            .unwrap_or(false)
    }

    /// Commit the draft card to `role`'s hand. No-op when `can_commit` is
    /// false. The draft is kept so the same selection can be committed to
    /// the other hand in quick succession.
    pub fn commit(&mut self, role: HandRole) -> bool {
        match self.draft_card() {
            Some(card) => self.add_card(role, card),
            None => false,
        }
    }

    // -- Hand mutation ---------------------------------------------------

    /// Add `card` to `role`'s hand, invalidating any settled result.
    pub fn add_card(&mut self, role: HandRole, card: Card) -> bool {
        let changed = self.hands.add(role, card);
        if changed {
            debug!(%role, card = %card.token(), "Card added");
            self.invalidate_result();
        }
        changed
    }

    /// Remove `card` from `role`'s hand. Always succeeds (no-op if absent),
    /// whatever the current request status.
    pub fn remove_card(&mut self, role: HandRole, card: Card) -> bool {
        let changed = self.hands.remove(role, card);
        if changed {
            debug!(%role, card = %card.token(), "Card removed");
            self.invalidate_result();
        }
        changed
    }

    // -- Submission gating -----------------------------------------------

    /// Both hands complete and no request in flight.
    pub fn can_submit(&self) -> bool {
        self.hands.is_complete() && !self.status.is_loading()
    }

    /// Drop any settled result after a hand mutation. A `Loading` request is
    /// left alone — it is not cancelled, and staleness is handled when the
    /// response arrives (see `orchestrator::resolve`).
    fn invalidate_result(&mut self) {
        if !self.status.is_loading() && self.status != RequestStatus::Idle {
            debug!("Hands changed, discarding settled equity result");
            self.status = RequestStatus::Idle;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
