//! End-to-end session flows against a scripted equity service.
//!
//! The scripted service replays queued outcomes and records every call it
//! receives — all in-memory with no external dependencies — so the full
//! select → commit → submit → resolve path can be exercised deterministically.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use headsup::cards::{Board, Card, Rank, Suit};
use headsup::error::EquityError;
use headsup::hands::HandRole;
use headsup::orchestrator;
use headsup::service::{EquityPair, EquityService};
use headsup::session::{GameState, RequestStatus};

// ---------------------------------------------------------------------------
// Scripted service
// ---------------------------------------------------------------------------

/// A deterministic `EquityService` that pops queued outcomes and records
/// the hand tokens of every request.
struct ScriptedService {
    outcomes: Mutex<VecDeque<Result<EquityPair, EquityError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedService {
    fn new(outcomes: Vec<Result<EquityPair, EquityError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EquityService for ScriptedService {
    async fn preflop_equity(
        &self,
        hero: &str,
        villain: &str,
    ) -> Result<EquityPair, EquityError> {
        self.calls
            .lock()
            .unwrap()
            .push((hero.to_string(), villain.to_string()));
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted preflop call: {hero} vs {villain}"))
    }

    async fn street_equity(
        &self,
        hero: &str,
        villain: &str,
        _board: &Board,
    ) -> Result<EquityPair, EquityError> {
        self.preflop_equity(hero, villain).await
    }

    async fn health(&self) -> Result<(), EquityError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn card(token: &str) -> Card {
    token.parse().unwrap()
}

/// Drive a card into a hand the way the UI does: draft suit + rank, commit.
fn select(state: &mut GameState, role: HandRole, rank: Rank, suit: Suit) -> bool {
    state.set_draft_rank(rank);
    state.set_draft_suit(suit);
    state.commit(role)
}

fn ok(hero: f64, villain: f64) -> Result<EquityPair, EquityError> {
    Ok(EquityPair { hero, villain })
}

// ---------------------------------------------------------------------------
// Flows
// ---------------------------------------------------------------------------

#[tokio::test]
async fn full_flow_select_commit_submit() {
    let service = ScriptedService::new(vec![ok(0.62, 0.38)]);
    let mut state = GameState::new();

    assert!(select(&mut state, HandRole::Hero, Rank::Ace, Suit::Spades));
    assert!(select(&mut state, HandRole::Hero, Rank::King, Suit::Diamonds));
    assert!(select(&mut state, HandRole::Villain, Rank::Queen, Suit::Clubs));
    assert!(select(&mut state, HandRole::Villain, Rank::Jack, Suit::Hearts));
    assert!(state.can_submit());

    orchestrator::submit(&mut state, &service).await;

    assert_eq!(
        *state.status(),
        RequestStatus::Succeeded { hero: 0.62, villain: 0.38 }
    );
    // The wire tokens are exactly the committed cards, in insertion order.
    assert_eq!(service.calls(), vec![("AsKd".to_string(), "QcJh".to_string())]);
}

#[tokio::test]
async fn duplicate_selection_is_blocked_and_no_call_issued() {
    let service = ScriptedService::new(vec![]);
    let mut state = GameState::new();

    select(&mut state, HandRole::Hero, Rank::Ace, Suit::Spades);
    // The same draft committed to the villain must be refused.
    assert!(!state.can_commit(HandRole::Villain));
    assert!(!state.commit(HandRole::Villain));
    assert!(state.hands().villain().is_empty());

    orchestrator::submit(&mut state, &service).await;
    assert!(service.calls().is_empty());
    assert_eq!(*state.status(), RequestStatus::Idle);
}

#[tokio::test]
async fn service_error_surfaces_verbatim_and_retry_recovers() {
    let service = ScriptedService::new(vec![
        Err(EquityError::Service("invalid hand".to_string())),
        ok(0.55, 0.45),
    ]);
    let mut state = GameState::new();
    state.add_card(HandRole::Hero, card("As"));
    state.add_card(HandRole::Hero, card("Kd"));
    state.add_card(HandRole::Villain, card("Qc"));
    state.add_card(HandRole::Villain, card("Jh"));

    orchestrator::submit(&mut state, &service).await;
    assert_eq!(
        *state.status(),
        RequestStatus::Failed("invalid hand".to_string())
    );

    // Hands still complete — the user just submits again.
    assert!(state.can_submit());
    orchestrator::submit(&mut state, &service).await;
    assert_eq!(
        *state.status(),
        RequestStatus::Succeeded { hero: 0.55, villain: 0.45 }
    );
    assert_eq!(service.calls().len(), 2);
}

#[tokio::test]
async fn editing_hands_after_success_clears_result() {
    let service = ScriptedService::new(vec![ok(0.62, 0.38)]);
    let mut state = GameState::new();
    state.add_card(HandRole::Hero, card("As"));
    state.add_card(HandRole::Hero, card("Kd"));
    state.add_card(HandRole::Villain, card("Qc"));
    state.add_card(HandRole::Villain, card("Jh"));

    orchestrator::submit(&mut state, &service).await;
    assert!(matches!(state.status(), RequestStatus::Succeeded { .. }));

    // Tapping a displayed card removes it and drops the now-stale result.
    assert!(state.remove_card(HandRole::Hero, card("As")));
    assert_eq!(*state.status(), RequestStatus::Idle);
    assert!(!state.can_submit());
}

#[tokio::test]
async fn response_for_edited_hands_is_discarded() {
    let mut state = GameState::new();
    state.add_card(HandRole::Hero, card("As"));
    state.add_card(HandRole::Hero, card("Kd"));
    state.add_card(HandRole::Villain, card("Qc"));
    state.add_card(HandRole::Villain, card("Jh"));

    // Drive begin/resolve by hand to interleave an edit mid-flight.
    let pending = orchestrator::begin(&mut state).unwrap();
    assert_eq!(*state.status(), RequestStatus::Loading);

    state.remove_card(HandRole::Villain, card("Jh"));
    state.add_card(HandRole::Villain, card("Th"));

    orchestrator::resolve(&mut state, &pending, ok(0.62, 0.38));
    assert_eq!(*state.status(), RequestStatus::Idle);
}

#[tokio::test]
async fn no_reentrant_submit_while_loading() {
    let mut state = GameState::new();
    state.add_card(HandRole::Hero, card("As"));
    state.add_card(HandRole::Hero, card("Kd"));
    state.add_card(HandRole::Villain, card("Qc"));
    state.add_card(HandRole::Villain, card("Jh"));

    let pending = orchestrator::begin(&mut state).unwrap();

    // A second submit while the first is in flight issues nothing.
    let service = ScriptedService::new(vec![]);
    orchestrator::submit(&mut state, &service).await;
    assert!(service.calls().is_empty());
    assert_eq!(*state.status(), RequestStatus::Loading);

    orchestrator::resolve(&mut state, &pending, ok(0.7, 0.3));
    assert_eq!(
        *state.status(),
        RequestStatus::Succeeded { hero: 0.7, villain: 0.3 }
    );
}

#[tokio::test]
async fn invariants_hold_across_a_long_session() {
    let service = ScriptedService::new(vec![ok(0.62, 0.38), ok(0.48, 0.52)]);
    let mut state = GameState::new();

    // First comparison
    select(&mut state, HandRole::Hero, Rank::Ace, Suit::Spades);
    select(&mut state, HandRole::Hero, Rank::Ace, Suit::Hearts);
    select(&mut state, HandRole::Villain, Rank::King, Suit::Clubs);
    select(&mut state, HandRole::Villain, Rank::King, Suit::Diamonds);
    orchestrator::submit(&mut state, &service).await;
    assert!(matches!(state.status(), RequestStatus::Succeeded { .. }));

    // Rework the villain hand into a different holding
    state.remove_card(HandRole::Villain, card("Kc"));
    state.remove_card(HandRole::Villain, card("Kd"));
    select(&mut state, HandRole::Villain, Rank::King, Suit::Spades);
    select(&mut state, HandRole::Villain, Rank::Queen, Suit::Spades);
    orchestrator::submit(&mut state, &service).await;

    assert_eq!(
        *state.status(),
        RequestStatus::Succeeded { hero: 0.48, villain: 0.52 }
    );
    assert_eq!(
        service.calls(),
        vec![
            ("AsAh".to_string(), "KcKd".to_string()),
            ("AsAh".to_string(), "KsQs".to_string()),
        ]
    );

    // Dedup and capacity invariants after the whole session
    for c in state.hands().hero().cards() {
        assert!(!state.hands().villain().contains(*c));
    }
    assert_eq!(state.hands().hero().len(), 2);
    assert_eq!(state.hands().villain().len(), 2);
}
