//! Hero and villain hand slots.
//!
//! `HandPair` owns both two-card hands and is the single place the
//! dedup/capacity invariants are enforced: a card never appears twice across
//! the union of both hands, and neither hand holds more than two cards.
//! Violating operations are silent no-ops, never errors — the selection
//! surface is expected to have disabled them already.

use std::fmt;

use crate::cards::Card;

/// Maximum cards per hand (hold'em hole cards).
pub const HAND_CAPACITY: usize = 2;

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// Which of the two competing hands an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandRole {
    Hero,
    Villain,
}

impl fmt::Display for HandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandRole::Hero => write!(f, "hero"),
            HandRole::Villain => write!(f, "villain"),
        }
    }
}

// ---------------------------------------------------------------------------
// Hand
// ---------------------------------------------------------------------------

/// An ordered sequence of 0–2 hole cards. Order reflects insertion only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Both hole cards chosen.
    pub fn is_complete(&self) -> bool {
        self.cards.len() == HAND_CAPACITY
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Concatenated wire tokens, e.g. `AsKd`.
    pub fn token(&self) -> String {
        self.cards.iter().map(Card::token).collect()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return write!(f, "(empty)");
        }
        let parts: Vec<String> = self.cards.iter().map(Card::to_string).collect();
        write!(f, "{}", parts.join(" "))
    }
}

// ---------------------------------------------------------------------------
// HandPair
// ---------------------------------------------------------------------------

/// Both hands, with all mutation funnelled through the invariant checks.
///
/// Mutators return whether the pair actually changed so the session layer
/// can invalidate a stale equity result exactly when needed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HandPair {
    hero: Hand,
    villain: Hand,
}

impl HandPair {
    pub fn hand(&self, role: HandRole) -> &Hand {
        match role {
            HandRole::Hero => &self.hero,
            HandRole::Villain => &self.villain,
        }
    }

    fn hand_mut(&mut self, role: HandRole) -> &mut Hand {
        match role {
            HandRole::Hero => &mut self.hero,
            HandRole::Villain => &mut self.villain,
        }
    }

    pub fn hero(&self) -> &Hand {
        &self.hero
    }

    pub fn villain(&self) -> &Hand {
        &self.villain
    }

    /// Card present in either hand.
    pub fn contains(&self, card: Card) -> bool {
        self.hero.contains(card) || self.villain.contains(card)
    }

    /// Both hands complete — the submit precondition.
    pub fn is_complete(&self) -> bool {
        self.hero.is_complete() && self.villain.is_complete()
    }

    /// True iff `card` is absent from both hands and the target has room.
    pub fn can_add(&self, role: HandRole, card: Card) -> bool {
        !self.contains(card) && self.hand(role).len() < HAND_CAPACITY
    }

    /// Add `card` to `role`'s hand. No-op (returns false) when `can_add`
    /// does not hold.
    pub fn add(&mut self, role: HandRole, card: Card) -> bool {
        if !self.can_add(role, card) {
            return false;
        }
        self.hand_mut(role).cards.push(card);
        true
    }

    /// Remove `card` from `role`'s hand. Idempotent: absent cards are a
    /// no-op (returns false).
    pub fn remove(&mut self, role: HandRole, card: Card) -> bool {
        let hand = self.hand_mut(role);
        match hand.cards.iter().position(|&c| c == card) {
            Some(idx) => {
                hand.cards.remove(idx);
                true
            }
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
