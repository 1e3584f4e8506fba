//! Playing card value types.
//!
//! `Card` is an immutable `(suit, rank)` pair — 52 distinct values, purely
//! structural equality. The two-character protocol token (rank char + suit
//! char, e.g. `As` for the ace of spades) is the wire representation the
//! equity service understands.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Suit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

/// Display color of a card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardColor {
    Red,
    Black,
}

impl Suit {
    /// All suits in a fixed order (useful for iteration in pickers).
    pub const ALL: &'static [Suit] = &[Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Protocol character: `h`, `d`, `c`, `s`.
    pub fn token_char(&self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }

    /// Display symbol: `♥ ♦ ♣ ♠`.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    /// Hearts and diamonds render red, clubs and spades black.
    pub fn color(&self) -> CardColor {
        match self {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Clubs | Suit::Spades => CardColor::Black,
        }
    }

    fn from_token_char(c: char) -> Option<Suit> {
        match c {
            'h' => Some(Suit::Hearts),
            'd' => Some(Suit::Diamonds),
            'c' => Some(Suit::Clubs),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Rank
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, low to high.
    pub const ALL: &'static [Rank] = &[
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Display label: `2`–`9`, `T`, `J`, `Q`, `K`, `A`.
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Protocol character — identical to the display label.
    pub fn token_char(&self) -> char {
        self.label().chars().next().unwrap()
    }

    fn from_token_char(c: char) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|r| r.token_char() == c)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// One of the 52 playing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Two-character wire token, e.g. `As`, `Td`, `9c`.
    pub fn token(&self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.rank.token_char());
        s.push(self.suit.token_char());
        s
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Parse a two-character wire token (`As`, `9c`, ...) into a `Card`.
impl FromStr for Card {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => {
                let rank = Rank::from_token_char(r)
                    .ok_or_else(|| anyhow::anyhow!("Invalid rank character: {r:?}"))?;
                let suit = Suit::from_token_char(u)
                    .ok_or_else(|| anyhow::anyhow!("Invalid suit character: {u:?}"))?;
                Ok(Card::new(rank, suit))
            }
            _ => anyhow::bail!("Card token must be exactly 2 characters, got {s:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// Community cards: 0 (preflop), 3 (flop), 4 (turn), or 5 (river).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board(Vec<Card>);

/// Betting street implied by the number of community cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Board {
    /// The empty (preflop) board.
    pub fn empty() -> Self {
        Board(Vec::new())
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// Concatenated wire tokens, e.g. `QsJsTs`. Empty string preflop.
    pub fn token(&self) -> String {
        self.0.iter().map(Card::token).collect()
    }

    pub fn street(&self) -> Street {
        match self.0.len() {
            0 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }
}

/// Parse a board string of concatenated card tokens.
///
/// Accepts 0, 3, 4, or 5 cards; rejects odd-length input and duplicates.
impl FromStr for Board {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Board::empty());
        }
        if s.len() % 2 != 0 {
            anyhow::bail!("Board string must have even length, got {s:?}");
        }

        let mut cards = Vec::with_capacity(s.len() / 2);
        let chars: Vec<char> = s.chars().collect();
        for pair in chars.chunks(2) {
            let token: String = pair.iter().collect();
            let card: Card = token.parse()?;
            if cards.contains(&card) {
                anyhow::bail!("Duplicate card on board: {card}");
            }
            cards.push(card);
        }

        if !matches!(cards.len(), 3 | 4 | 5) {
            anyhow::bail!(
                "Board must have 0 (pre), 3 (flop), 4 (turn), or 5 (river) cards, got {}",
                cards.len()
            );
        }

        Ok(Board(cards))
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "preflop"),
            Street::Flop => write!(f, "flop"),
            Street::Turn => write!(f, "turn"),
            Street::River => write!(f, "river"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
