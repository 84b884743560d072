//! Card and suit types.

use core::fmt;

/// Card suit.
///
/// The enumeration order (Spades, Hearts, Diamonds, Clubs) is the order
/// foundation piles appear in the save format, so it must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades (black).
    Spades,
    /// Hearts (red).
    Hearts,
    /// Diamonds (red).
    Diamonds,
    /// Clubs (black).
    Clubs,
}

impl Suit {
    /// All four suits, in enumeration order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns whether this suit is red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }

    /// Returns the save-format token for this suit.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }

    /// Parses a save-format suit token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|suit| suit.token() == token)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Returns the save-format token for a rank (`"A"`, `"2"`..`"10"`, `"J"`,
/// `"Q"`, `"K"`), or `None` for ranks outside 1..=13.
#[must_use]
pub const fn rank_token(rank: u8) -> Option<&'static str> {
    Some(match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => return None,
    })
}

/// Parses a save-format rank token.
#[must_use]
pub fn rank_from_token(token: &str) -> Option<u8> {
    (1..=13).find(|&rank| rank_token(rank) == Some(token))
}

/// A playing card.
///
/// Identity for move and lookup purposes is `(rank, suit)`; the face flag
/// is presentation state that travels with the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// Whether the card is lying face-up.
    pub face_up: bool,
}

impl Card {
    /// Creates a new face-down card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but will never be produced by [`Deck`](crate::Deck) and
    /// are rejected by the save format.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Sets the face state. No other effect.
    pub const fn flip(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// Returns whether this card's suit is red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        self.suit.is_red()
    }

    /// Returns whether this card continues a descending sequence on `other`,
    /// i.e. its rank is exactly one below `other`'s. When `opposite_color`
    /// is set the two cards must also differ in color.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::{Card, Suit};
    ///
    /// let six = Card::new(Suit::Hearts, 6);
    /// let seven = Card::new(Suit::Spades, 7);
    /// assert!(six.matches_descending(seven, true));
    /// assert!(!seven.matches_descending(six, true));
    /// ```
    #[must_use]
    pub const fn matches_descending(self, other: Self, opposite_color: bool) -> bool {
        if opposite_color && self.is_red() == other.is_red() {
            return false;
        }
        self.rank + 1 == other.rank
    }
}

impl fmt::Display for Card {
    /// Formats the card as e.g. `"K of Diamonds"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match rank_token(self.rank) {
            Some(token) => write!(f, "{} of {}", token, self.suit),
            None => write!(f, "{} of {}", self.rank, self.suit),
        }
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;
