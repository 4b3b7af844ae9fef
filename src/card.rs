//! Card types.

use alloc::string::{String, ToString};
use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits, in standard deck construction order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
        };
        f.write_str(name)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// A numbered card, worth its number.
    Number(u8),
    /// Jack, worth 10.
    Jack,
    /// Queen, worth 10.
    Queen,
    /// King, worth 10.
    King,
    /// Ace, worth 11.
    Ace,
}

impl Rank {
    /// The thirteen ranks of a standard suit, in ascending construction order.
    pub const STANDARD: [Self; 13] = [
        Self::Number(2),
        Self::Number(3),
        Self::Number(4),
        Self::Number(5),
        Self::Number(6),
        Self::Number(7),
        Self::Number(8),
        Self::Number(9),
        Self::Number(10),
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the point value used for scoring.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Number(n) => n,
            Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Jack => f.write_str("Jack"),
            Self::Queen => f.write_str("Queen"),
            Self::King => f.write_str("King"),
            Self::Ace => f.write_str("Ace"),
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates a numbered card.
    ///
    /// Note: This function does not validate the number. Values outside 2..=10
    /// are accepted and scored at face value.
    #[must_use]
    pub const fn number(suit: Suit, number: u8) -> Self {
        Self::new(suit, Rank::Number(number))
    }

    /// Returns the point value of the card.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Returns the display label of the card, e.g. `"Jack"` or `"7"`.
    #[must_use]
    pub fn name(&self) -> String {
        self.rank.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards per standard deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::STANDARD.len();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_cards_are_worth_ten_and_ace_eleven() {
        assert_eq!(Rank::Jack.value(), 10);
        assert_eq!(Rank::Queen.value(), 10);
        assert_eq!(Rank::King.value(), 10);
        assert_eq!(Rank::Ace.value(), 11);
        assert_eq!(Card::number(Suit::Clubs, 7).value(), 7);
    }

    #[test]
    fn numbered_card_name_matches_value() {
        for n in 2..=10 {
            let card = Card::number(Suit::Hearts, n);
            assert_eq!(card.name(), n.to_string());
        }
        assert_eq!(Card::new(Suit::Spades, Rank::Queen).name(), "Queen");
    }

    #[test]
    fn display_includes_suit() {
        let card = Card::new(Suit::Diamonds, Rank::Ace);
        assert_eq!(card.to_string(), "Ace of Diamonds");
    }

    #[test]
    fn deck_size_is_fifty_two() {
        assert_eq!(DECK_SIZE, 52);
    }
}
