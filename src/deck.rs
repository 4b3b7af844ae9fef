//! Deck of cards used as a draw stack.

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// An ordered stack of cards. The top of the deck is the next card drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards, top of the deck last.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the 52-card standard deck, unshuffled.
    ///
    /// Cards are laid out suit by suit in [`Suit::ALL`] order, ranks ascending
    /// from 2 to Ace, with the first constructed card on top.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::STANDARD {
                cards.push(Card::new(suit, rank));
            }
        }

        Self::of(cards)
    }

    /// Creates a deck from an explicit ordering. The first card is on top.
    ///
    /// # Example
    ///
    /// ```
    /// use damage_probabilities::{Card, Deck, Suit};
    ///
    /// let mut deck = Deck::of([Card::number(Suit::Spades, 10), Card::number(Suit::Spades, 5)]);
    /// assert_eq!(deck.draw(), Ok(Card::number(Suit::Spades, 10)));
    /// ```
    #[must_use]
    pub fn of<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the remaining cards into a uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or(DrawError::EmptyDeck)
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the remaining cards, top of the deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
