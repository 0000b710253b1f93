//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest value a hand can reach without busting.
const BLACKJACK: u16 = 21;

/// Extra value an Ace gains when counted as 11.
const SOFT_BONUS: u16 = 10;

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut has_ace = false;

    for card in cards {
        value = value.saturating_add(u16::from(card.value()));
        has_ace |= card.is_ace();
    }

    // At most one Ace can count as 11 without busting.
    if has_ace && value <= BLACKJACK - SOFT_BONUS {
        (value + SOFT_BONUS, true)
    } else {
        (value, false)
    }
}

/// Cards held by a single participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were dealt.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    ///
    /// No limit is enforced; bust detection belongs to the caller.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Every card contributes its base value. If the hand holds an Ace and
    /// adding 10 does not exceed 21, one Ace is counted as 11. The total
    /// saturates at `u16::MAX`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Spades, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Clubs, Rank::Ten));
    /// assert_eq!(hand.value(), 12);
    /// ```
    #[must_use]
    pub fn value(&self) -> u16 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an Ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    /// Writes one card per line, each followed by a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}
