//! Players and the dealer.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use crate::card::Card;
use crate::error::RevealError;
use crate::hand::Hand;

/// Name used by every [`Dealer`].
pub const DEALER_NAME: &str = "Dealer";

/// Placeholder shown in place of the dealer's hole card.
pub const FACE_DOWN_LABEL: &str = "Face-down card";

/// Behaviour shared by everyone seated at the table.
///
/// Implementors provide access to their hand; dealing, scoring and resetting
/// are built on top of that.
pub trait Participant {
    /// Returns the participant's name.
    fn name(&self) -> &str;

    /// Returns the participant's current hand.
    fn hand(&self) -> &Hand;

    /// Returns the participant's current hand for mutation.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Adds a card to the participant's hand.
    fn add_card_to_hand(&mut self, card: Card) {
        self.hand_mut().add_card(card);
    }

    /// Returns the value of the participant's hand.
    fn hand_value(&self) -> u16 {
        self.hand().value()
    }

    /// Discards the current hand and starts a new empty one.
    fn reset_hand(&mut self) {
        *self.hand_mut() = Hand::new();
    }
}

/// A player seated at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'s Hand:\n{}", self.name, self.hand)
    }
}

/// The dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Returns the view of the opening hand the table may see: the first
    /// card face down and the second card face up.
    ///
    /// # Errors
    ///
    /// Returns [`RevealError::CardCount`] unless the dealer holds exactly two
    /// cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Card, Dealer, Participant, Rank, Suit};
    ///
    /// let mut dealer = Dealer::new();
    /// dealer.add_card_to_hand(Card::new(Suit::Clubs, Rank::King));
    /// dealer.add_card_to_hand(Card::new(Suit::Hearts, Rank::Six));
    ///
    /// let reveal = dealer.reveal_partial().unwrap();
    /// assert_eq!(reveal.up_card(), Card::new(Suit::Hearts, Rank::Six));
    /// ```
    pub fn reveal_partial(&self) -> Result<PartialReveal, RevealError> {
        match self.hand.cards() {
            [_, up_card] => Ok(PartialReveal { up_card: *up_card }),
            cards => Err(RevealError::CardCount(cards.len())),
        }
    }
}

impl Participant for Dealer {
    fn name(&self) -> &str {
        DEALER_NAME
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

impl fmt::Display for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DEALER_NAME}'s Hand:\n{}", self.hand)
    }
}

/// The dealer's opening hand with the hole card hidden.
///
/// Only the face-up card is carried; the hole card and the total never leave
/// the [`Dealer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialReveal {
    up_card: Card,
}

impl PartialReveal {
    /// Returns the face-up card.
    #[must_use]
    pub const fn up_card(&self) -> Card {
        self.up_card
    }
}

impl fmt::Display for PartialReveal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{DEALER_NAME}'s Hand:")?;
        writeln!(f, "{FACE_DOWN_LABEL}")?;
        writeln!(f, "{}", self.up_card)
    }
}
