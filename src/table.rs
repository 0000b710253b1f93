//! The table: one deck, one player and the dealer.

use log::debug;

use crate::deck::Deck;
use crate::error::{DealError, TableError};
use crate::options::TableOptions;
use crate::participant::{Dealer, Participant, Player};
use crate::report::Report;

/// Cards dealt in the opening round: two each to the player and the dealer.
const OPENING_CARDS: usize = 4;

/// A single-player blackjack table.
///
/// The table owns the deck and both participants. It deals the opening hands
/// and reports them; the rest of the round is driven by the caller.
#[derive(Debug, Clone)]
pub struct Table {
    /// Table options.
    options: TableOptions,
    /// Cards not yet dealt.
    deck: Deck,
    /// The seated player.
    player: Player,
    /// The dealer.
    dealer: Dealer,
}

impl Table {
    /// Creates a new table whose deck is shuffled with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{DECK_SIZE, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_deck(options, Deck::new(seed))
    }

    /// Creates a new table whose deck is seeded from the operating system.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_os_rng(options: TableOptions) -> Self {
        Self::with_deck(options, Deck::from_os_rng())
    }

    /// Creates a new table dealing from an existing deck.
    #[must_use]
    pub fn with_deck(options: TableOptions, deck: Deck) -> Self {
        let player = Player::new(options.player_name.clone());

        Self {
            options,
            deck,
            player,
            dealer: Dealer::new(),
        }
    }

    /// Deals the opening hands: player, dealer, player, dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if either hand already holds cards or the deck has
    /// fewer than four cards left. Nothing is dealt on error.
    pub fn deal_opening(&mut self) -> Result<(), DealError> {
        if !self.player.hand().is_empty() || !self.dealer.hand().is_empty() {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < OPENING_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            let card = self.deck.deal_card().ok_or(DealError::NotEnoughCards)?;
            self.player.add_card_to_hand(card);
            let card = self.deck.deal_card().ok_or(DealError::NotEnoughCards)?;
            self.dealer.add_card_to_hand(card);
        }

        debug!("opening dealt, {} cards remaining", self.deck.len());

        Ok(())
    }

    /// Reports the opening: the player's hand and value, then the dealer's
    /// partial reveal.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Reveal`] if the dealer does not hold exactly two
    /// cards, or [`TableError::Report`] if the report fails.
    pub fn report_opening<R: Report>(&self, report: &mut R) -> Result<(), TableError<R::Error>> {
        let reveal = self.dealer.reveal_partial()?;

        report
            .hand(self.player.name(), self.player.hand())
            .map_err(TableError::Report)?;
        report
            .hand_value(self.player.name(), self.player.hand_value())
            .map_err(TableError::Report)?;
        report.partial_reveal(&reveal).map_err(TableError::Report)?;

        Ok(())
    }

    /// Clears both hands for a new round.
    ///
    /// Dealt cards stay out of the deck. If fewer cards than
    /// [`TableOptions::reshuffle_below`] remain, the deck is restocked with a
    /// fresh shuffled set.
    ///
    /// Returns `true` if the deck was restocked.
    pub fn new_round(&mut self) -> bool {
        self.player.reset_hand();
        self.dealer.reset_hand();

        let restock = self.deck.len() < self.options.reshuffle_below;
        if restock {
            self.deck.restock();
        }

        debug!(
            "new round, {} cards remaining, restocked: {restock}",
            self.deck.len()
        );

        restock
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the seated player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
