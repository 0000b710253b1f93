//! A single 52-card deck with its own random source.

use alloc::collections::VecDeque;

use log::{debug, trace};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A deck of playing cards, dealt from the front.
///
/// Every deck owns an independent generator, so two decks never interleave
/// draws and a given seed always reproduces the same deal order.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards; the front is the top of the deck.
    cards: VecDeque<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, shuffled deck using the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(7);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert!(deck.cards().eq(Deck::new(7).cards()));
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a full, shuffled deck seeded from the operating system.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    /// Creates a full deck in construction order (suits, then ranks).
    ///
    /// The deck's generator is seeded with 0 for later shuffles.
    #[must_use]
    pub fn unshuffled() -> Self {
        Self {
            cards: Self::standard_cards(),
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        let mut deck = Self {
            cards: Self::standard_cards(),
            rng,
        };
        deck.shuffle();
        deck
    }

    /// Builds one of every suit and rank.
    fn standard_cards() -> VecDeque<Card> {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }

        cards
    }

    /// Shuffles the remaining cards.
    ///
    /// Cards already dealt are not returned to the deck.
    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
        debug!("shuffled deck with {} cards remaining", self.cards.len());
    }

    /// Replaces the contents with a fresh, shuffled 52-card set.
    ///
    /// The deck keeps drawing from its existing generator.
    pub fn restock(&mut self) {
        self.cards = Self::standard_cards();
        self.shuffle();
    }

    /// Deals the top card.
    ///
    /// Returns `None` once the deck is exhausted.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{DECK_SIZE, Deck};
    ///
    /// let mut deck = Deck::new(1);
    /// for _ in 0..DECK_SIZE {
    ///     assert!(deck.deal_card().is_some());
    /// }
    /// assert_eq!(deck.deal_card(), None);
    /// ```
    pub fn deal_card(&mut self) -> Option<Card> {
        let card = self.cards.pop_front();
        match card {
            Some(card) => trace!("dealt {card}, {} remaining", self.cards.len()),
            None => debug!("deal requested from an empty deck"),
        }
        card
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards in deal order.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> {
        self.cards.iter()
    }
}
