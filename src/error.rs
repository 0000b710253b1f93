//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur during the opening deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Hands still hold cards from a previous deal.
    #[error("hands must be empty before dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when revealing the dealer's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RevealError {
    /// A partial reveal needs exactly two cards.
    #[error("partial reveal needs exactly two cards, dealer holds {0}")]
    CardCount(usize),
}

/// Errors that can occur while reporting the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError<E> {
    /// The dealer's hand could not be partially revealed.
    #[error(transparent)]
    Reveal(#[from] RevealError),
    /// The report sink failed.
    #[error("report failed: {0}")]
    Report(E),
}
