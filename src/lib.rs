//! A deterministic blackjack rules core with optional `no_std` support.
//!
//! The crate models a standard 52-card [`Deck`], dealing into [`Hand`]s held
//! by a [`Player`] and a [`Dealer`], and hand scoring under the Ace
//! dual-value rule. Presentation is left to a [`Report`] implementation; the
//! [`Table`] type wires the pieces together for the opening deal.
//!
//! # Example
//!
//! ```
//! use bjcore::{Participant, Table, TableOptions, TextReport};
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! table.deal_opening().unwrap();
//! assert_eq!(table.player().hand().len(), 2);
//!
//! let mut report = TextReport::new(String::new());
//! table.report_opening(&mut report).unwrap();
//! assert!(report.into_inner().contains("Face-down card"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod participant;
pub mod report;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, RevealError, TableError};
pub use hand::Hand;
pub use options::TableOptions;
pub use participant::{DEALER_NAME, Dealer, FACE_DOWN_LABEL, PartialReveal, Participant, Player};
pub use report::{Report, TextReport};
pub use table::Table;
