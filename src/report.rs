//! Reporting the table to an outside presentation layer.

use core::fmt::{self, Write};

use crate::hand::Hand;
use crate::participant::PartialReveal;

/// Receives what the table shows to the player.
///
/// The table calls into a report instead of printing, so scoring and dealing
/// stay independent of any console or UI.
pub trait Report {
    /// Error produced by the underlying sink.
    type Error;

    /// Reports the cards of a named participant's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    fn hand(&mut self, name: &str, hand: &Hand) -> Result<(), Self::Error>;

    /// Reports the value of a named participant's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    fn hand_value(&mut self, name: &str, value: u16) -> Result<(), Self::Error>;

    /// Reports the dealer's partially revealed hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    fn partial_reveal(&mut self, reveal: &PartialReveal) -> Result<(), Self::Error>;
}

/// A [`Report`] that renders plain text into any [`fmt::Write`] sink.
///
/// ```
/// use bjcore::{Card, Hand, Rank, Report, Suit, TextReport};
///
/// let mut hand = Hand::new();
/// hand.add_card(Card::new(Suit::Diamonds, Rank::Queen));
///
/// let mut report = TextReport::new(String::new());
/// report.hand("Player", &hand).unwrap();
/// report.hand_value("Player", hand.value()).unwrap();
/// assert_eq!(
///     report.into_inner(),
///     "Player's Hand:\nQueen of Diamonds\n\nPlayer's hand value: 10\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextReport<W> {
    out: W,
}

impl<W: Write> TextReport<W> {
    /// Creates a report writing into `out`.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Report for TextReport<W> {
    type Error = fmt::Error;

    fn hand(&mut self, name: &str, hand: &Hand) -> fmt::Result {
        writeln!(self.out, "{name}'s Hand:\n{hand}")
    }

    fn hand_value(&mut self, name: &str, value: u16) -> fmt::Result {
        writeln!(self.out, "{name}'s hand value: {value}")
    }

    fn partial_reveal(&mut self, reveal: &PartialReveal) -> fmt::Result {
        write!(self.out, "{reveal}")
    }
}
