//! Table configuration options.

extern crate alloc;

use alloc::string::String;

/// Configuration options for a [`Table`](crate::Table).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcore::TableOptions;
///
/// let options = TableOptions::default()
///     .with_player_name("Alice")
///     .with_reshuffle_below(15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Name of the seated player.
    pub player_name: String,
    /// Restock the deck at the start of a round when fewer cards than this
    /// remain. 0 to never restock.
    pub reshuffle_below: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            player_name: String::from("Player"),
            reshuffle_below: 0,
        }
    }
}

impl TableOptions {
    /// Sets the player's name.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::TableOptions;
    ///
    /// let options = TableOptions::default().with_player_name("Bob");
    /// assert_eq!(options.player_name, "Bob");
    /// ```
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Sets the restock threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::TableOptions;
    ///
    /// let options = TableOptions::default().with_reshuffle_below(10);
    /// assert_eq!(options.reshuffle_below, 10);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_below(mut self, threshold: usize) -> Self {
        self.reshuffle_below = threshold;
        self
    }
}
