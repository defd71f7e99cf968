//! Table configuration options.

use std::time::Duration;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use std::time::Duration;
/// use veintiuno::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_draw_attempts(3)
///     .with_dealer_delay(Some(Duration::from_secs(1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks in the shoe requested from the deck service.
    pub decks: u8,
    /// Attempts per draw request before the round fails. Must be at least 1.
    pub draw_attempts: u8,
    /// Pause between dealer draws so a UI can show each card arriving.
    /// `None` resolves the dealer's turn without delays.
    pub dealer_delay: Option<Duration>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            draw_attempts: 1,
            dealer_delay: None,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks in the shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use veintiuno::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the attempts per draw request.
    ///
    /// # Example
    ///
    /// ```
    /// use veintiuno::TableOptions;
    ///
    /// let options = TableOptions::default().with_draw_attempts(3);
    /// assert_eq!(options.draw_attempts, 3);
    /// ```
    #[must_use]
    pub const fn with_draw_attempts(mut self, attempts: u8) -> Self {
        self.draw_attempts = attempts;
        self
    }

    /// Sets the pause between dealer draws.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use veintiuno::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_delay(Some(Duration::from_millis(500)));
    /// assert!(options.dealer_delay.is_some());
    /// ```
    #[must_use]
    pub const fn with_dealer_delay(mut self, delay: Option<Duration>) -> Self {
        self.dealer_delay = delay;
        self
    }
}
