//! Error types for deck and round operations.

use thiserror::Error;

/// Errors from the remote deck collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The service returned a card label outside the known vocabulary.
    #[error("invalid card label `{0}`")]
    InvalidCardLabel(String),
    /// A shuffle or draw request failed.
    #[error("draw request failed: {0}")]
    DrawFailed(String),
    /// A request did not complete within the configured timeout.
    #[error("draw request timed out")]
    Timeout,
    /// The shoe returned fewer cards than requested.
    #[error("shoe exhausted: requested {requested} cards, received {received}")]
    Exhausted {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards the service returned.
        received: usize,
    },
}

/// Errors from player actions and dealer play.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is not in a state that accepts this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// A draw from the deck collaborator failed.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
