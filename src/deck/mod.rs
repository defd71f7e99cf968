//! The remote deck collaborator boundary.
//!
//! The engine never shuffles or owns deck state. It asks a [`DeckSource`] for
//! a freshly shuffled shoe at the start of every round and draws from it one
//! request at a time. The bundled [`CardsApi`] talks to a hosted deck service
//! over HTTP; tests substitute scripted sources.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::DeckError;

mod remote;

pub use remote::CardsApi;

/// Opaque identifier for a shuffled shoe held by the deck service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckId(String);

impl DeckId {
    /// Wraps a raw identifier returned by the service.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for DeckId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A source of shuffled cards.
///
/// Implementations are expected to be remote: every method suspends until the
/// service responds. The engine issues at most one request at a time, and
/// dropping a pending future abandons the request without applying its result.
pub trait DeckSource {
    /// Requests a new shuffled shoe built from `deck_count` decks.
    ///
    /// # Errors
    ///
    /// Returns a [`DeckError`] if the service cannot provide a shoe.
    fn create_shuffled_deck(
        &mut self,
        deck_count: u8,
    ) -> impl Future<Output = Result<DeckId, DeckError>>;

    /// Draws `count` cards from the identified shoe, in order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the shoe holds fewer than `count`
    /// cards, or another [`DeckError`] if the request fails.
    fn draw_cards(
        &mut self,
        deck: &DeckId,
        count: usize,
    ) -> impl Future<Output = Result<Vec<Card>, DeckError>>;
}
