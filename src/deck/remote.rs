//! HTTP client for the hosted deck-of-cards service.

use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::card::{Card, Rank, Suit};
use crate::error::DeckError;

use super::{DeckId, DeckSource};

const DEFAULT_BASE_URL: &str = "https://deckofcardsapi.com/api/deck";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ShuffleResponse {
    success: bool,
    deck_id: String,
}

#[derive(Debug, Deserialize)]
struct DrawResponse {
    success: bool,
    #[serde(default)]
    cards: Vec<WireCard>,
}

/// Card as the service serializes it. The payload also carries image URLs and
/// a short code; only the fields the engine needs are kept.
#[derive(Debug, Deserialize)]
struct WireCard {
    value: String,
    suit: Suit,
}

impl WireCard {
    fn into_card(self) -> Result<Card, DeckError> {
        Ok(Card::new(Rank::from_label(&self.value)?, self.suit))
    }
}

/// A [`DeckSource`] backed by the public deck-of-cards HTTP service.
///
/// Two endpoints are used: `new/shuffle/?deck_count=N` to build a shoe and
/// `{deck_id}/draw/?count=N` to draw from it.
#[derive(Debug, Clone)]
pub struct CardsApi {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl CardsApi {
    /// Creates a client against the public service endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Points the client at a different service endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, DeckError> {
        tracing::debug!(%url, "deck service request");
        let response = self
            .http
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(map_transport)?
            .error_for_status()
            .map_err(map_transport)?;
        response.json::<T>().await.map_err(map_transport)
    }
}

impl Default for CardsApi {
    fn default() -> Self {
        Self::new()
    }
}

fn map_transport(err: reqwest::Error) -> DeckError {
    if err.is_timeout() {
        DeckError::Timeout
    } else {
        DeckError::DrawFailed(err.to_string())
    }
}

impl DeckSource for CardsApi {
    async fn create_shuffled_deck(&mut self, deck_count: u8) -> Result<DeckId, DeckError> {
        let url = format!("{}/new/shuffle/?deck_count={deck_count}", self.base_url);
        let body: ShuffleResponse = self.get_json(url).await?;
        if !body.success {
            return Err(DeckError::DrawFailed("service reported failure".to_owned()));
        }
        Ok(DeckId::new(body.deck_id))
    }

    async fn draw_cards(&mut self, deck: &DeckId, count: usize) -> Result<Vec<Card>, DeckError> {
        let url = format!("{}/{}/draw/?count={count}", self.base_url, deck.as_str());
        let body: DrawResponse = self.get_json(url).await?;
        if !body.success {
            return Err(DeckError::DrawFailed("service reported failure".to_owned()));
        }
        let cards = body
            .cards
            .into_iter()
            .map(WireCard::into_card)
            .collect::<Result<Vec<_>, _>>()?;
        if cards.len() < count {
            return Err(DeckError::Exhausted {
                requested: count,
                received: cards.len(),
            });
        }
        Ok(cards)
    }
}
