//! Round engine and lifecycle management.

use crate::card::Card;
use crate::deck::{DeckId, DeckSource};
use crate::error::DeckError;
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;
use crate::result::{DealerView, HandView, Outcome, RoundSnapshot};

mod actions;
mod dealer;
pub mod state;

pub use state::RoundState;

/// One round's state: both hands and the outcome, nothing ambient.
///
/// A round is created at `new_round`, mutated as cards arrive and decisions
/// are made, and discarded when the next round begins.
#[derive(Debug, Clone, Default)]
pub struct Round {
    player: Hand,
    dealer: DealerHand,
    state: RoundState,
    outcome: Option<Outcome>,
}

impl Round {
    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the terminal outcome, or `None` while the round is in progress.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Builds a renderer-facing snapshot of the round.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            state: self.state,
            player: HandView {
                cards: self.player.cards().to_vec(),
                score: self.player.score(),
            },
            dealer: DealerView {
                cards: self.dealer.cards().to_vec(),
                hole_revealed: self.dealer.is_hole_revealed(),
                visible_score: self.dealer.visible_score(),
                score: self.dealer.score(),
            },
            outcome: self.outcome,
        }
    }

    fn reset(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.outcome = None;
        self.state = RoundState::Idle;
    }
}

/// A single-player blackjack table driven by a remote deck source.
///
/// The table owns the deck collaborator handle, the options, and the current
/// [`Round`]. There is exactly one logical task per round: every draw is a
/// single request awaited to completion before the next one is issued.
pub struct Table<D> {
    deck: D,
    options: TableOptions,
    deck_id: Option<DeckId>,
    round: Round,
}

impl<D: DeckSource> Table<D> {
    /// Creates a new table using the given deck source.
    #[must_use]
    pub fn new(deck: D, options: TableOptions) -> Self {
        Self {
            deck,
            options,
            deck_id: None,
            round: Round::default(),
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current round.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.round.state
    }

    /// Returns the terminal outcome, or `None` while the round is in progress.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.round.outcome
    }

    /// Returns the identifier of the active shoe, if a round has started.
    #[must_use]
    pub fn deck_id(&self) -> Option<&DeckId> {
        self.deck_id.as_ref()
    }

    /// Builds a renderer-facing snapshot of the current round.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        self.round.snapshot()
    }

    /// Starts a new round: clears both hands, requests a brand-new shuffled
    /// shoe, and deals two cards each to dealer and player.
    ///
    /// Allowed from any state, including mid-round restart. If the player's
    /// initial two cards are a natural blackjack the round resolves
    /// immediately and the dealer's hole card stays hidden.
    ///
    /// # Errors
    ///
    /// Returns a [`DeckError`] if the shoe request or any draw fails; the
    /// round is left unresolved and a further `new_round` call recovers.
    pub async fn new_round(&mut self) -> Result<RoundSnapshot, DeckError> {
        self.round.reset();
        self.round.state = RoundState::Dealing;

        tracing::debug!(decks = self.options.decks, "requesting fresh shoe");
        let deck_id = self.deck.create_shuffled_deck(self.options.decks).await?;
        tracing::info!(deck_id = %deck_id, "round started");
        self.deck_id = Some(deck_id);

        // Dealer first, then player, one card per request.
        for _ in 0..2 {
            let card = self.draw_one().await?;
            self.round.dealer.add_card(card);
        }
        for _ in 0..2 {
            let card = self.draw_one().await?;
            self.round.player.add_card(card);
        }

        if self.round.player.is_natural() {
            // Automatic win; the hole card is never revealed on this path.
            self.resolve(Outcome::PlayerBlackjack);
        } else {
            self.round.state = RoundState::PlayerTurn;
        }

        Ok(self.snapshot())
    }

    /// Draws a single card, retrying failed requests up to the configured
    /// attempt budget.
    async fn draw_one(&mut self) -> Result<Card, DeckError> {
        let deck_id = self
            .deck_id
            .clone()
            .ok_or_else(|| DeckError::DrawFailed("no active shoe".to_owned()))?;

        let attempts = self.options.draw_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.deck.draw_cards(&deck_id, 1).await {
                Ok(cards) => {
                    let Some(card) = cards.first().copied() else {
                        return Err(DeckError::Exhausted {
                            requested: 1,
                            received: 0,
                        });
                    };
                    return Ok(card);
                }
                Err(err) if attempt < attempts => {
                    tracing::warn!(error = %err, attempt, "draw attempt failed, retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn resolve(&mut self, outcome: Outcome) {
        self.round.outcome = Some(outcome);
        self.round.state = RoundState::Resolved;
        tracing::info!(
            ?outcome,
            player_score = self.round.player.score(),
            dealer_score = self.round.dealer.score(),
            "round resolved"
        );
    }
}
