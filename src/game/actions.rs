use crate::card::Card;
use crate::deck::DeckSource;
use crate::error::ActionError;
use crate::result::Outcome;

use super::{RoundState, Table};

impl<D: DeckSource> Table<D> {
    /// Player action: hit (draw a card).
    ///
    /// If the new score exceeds 21 the round resolves as a player bust.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] unless it is the player's turn,
    /// or [`ActionError::Deck`] if the draw fails.
    pub async fn hit(&mut self) -> Result<Card, ActionError> {
        if self.round.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.draw_one().await?;
        self.round.player.add_card(card);
        tracing::debug!(score = self.round.player.score(), "player hits");

        if self.round.player.is_bust() {
            self.resolve(Outcome::PlayerBust);
        }

        Ok(card)
    }

    /// Player action: stand (keep the current hand).
    ///
    /// Hands the turn to the dealer; call [`Table::dealer_play`] to finish
    /// the round.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] unless it is the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.round.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        tracing::debug!(score = self.round.player.score(), "player stands");
        self.round.state = RoundState::DealerTurn;
        Ok(())
    }
}
