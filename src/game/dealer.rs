use crate::card::Card;
use crate::deck::DeckSource;
use crate::error::ActionError;
use crate::result::Outcome;

use super::{RoundState, Table};

impl<D: DeckSource> Table<D> {
    /// Plays out the dealer's hand and resolves the round.
    ///
    /// The hole card is revealed and the score recomputed from the full hand,
    /// then the dealer draws one card at a time while at 16 or below, pausing
    /// for the configured delay after each draw so a UI can show the card
    /// arriving. The round resolves by comparing final scores: a dealer bust
    /// or a higher player score wins for the player, a tie pushes, and
    /// anything else goes to the dealer.
    ///
    /// Returns the cards the dealer drew.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] unless the dealer's turn has
    /// started, or [`ActionError::Deck`] if a draw fails.
    pub async fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.round.state != RoundState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        self.round.dealer.reveal_hole();
        tracing::debug!(score = self.round.dealer.score(), "hole card revealed");

        let mut drawn = Vec::new();
        while self.round.dealer.score() <= 16 {
            let card = self.draw_one().await?;
            self.round.dealer.add_card(card);
            drawn.push(card);
            tracing::debug!(score = self.round.dealer.score(), "dealer draws");

            if let Some(delay) = self.options.dealer_delay {
                tokio::time::sleep(delay).await;
            }
        }

        let dealer_score = self.round.dealer.score();
        let player_score = self.round.player.score();

        let outcome = if dealer_score > 21 || player_score > dealer_score {
            Outcome::PlayerWins
        } else if player_score == dealer_score {
            Outcome::Push
        } else {
            Outcome::DealerWins
        };
        self.resolve(outcome);

        Ok(drawn)
    }
}
