//! Round state types.

use serde::Serialize;

/// Position in the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    /// No round has been started yet.
    #[default]
    Idle,
    /// Initial cards are being drawn.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended; only a new round is accepted.
    Resolved,
}
