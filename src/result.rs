//! Round outcome and the state snapshot exposed to rendering layers.

use serde::Serialize;

use crate::card::Card;
use crate::game::RoundState;

/// Terminal outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Player dealt a natural blackjack; automatic win.
    PlayerBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Player wins: dealer busted or player holds the higher score.
    PlayerWins,
    /// Dealer wins with the higher score.
    DealerWins,
    /// Scores tied; no winner.
    Push,
}

/// The player's hand as a renderer sees it.
#[derive(Debug, Clone, Serialize)]
pub struct HandView {
    /// Cards in draw order.
    pub cards: Vec<Card>,
    /// Current score.
    pub score: u8,
}

/// The dealer's hand as a renderer sees it.
///
/// All cards are present in draw order; while `hole_revealed` is false the
/// renderer must show the second card face down and display `visible_score`
/// rather than `score`.
#[derive(Debug, Clone, Serialize)]
pub struct DealerView {
    /// Cards in draw order, hole card included.
    pub cards: Vec<Card>,
    /// Whether the hole card has been revealed.
    pub hole_revealed: bool,
    /// Score counting only face-up cards.
    pub visible_score: u8,
    /// Full score, hole card included.
    pub score: u8,
}

/// Full state of the round after a transition, ready for rendering.
///
/// The engine has no knowledge of pixels or layout; a UI adapter translates
/// snapshots into visuals.
#[derive(Debug, Clone, Serialize)]
pub struct RoundSnapshot {
    /// Current position in the round state machine.
    pub state: RoundState,
    /// The player's hand.
    pub player: HandView,
    /// The dealer's hand.
    pub dealer: DealerView,
    /// Terminal outcome, or `None` while the round is in progress.
    pub outcome: Option<Outcome>,
}
