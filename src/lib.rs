//! A single-player blackjack round engine backed by a remote deck service.
//!
//! The crate provides a [`Table`] type that manages the full round flow:
//! requesting a shuffled shoe from the deck collaborator, the initial deal,
//! player hit/stand decisions, the dealer's forced draws, and outcome
//! resolution. Rendering is left to the embedding UI, which consumes
//! [`RoundSnapshot`] values after each transition.
//!
//! # Example
//!
//! ```no_run
//! use veintiuno::{CardsApi, Table, TableOptions};
//!
//! # async fn play() -> Result<(), Box<dyn std::error::Error>> {
//! let mut table = Table::new(CardsApi::new(), TableOptions::default());
//! table.new_round().await?;
//! table.hit().await?;
//! table.stand()?;
//! table.dealer_play().await?;
//! println!("{:?}", table.outcome());
//! # Ok(())
//! # }
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use deck::{CardsApi, DeckId, DeckSource};
pub use error::{ActionError, DeckError};
pub use game::{Round, RoundState, Table};
pub use hand::{DealerHand, Hand};
pub use options::TableOptions;
pub use result::{DealerView, HandView, Outcome, RoundSnapshot};
