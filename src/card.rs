//! Card types and the remote deck service's rank vocabulary.

use serde::{Deserialize, Serialize};

use crate::error::DeckError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

/// Card rank, in the deck service's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Two.
    #[serde(rename = "2")]
    Two,
    /// Three.
    #[serde(rename = "3")]
    Three,
    /// Four.
    #[serde(rename = "4")]
    Four,
    /// Five.
    #[serde(rename = "5")]
    Five,
    /// Six.
    #[serde(rename = "6")]
    Six,
    /// Seven.
    #[serde(rename = "7")]
    Seven,
    /// Eight.
    #[serde(rename = "8")]
    Eight,
    /// Nine.
    #[serde(rename = "9")]
    Nine,
    /// Ten.
    #[serde(rename = "10")]
    Ten,
    /// Jack.
    #[serde(rename = "JACK")]
    Jack,
    /// Queen.
    #[serde(rename = "QUEEN")]
    Queen,
    /// King.
    #[serde(rename = "KING")]
    King,
    /// Ace.
    #[serde(rename = "ACE")]
    Ace,
}

impl Rank {
    /// Parses a rank from the deck service's value label.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidCardLabel`] if the label is not part of the
    /// service vocabulary (`"2"`..`"10"`, `"JACK"`, `"QUEEN"`, `"KING"`, `"ACE"`).
    pub fn from_label(label: &str) -> Result<Self, DeckError> {
        match label {
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "4" => Ok(Self::Four),
            "5" => Ok(Self::Five),
            "6" => Ok(Self::Six),
            "7" => Ok(Self::Seven),
            "8" => Ok(Self::Eight),
            "9" => Ok(Self::Nine),
            "10" => Ok(Self::Ten),
            "JACK" => Ok(Self::Jack),
            "QUEEN" => Ok(Self::Queen),
            "KING" => Ok(Self::King),
            "ACE" => Ok(Self::Ace),
            _ => Err(DeckError::InvalidCardLabel(label.to_owned())),
        }
    }

    /// Returns the service value label for this rank.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "JACK",
            Self::Queen => "QUEEN",
            Self::King => "KING",
            Self::Ace => "ACE",
        }
    }

    /// Returns the provisional point value of this rank.
    ///
    /// Face cards count 10 and an ace counts 11; scoring may later downgrade
    /// aces to 1 to keep a hand at or under 21.
    #[must_use]
    pub const fn point_value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
        }
    }

    /// Returns whether this rank is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }

    /// Returns whether this rank is a face card (jack, queen, or king).
    ///
    /// A plain ten is not a face card; the automatic-win check relies on this
    /// distinction.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}
