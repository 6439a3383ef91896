//! Trump suit type, its default rotation, parsing and serde form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum TrumpSuit {
    #[default]
    Hearts,
    Clubs,
    Diamonds,
    Spades,
}

impl TrumpSuit {
    /// Default trump order; round 1 is Hearts, round 5 is Hearts again.
    pub const ROTATION: [TrumpSuit; 4] = [
        TrumpSuit::Hearts,
        TrumpSuit::Clubs,
        TrumpSuit::Diamonds,
        TrumpSuit::Spades,
    ];

    /// Default trump for a 1-based round number. Round 0 is treated as round 1.
    pub fn for_round(round_no: u8) -> TrumpSuit {
        let idx = (round_no.max(1) - 1) as usize % Self::ROTATION.len();
        Self::ROTATION[idx]
    }

    pub const fn name(self) -> &'static str {
        match self {
            TrumpSuit::Hearts => "Hearts",
            TrumpSuit::Clubs => "Clubs",
            TrumpSuit::Diamonds => "Diamonds",
            TrumpSuit::Spades => "Spades",
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            TrumpSuit::Hearts => '♥',
            TrumpSuit::Clubs => '♣',
            TrumpSuit::Diamonds => '♦',
            TrumpSuit::Spades => '♠',
        }
    }
}

impl fmt::Display for TrumpSuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol(), self.name())
    }
}

impl FromStr for TrumpSuit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "heart" | "hearts" | "♥" => Ok(TrumpSuit::Hearts),
            "c" | "club" | "clubs" | "♣" => Ok(TrumpSuit::Clubs),
            "d" | "diamond" | "diamonds" | "♦" => Ok(TrumpSuit::Diamonds),
            "s" | "spade" | "spades" | "♠" => Ok(TrumpSuit::Spades),
            _ => Err(DomainError::validation(
                ValidationKind::ParseSuit,
                format!("Unknown trump suit: {s}"),
            )),
        }
    }
}

impl Serialize for TrumpSuit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TrumpSuit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "Hearts" => Ok(TrumpSuit::Hearts),
            "Clubs" => Ok(TrumpSuit::Clubs),
            "Diamonds" => Ok(TrumpSuit::Diamonds),
            "Spades" => Ok(TrumpSuit::Spades),
            _ => Err(serde::de::Error::custom(format!("Invalid trump suit: {s}"))),
        }
    }
}
