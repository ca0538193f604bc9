//! Difficulty tiers of the computer opponent

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Strategy tier the move selector delegates to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal move
    Easy,
    /// Win or block when possible, otherwise mostly optimal
    Medium,
    /// Full minimax search
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == normalized)
            .ok_or_else(|| crate::Error::InvalidDifficulty {
                input: s.to_string(),
                expected: Difficulty::ALL.map(Difficulty::as_str).join(", "),
            })
    }
}
