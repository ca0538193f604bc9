//! Configuration types for engine opponents.

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    engine::{Difficulty, MEDIUM_OPTIMAL_PROBABILITY, MoveSelector},
    pipeline::EngineAgent,
};

/// Configuration for a computer opponent.
///
/// Builder-style API; [`EngineConfig::build_selector`] validates it.
///
/// # Examples
///
/// ```
/// use tictactoe_engine::app::EngineConfig;
/// use tictactoe_engine::engine::Difficulty;
///
/// let config = EngineConfig::new(Difficulty::Medium)
///     .with_seed(42)
///     .with_optimal_probability(0.5);
/// let agent = config.build_agent("Medium")?;
/// # Ok::<(), tictactoe_engine::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Strategy tier
    pub difficulty: Difficulty,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Chance that Medium plays the minimax move when it cannot win or block
    pub optimal_probability: f64,
}

impl EngineConfig {
    /// Create a configuration for the given difficulty.
    ///
    /// Defaults: no seed (non-deterministic), Medium blend of
    /// [`MEDIUM_OPTIMAL_PROBABILITY`].
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            seed: None,
            optimal_probability: MEDIUM_OPTIMAL_PROBABILITY,
        }
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set an optional seed, keeping the configuration non-deterministic for `None`.
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the Medium blend probability.
    pub fn with_optimal_probability(mut self, probability: f64) -> Self {
        self.optimal_probability = probability;
        self
    }

    /// Build a move selector.
    ///
    /// # Errors
    ///
    /// Returns an error if the blend probability is outside `[0, 1]`.
    pub fn build_selector(&self) -> Result<MoveSelector> {
        let selector = match self.seed {
            Some(seed) => MoveSelector::with_seed(seed),
            None => MoveSelector::new(),
        };
        selector.with_optimal_probability(self.optimal_probability)
    }

    /// Build a named agent playing at the configured difficulty.
    ///
    /// # Errors
    ///
    /// Same as [`EngineConfig::build_selector`].
    pub fn build_agent(&self, name: &str) -> Result<EngineAgent> {
        Ok(EngineAgent::with_selector(
            name.to_string(),
            self.difficulty,
            self.build_selector()?,
        ))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(Difficulty::Hard)
    }
}
