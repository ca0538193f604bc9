//! Agent port - anything that can choose a move in a running game

use crate::{Result, tictactoe::BoardState};

/// Agent trait - uniform interface for move-choosing participants
///
/// The series pipeline only talks to players through this trait, so engine
/// difficulty tiers and scripted players are interchangeable.
///
/// # Examples
///
/// ```
/// use tictactoe_engine::{
///     Result,
///     ports::Agent,
///     tictactoe::BoardState,
/// };
///
/// /// Always takes the lowest free cell.
/// struct FirstFree;
///
/// impl Agent for FirstFree {
///     fn select_move(&mut self, state: &BoardState) -> Result<usize> {
///         state
///             .empty_cells()
///             .next()
///             .ok_or(tictactoe_engine::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
/// ```
pub trait Agent: Send {
    /// Select a move for the mark to move on `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid moves are available (terminal state).
    fn select_move(&mut self, state: &BoardState) -> Result<usize>;

    /// Name used in reports and logs.
    fn name(&self) -> &str;

    /// Seed the agent's random number generator.
    ///
    /// Pipelines call this when given a deterministic seed. Agents without
    /// randomness keep the default no-op.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
