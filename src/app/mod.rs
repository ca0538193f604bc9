//! Application layer: engine configuration shared by the CLI and tests.
//!
//! ```
//! use tictactoe_engine::app::EngineConfig;
//! use tictactoe_engine::engine::Difficulty;
//! use tictactoe_engine::tictactoe::BoardState;
//!
//! let mut selector = EngineConfig::new(Difficulty::Hard).with_seed(7).build_selector()?;
//! let board = BoardState::from_string("X........")?;
//! assert_eq!(selector.select(&board, Difficulty::Hard), Some(4));
//! # Ok::<(), tictactoe_engine::Error>(())
//! ```

pub mod config;

pub use config::EngineConfig;
