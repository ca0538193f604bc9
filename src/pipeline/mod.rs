//! Series play between agents
//!
//! - [`SeriesRunner`] plays repeated games and aggregates results
//! - [`EngineAgent`] wraps the move selector at a fixed difficulty
//! - observers report progress and log moves

pub mod agents;
pub mod observers;
pub mod series;

pub use agents::EngineAgent;
pub use observers::{ProgressObserver, TracingObserver};
pub use series::{SeriesConfig, SeriesResult, SeriesRunner};

pub use crate::ports::{Agent, Observer};
