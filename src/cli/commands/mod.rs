//! Subcommand implementations; each exposes an `Args` struct and `execute`

pub mod play;
pub mod select;
pub mod simulate;
