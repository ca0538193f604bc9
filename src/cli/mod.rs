//! CLI infrastructure for the tic-tac-toe engine
//!
//! This module provides the command-line interface for evaluating single
//! positions, playing interactively, and running engine-vs-engine series.

pub mod commands;
pub mod config;
pub mod output;
