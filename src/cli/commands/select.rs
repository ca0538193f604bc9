//! Select command - Pick the engine's move for a single position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{config::CommonConfig, output::print_kv},
    engine::{Difficulty, Reason},
    tictactoe::{BoardState, GameResult, Mark},
};

#[derive(Parser, Debug)]
#[command(about = "Select the engine's move for a board")]
pub struct SelectArgs {
    /// Board as 9 characters from '.', 'X', 'O', row-major from the top left
    pub board: String,

    /// Difficulty (easy, medium, hard)
    #[arg(long, short = 'd', default_value = "hard")]
    pub difficulty: String,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Outcome of a single selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectReport {
    pub board: String,
    pub difficulty: Difficulty,
    pub to_move: Mark,
    /// Chosen cell, `None` when the game is already over
    #[serde(rename = "move")]
    pub selected: Option<usize>,
    pub reason: Option<Reason>,
    /// Board after applying the move
    pub result_board: String,
    /// Status after applying the move
    pub status: GameResult,
}

pub fn execute(args: SelectArgs) -> Result<()> {
    let report = run(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_kv("Board", &report.board);
    print_kv("Difficulty", report.difficulty.as_str());
    print_kv("To move", &report.to_move.to_string());
    match (report.selected, report.reason) {
        (Some(pos), Some(reason)) => print_kv("Move", &format!("{pos} ({reason})")),
        _ => print_kv("Move", "none"),
    }
    print_kv("Status", &report.status.to_string());
    Ok(())
}

/// Parse the arguments, select a move and apply it
pub fn run(args: &SelectArgs) -> Result<SelectReport> {
    let board = BoardState::from_string(&args.board)?;
    let difficulty: Difficulty = args.difficulty.parse()?;

    let common = CommonConfig {
        seed: args.seed,
        ..CommonConfig::default()
    };
    let mut selector = common.engine(difficulty, 0).build_selector()?;

    let choice = selector.select_explained(&board, difficulty);
    let after = match choice {
        Some((pos, _)) => board.apply_move(pos)?,
        None => board,
    };

    Ok(SelectReport {
        board: board.encode(),
        difficulty,
        to_move: board.to_move(),
        selected: choice.map(|(pos, _)| pos),
        reason: choice.map(|(_, reason)| reason),
        result_board: after.encode(),
        status: after.status(),
    })
}
