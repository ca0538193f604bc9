//! Play command - Interactive game against the engine on stdin/stdout
//!
//! The human always plays X and moves first; the engine answers as O.

use std::{
    io::{self, BufRead, Write},
    thread,
    time::Duration,
};

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::{
    cli::{config::CommonConfig, output::render_board},
    engine::{Difficulty, MoveSelector},
    tictactoe::{Game, GameOutcome, Mark},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the engine")]
pub struct PlayArgs {
    /// Difficulty (easy, medium, hard)
    #[arg(long, short = 'd', default_value = "medium")]
    pub difficulty: String,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before each engine move, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,
}

/// Results of the games finished during one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTally {
    pub human_wins: usize,
    pub engine_wins: usize,
    pub draws: usize,
}

impl SessionTally {
    fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Mark::X) => self.human_wins += 1,
            GameOutcome::Win(Mark::O) => self.engine_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

enum Command {
    Move(usize),
    Restart,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_lowercase().as_str() {
        "q" | "quit" => Some(Command::Quit),
        "r" | "restart" => Some(Command::Restart),
        other => other.parse().ok().map(Command::Move),
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let difficulty: Difficulty = args.difficulty.parse()?;
    let common = CommonConfig {
        seed: args.seed,
        ..CommonConfig::default()
    };
    let mut selector = common.engine(difficulty, 0).build_selector()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let tally = run_session(
        stdin.lock(),
        &mut stdout,
        difficulty,
        &mut selector,
        Duration::from_millis(args.delay_ms),
    )?;

    writeln!(
        stdout,
        "You won {}, the engine won {}, {} drawn.",
        tally.human_wins, tally.engine_wins, tally.draws
    )?;
    Ok(())
}

/// Run an interactive session until `q` or end of input
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    difficulty: Difficulty,
    selector: &mut MoveSelector,
    delay: Duration,
) -> Result<SessionTally> {
    let mut game = Game::new();
    let mut tally = SessionTally::default();

    writeln!(output, "You are X, the engine plays O on {difficulty}.")?;
    writeln!(output, "{}", render_board(game.state()))?;
    prompt(output)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Restart) => {
                game.reset();
                writeln!(output, "New game.")?;
                writeln!(output, "{}", render_board(game.state()))?;
            }
            Some(Command::Move(_)) if game.outcome().is_some() => {
                writeln!(output, "The game is over. Enter r to restart or q to quit.")?;
            }
            Some(Command::Move(pos)) => {
                if let Err(e) = game.play(pos) {
                    writeln!(output, "{e}")?;
                } else {
                    if game.outcome().is_none() {
                        engine_turn(&mut game, output, difficulty, selector, delay)?;
                    }
                    writeln!(output, "{}", render_board(game.state()))?;
                    if let Some(outcome) = game.outcome() {
                        tally.record(outcome);
                        announce(output, outcome)?;
                    }
                }
            }
            None => writeln!(output, "Enter a cell 0-8, r to restart or q to quit.")?,
        }
        prompt(output)?;
    }

    Ok(tally)
}

fn engine_turn<W: Write>(
    game: &mut Game,
    output: &mut W,
    difficulty: Difficulty,
    selector: &mut MoveSelector,
    delay: Duration,
) -> Result<()> {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
    if let Some((pos, reason)) = selector.select_explained(game.state(), difficulty) {
        debug!(position = pos, %reason, "engine move");
        game.play(pos)?;
        writeln!(output, "Engine plays {pos}.")?;
    }
    Ok(())
}

fn announce<W: Write>(output: &mut W, outcome: GameOutcome) -> Result<()> {
    let message = match outcome {
        GameOutcome::Win(Mark::X) => "You win!",
        GameOutcome::Win(Mark::O) => "The engine wins.",
        GameOutcome::Draw => "Draw.",
    };
    writeln!(output, "{message} Enter r to play again or q to quit.")?;
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}
