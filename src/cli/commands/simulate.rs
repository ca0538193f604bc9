//! Simulate command - Play a series between two engine difficulties

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::CommonConfig,
        output::{format_share, print_kv, print_section},
    },
    engine::Difficulty,
    pipeline::{ProgressObserver, SeriesConfig, SeriesResult, SeriesRunner, TracingObserver},
};

#[derive(Parser, Debug)]
#[command(about = "Play a series of engine-vs-engine games")]
pub struct SimulateArgs {
    /// Difficulty of the engine playing X (moves first)
    #[arg(long, default_value = "hard")]
    pub x: String,

    /// Difficulty of the engine playing O
    #[arg(long, default_value = "hard")]
    pub o: String,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let common = CommonConfig {
        seed: args.seed,
        progress: !args.no_progress,
        ..CommonConfig::default()
    };

    print_section("Series Configuration");
    print_kv("X", &args.x);
    print_kv("O", &args.o);
    print_kv("Games", &args.games.to_string());
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }

    let result = run(&args, &common)?;

    print_section("Series Results");
    print_kv("Total games", &result.total_games.to_string());
    print_kv(
        &format!("X wins ({})", result.x_agent),
        &format_share(result.x_wins, result.total_games),
    );
    print_kv(
        &format!("O wins ({})", result.o_agent),
        &format_share(result.o_wins, result.total_games),
    );
    print_kv("Draws", &format_share(result.draws, result.total_games));
    print_kv("Avg game length", &format!("{:.2}", result.avg_game_length));

    if let Some(path) = &args.export {
        result.save(path)?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}

/// Build both agents and play the series
pub fn run(args: &SimulateArgs, common: &CommonConfig) -> Result<SeriesResult> {
    let x_difficulty: Difficulty = args.x.parse()?;
    let o_difficulty: Difficulty = args.o.parse()?;

    let mut x_agent = common
        .engine(x_difficulty, 0)
        .build_agent(&format!("{x_difficulty}"))?;
    let mut o_agent = common
        .engine(o_difficulty, 1)
        .build_agent(&format!("{o_difficulty}"))?;

    let mut runner = SeriesRunner::new(SeriesConfig {
        num_games: args.games,
        seed: common.seed,
    })
    .with_observer(Box::new(TracingObserver::new()));
    if common.progress {
        runner = runner.with_observer(Box::new(ProgressObserver::new()));
    }

    Ok(runner.run(&mut x_agent, &mut o_agent)?)
}
