mod input;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pegboard_core_rs::{AssignmentStrategy, Solver, SolverConfig, Variant};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    /// Fixed positions, summed payout
    A,
    /// Best of N starting slots per token, summed payout
    B,
    /// Exclusive slots, min and max total payout
    C,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::A => Variant::A,
            VariantArg::B => Variant::B,
            VariantArg::C => Variant::C,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Exhaustive,
    Bitmask,
    Hungarian,
}

impl From<StrategyArg> for AssignmentStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Exhaustive => AssignmentStrategy::Exhaustive,
            StrategyArg::Bitmask => AssignmentStrategy::Bitmask,
            StrategyArg::Hungarian => AssignmentStrategy::Hungarian,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pegboard-cli", version)]
#[command(about = "Drop tokens through a peg board and optimize their payout")]
struct Args {
    /// Puzzle variant to solve
    #[arg(value_enum)]
    variant: VariantArg,

    /// Puzzle file: board rows, a blank line, then one tape per line
    input: PathBuf,

    /// Solver configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search strategy for the exclusive variant
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Log every evaluated drop (visible with RUST_LOG=debug)
    #[arg(long)]
    trace: bool,

    /// Print a JSON report instead of the bare answer
    #[arg(long)]
    json: bool,
}

fn load_config(args: &Args) -> Result<SolverConfig> {
    let mut config: SolverConfig = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SolverConfig::default(),
    };
    if let Some(strategy) = args.strategy {
        config.strategy = strategy.into();
    }
    if args.trace {
        config.trace = true;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let solver = Solver::new(config)?;

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading puzzle {}", args.input.display()))?;
    let (board, tapes) = input::parse_puzzle(&text)
        .with_context(|| format!("parsing puzzle {}", args.input.display()))?;

    let variant = Variant::from(args.variant);
    log::info!(
        "solving variant {} on {}x{} board with {} tapes ({} search)",
        variant,
        board.height(),
        board.width(),
        tapes.len(),
        solver.config().strategy.name()
    );

    if args.json {
        let report = solver
            .report(variant, &board, &tapes)
            .with_context(|| format!("solving variant {}", variant))?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let answer = solver
            .solve(variant, &board, &tapes)
            .with_context(|| format!("solving variant {}", variant))?;
        println!("{}", answer);
    }
    Ok(())
}
