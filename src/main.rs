//! Mastermind Solver - CLI
//!
//! Plays the codebreaker: proposes guesses, reads hit/miss feedback and
//! narrows the candidate codes until only the secret remains.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        analyze_code, print_test_all_statistics, run_benchmark, run_simple, run_test_all,
        solve_code,
    },
    core::{Code, DEFAULT_BASE, DEFAULT_PEGS, GameConfig, Rules},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::StrategyType,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind codebreaker using candidate elimination and minimax search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of symbols (colors), 1-36
    #[arg(short, long, global = true, default_value_t = DEFAULT_BASE)]
    base: usize,

    /// Code length, 1-16
    #[arg(short, long, global = true, default_value_t = DEFAULT_PEGS)]
    pegs: usize,

    /// Only allow codes without repeated symbols
    #[arg(short, long, global = true)]
    distinct: bool,

    /// Opening guess (default: 1122 for 4 pegs, otherwise the first code)
    #[arg(short, long, global = true)]
    opening: Option<String>,

    /// Strategy: first (default) or minimax
    #[arg(short, long, global = true, default_value = "first")]
    strategy: String,

    /// Seed for random secrets (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a secret and print every round (default)
    Solve {
        /// The secret to solve, e.g. 1335 (default: random)
        secret: Option<String>,

        /// Show candidate counts for each round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze how a guess splits the full code space
    Analyze {
        /// Code to analyze
        code: String,
    },

    /// Play many games with random secrets
    Benchmark {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Play against every secret in the code space
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Interactive mode: you keep the secret and score the guesses
    Simple,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = build_config(&cli)?;
    let strategy = StrategyType::from_name(&cli.strategy).with_context(|| {
        format!(
            "Unknown strategy '{}' (expected 'first' or 'minimax')",
            cli.strategy
        )
    })?;
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());

    let command = cli.command.unwrap_or(Commands::Solve {
        secret: None,
        verbose: false,
    });

    match command {
        Commands::Solve { secret, verbose } => {
            run_solve_command(config, strategy, secret.as_deref(), verbose, seed)
        }
        Commands::Analyze { code } => run_analyze_command(&config, &code),
        Commands::Benchmark { count } => run_benchmark_command(&config, strategy, count, seed),
        Commands::TestAll { limit } => run_test_all_command(&config, strategy, limit),
        Commands::Simple => {
            let opening = config.resolve_opening()?;
            run_simple(&config.rules, &opening, &strategy)
        }
    }
}

/// Build the game configuration from the global flags
fn build_config(cli: &Cli) -> Result<GameConfig> {
    let rules = Rules::new(cli.base, cli.pegs, cli.distinct)?;
    let mut config = GameConfig::new(rules);

    if let Some(opening) = &cli.opening {
        let opening = Code::parse(opening).context("Invalid opening guess")?;
        config = config.with_opening(opening);
    }

    config.validate()?;
    Ok(config)
}

fn run_solve_command(
    config: GameConfig,
    strategy: StrategyType,
    secret: Option<&str>,
    verbose: bool,
    seed: u64,
) -> Result<()> {
    let config = match secret {
        Some(text) => config.with_secret(Code::parse(text).context("Invalid secret")?),
        None => config,
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let result = solve_code(&config, strategy, &mut rng)?;

    if verbose {
        println!("Strategy: {}", strategy.name());
        if config.secret.is_none() {
            println!("Seed: {seed}");
        }
    }

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(config: &GameConfig, code: &str) -> Result<()> {
    let code = Code::parse(code).context("Invalid code")?;
    let result = analyze_code(&config.rules, &code)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    config: &GameConfig,
    strategy: StrategyType,
    count: usize,
    seed: u64,
) -> Result<()> {
    println!(
        "Running benchmark on {count} random secrets (strategy: {}, seed: {seed})...",
        strategy.name()
    );

    let result = run_benchmark(config, &strategy, count, seed)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(
    config: &GameConfig,
    strategy: StrategyType,
    limit: Option<usize>,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nRules: {} symbols, {} pegs{}",
        config.rules.base(),
        config.rules.pegs(),
        if config.rules.distinct() { ", no repeats" } else { "" }
    );
    println!("Strategy: {}", strategy.name());
    println!();

    let stats = run_test_all(config, &strategy, limit)?;
    print_test_all_statistics(&stats);
    Ok(())
}
