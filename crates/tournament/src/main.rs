//! Tournament CLI
//!
//! Play repeated games between two agent programs and print the tally.

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;
use tournament::{CancelToken, Cli, Tournament};
use tracing::{error, info};

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{level}'"))?,
    };

    // stdout is reserved for result lines and the tally
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config = cli.to_config()?;
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!(
        seed,
        games = config.games,
        depth = config.depth,
        opening_plies = config.opening_plies,
        "Starting {} vs {}",
        config.agents[0].label(),
        config.agents[1].label()
    );

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        ctrlc::set_handler(move || {
            eprintln!("\nInterrupted, stopping after the current game...");
            cancel.cancel();
        })
        .context("failed to install Ctrl-C handler")?;
    }

    let tournament = Tournament::new(config.settings(!cli.json)?);
    let mut oracle = config.oracle();
    let mut random_mover = config.random_mover();
    let mut agents = config.agents()?;

    let report = tournament.run(&mut oracle, &mut random_mover, &mut agents, &mut rng, &cancel);

    if cli.json {
        println!("{}", report.to_json().context("failed to serialize report")?);
    } else {
        println!();
        report.print_report();
    }

    if report.termination.is_abnormal() {
        error!(termination = %report.termination, "tournament ended abnormally");
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
