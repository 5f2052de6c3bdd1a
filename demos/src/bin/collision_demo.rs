use std::path::PathBuf;
use std::process::ExitCode;

use brickwork_demos::config::{DemoConfig, load_config};
use brickwork_demos::run_collision_demo;
use clap::Parser;

/// Brickwork collision demo arguments.
#[derive(Parser, Debug)]
#[command(
    name = "collision_demo",
    about = "Builds merged static collision bodies from a tile layer and simulates a falling ball",
    version
)]
struct Args {
    /// TOML config file. Built-in level is used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of simulation steps.
    #[arg(long)]
    steps: Option<u32>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => DemoConfig::default(),
    };
    if let Some(steps) = args.steps {
        config.world.steps = steps;
    }

    match run_collision_demo(&config) {
        Ok(report) => {
            log::info!(
                "{} tiles merged into {} bodies; ball at ({:.3}, {:.3}) after {} steps",
                report.tiles,
                report.bodies,
                report.ball_position.0,
                report.ball_position.1,
                config.world.steps
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
