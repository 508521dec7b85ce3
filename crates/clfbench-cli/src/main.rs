use anyhow::Result;
use clap::ArgMatches;
use log::LevelFilter;

use clfbench_classifiers::config::ExperimentConfig;
use clfbench_cli::cli::build_cli;
use clfbench_cli::compare::input::CompareOptions;
use clfbench_cli::compare::run::run_comparison;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("CLFBENCH_LOG", "error,clfbench=info"))
        .init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => handle_run(run_matches),
        Some(("config", _)) => {
            println!("{}", serde_json::to_string_pretty(&ExperimentConfig::default())?);
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_run(matches: &ArgMatches) -> Result<()> {
    let options = match CompareOptions::from_arguments(matches) {
        Ok(options) => options,
        Err(e) => {
            log::error!("Invalid arguments: {:#}", e);
            std::process::exit(1)
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run_comparison(&options, &mut out) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("Comparison failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
