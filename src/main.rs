//! Berth CLI - deploy ordered workloads to a Kubernetes cluster
//!
//! Usage: berth <COMMAND>
//!
//! Commands:
//!   deploy  Deploy all configured deployments in order
//!   purge   Delete deployments in reverse order
//!   status  Show the status of every deployment

use std::process::ExitCode;

use clap::Parser;

use berth::presentation::cli::{Cli, Commands};

mod commands;
mod ui;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Deploy {
            dev,
            force,
            generated,
        } => commands::deploy::cmd_deploy(&cli, *dev, *force, generated.as_deref()),
        Commands::Purge { deployments } => {
            commands::purge::cmd_purge(&cli, deployments.as_deref())
        }
        Commands::Status => commands::status::cmd_status(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}
