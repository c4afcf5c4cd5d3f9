//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --no-animation, --config) are inherited by all subcommands

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use crate::application::parse_deployment_filter;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Berth - deploy and purge Kubernetes workloads
#[derive(Parser, Debug)]
#[command(name = "berth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Disable animations (spinners, live updates)
    #[arg(long, global = true)]
    pub no_animation: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to .berth/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy all configured deployments in order, stopping at the first failure
    Deploy {
        /// Use the development image tags
        #[arg(long)]
        dev: bool,

        /// Force the update where the deployment method supports it
        #[arg(short, long)]
        force: bool,

        /// Generated state file with image tags (defaults to [generated] path)
        #[arg(long, value_name = "PATH")]
        generated: Option<PathBuf>,
    },

    /// Delete deployments in reverse order, continuing past failures
    Purge {
        /// Comma-separated deployment names (all when omitted)
        #[arg(short, long, value_name = "NAMES")]
        deployments: Option<String>,
    },

    /// Show the status of every deployment
    Status,
}
