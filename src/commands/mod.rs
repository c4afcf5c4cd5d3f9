//! Command handlers
//!
//! Each handler loads configuration, picks a reporter for the output mode and
//! drives the orchestrator. Exit status comes from the returned `Result`.

pub mod deploy;
mod project_root;
pub mod purge;
pub mod status;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use berth::config::{load_file, Config, LoadedConfig};
use berth::infrastructure::JsonReporter;
use berth::presentation::cli::Cli;
use berth::Reporter;

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::reporter::ConsoleReporter;

use project_root::discover_project_root;

/// Everything a command needs before it touches the cluster
pub struct Session {
    pub ui: UiContext,
    pub loaded: LoadedConfig,
    pub project_root: PathBuf,
}

impl Session {
    /// Load `--config PATH` or discover project/user config
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("unable to determine current directory")?;
        let project_root = discover_project_root(&cwd);

        let loaded = match &cli.config {
            Some(path) => load_file(path),
            None => Config::load_or_default(&project_root),
        }?;

        let ui = UiContext::new(
            cli.json,
            cli.verbose,
            cli.color,
            cli.no_animation,
            &loaded.config,
        );
        print_config_warnings(&ui, &loaded.warnings);

        Ok(Self {
            ui,
            loaded,
            project_root,
        })
    }

    pub fn config(&self) -> &Config {
        &self.loaded.config
    }

    /// Where the config came from, for headers
    pub fn config_source(&self) -> Option<String> {
        self.loaded
            .source
            .as_ref()
            .map(|p| p.strip_prefix(&self.project_root).unwrap_or(p).display().to_string())
    }

    pub fn reporter(&self, command: &'static str) -> Arc<dyn Reporter> {
        if self.ui.json {
            Arc::new(JsonReporter::stdout(command))
        } else {
            Arc::new(ConsoleReporter::new(self.ui))
        }
    }

    /// Whether decorative output (headers, summaries) should be printed
    pub fn decorated(&self) -> bool {
        !self.ui.json && !self.ui.is_quiet()
    }
}
