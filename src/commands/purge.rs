//! Purge command handler
//!
//! Deletes workloads in reverse declared order. Individual failures are
//! reported as warnings; the command itself succeeds once config is loaded.

use std::sync::Arc;

use anyhow::Result;

use berth::presentation::cli::{parse_deployment_filter, Cli};
use berth::presentation::create_orchestrator;
use berth::PurgeOptions;

use super::Session;
use crate::ui::blocks::header::render_command_header;
use crate::ui::primitives::icon::Icon;

/// Execute the purge command
pub fn cmd_purge(cli: &Cli, deployments: Option<&str>) -> Result<()> {
    let session = Session::load(cli)?;
    let config = session.config();

    let names = deployments.map(parse_deployment_filter).unwrap_or_default();
    let options = PurgeOptions::only(names);

    if session.decorated() {
        let selected: Vec<&str> = config
            .deployment_names()
            .into_iter()
            .rev()
            .filter(|name| options.selects(name))
            .collect();
        print!(
            "{}",
            render_command_header(
                Icon::Purge,
                "Purge",
                session.config_source().as_deref(),
                &selected,
                &[],
                session.ui.color,
                session.ui.unicode,
            )
        );
        println!();
    }

    let reporter = session.reporter("purge");
    let orchestrator = create_orchestrator(&session.project_root, config, Arc::clone(&reporter));
    orchestrator.purge(&options);
    Ok(())
}
