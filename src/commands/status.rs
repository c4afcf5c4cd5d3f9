//! Status command handler

use std::sync::Arc;

use anyhow::Result;

use berth::domain::ports::NoopReporter;
use berth::presentation::cli::Cli;
use berth::presentation::create_orchestrator;

use super::Session;
use crate::ui::blocks::header::render_command_header;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::status::{render_status_table, status_json};

/// Execute the status command
pub fn cmd_status(cli: &Cli) -> Result<()> {
    let session = Session::load(cli)?;
    let config = session.config();

    // Helm status queries are best-effort; their output is not progress
    let orchestrator =
        create_orchestrator(&session.project_root, config, Arc::new(NoopReporter));
    let entries = orchestrator.status();

    if session.ui.json {
        for event in status_json(&entries) {
            println!("{}", serde_json::to_string(&event)?);
        }
        return Ok(());
    }

    if session.decorated() {
        print!(
            "{}",
            render_command_header(
                Icon::Status,
                "Status",
                session.config_source().as_deref(),
                &config.deployment_names(),
                &[],
                session.ui.color,
                session.ui.unicode,
            )
        );
        println!();
    }
    print!(
        "{}",
        render_status_table(&entries, session.ui.color, session.ui.unicode)
    );
    Ok(())
}
