//! Deploy command handler
//!
//! Deploys every configured workload in declared order and stops at the
//! first failure.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use berth::infrastructure::load_generated;
use berth::presentation::cli::Cli;
use berth::presentation::create_orchestrator;
use berth::DeployOptions;

use super::Session;
use crate::ui::blocks::header::render_command_header;
use crate::ui::primitives::icon::Icon;

/// Execute the deploy command
pub fn cmd_deploy(cli: &Cli, dev: bool, force: bool, generated: Option<&Path>) -> Result<()> {
    let session = Session::load(cli)?;
    let config = session.config();

    let generated_path = match generated {
        Some(path) => path.to_path_buf(),
        None => config.generated_path(&session.project_root),
    };
    let generated = load_generated(&generated_path)?;

    if session.decorated() {
        let mut modes = Vec::new();
        if dev {
            modes.push("dev images");
        }
        if force {
            modes.push("force");
        }
        print!(
            "{}",
            render_command_header(
                Icon::Deploy,
                "Deploy",
                session.config_source().as_deref(),
                &config.deployment_names(),
                &modes,
                session.ui.color,
                session.ui.unicode,
            )
        );
        println!();
    }

    let reporter = session.reporter("deploy");
    let orchestrator = create_orchestrator(&session.project_root, config, Arc::clone(&reporter));
    let options = DeployOptions::new(generated)
        .with_dev(dev)
        .with_force(force);

    orchestrator.deploy_all(&options)?;

    let count = orchestrator.workloads().len();
    reporter.done(&format!(
        "Deployed {} deployment{}",
        count,
        if count == 1 { "" } else { "s" }
    ));
    Ok(())
}
