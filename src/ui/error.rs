use berth::{BerthError, ConfigError, ErrorKind};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::detect_capabilities;

/// Follow-up hint for a library error
fn hint(err: &BerthError) -> Option<String> {
    if let BerthError::Configuration {
        name,
        source: ConfigError::MissingField { field },
    } = err
    {
        return Some(format!("Set '{field}' in the deployment named '{name}'"));
    }

    match (err.kind(), err.workload()) {
        (ErrorKind::Configuration, Some(name)) => Some(format!(
            "Fix the [[deployments]] entry named '{name}': set exactly one of kubectl, helm or component"
        )),
        (ErrorKind::Construction, Some(name)) => Some(format!(
            "Check the manifests, chart and cluster settings of '{name}'"
        )),
        (ErrorKind::Execution, Some(name)) => Some(format!(
            "Deployments before '{name}' were applied; later ones were not attempted"
        )),
        (ErrorKind::Load, Some(name)) => Some(format!("Rename one of the '{name}' deployments")),
        (ErrorKind::Load, None) => Some("Fix the file and run the command again".to_string()),
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );

    if let Some(hint) = err.downcast_ref::<BerthError>().and_then(hint) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            hint
        ));
    }
    out
}

/// GitHub Actions workflow command for an error
fn github_actions_annotation(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error title=berth::{escaped}")
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        println!("{}", output);
        return;
    }

    let caps = detect_capabilities();
    if caps.is_ci && std::env::var("GITHUB_ACTIONS").is_ok() {
        println!("{}", github_actions_annotation(&err.to_string()));
    }
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
