use berth::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

/// Unknown-key warnings, one block per key, on stderr
pub fn print_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    if ui.json {
        return;
    }
    for w in warnings {
        eprint!("{}", render_config_warning(w, ui.color, ui.unicode));
    }
}

fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    let mut out = match warning.line {
        Some(line) => format!(
            "{} Unknown config key '{}' in {}:{}\n",
            icon,
            warning.key,
            warning.file.display(),
            line
        ),
        None => format!(
            "{} Unknown config key '{}' in {}\n",
            icon,
            warning.key,
            warning.file.display()
        ),
    };
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn warning_includes_line_and_suggestion() {
        let warning = ConfigWarning {
            key: "namespce".to_string(),
            file: PathBuf::from(".berth/config.toml"),
            line: Some(3),
            suggestion: Some("namespace".to_string()),
        };
        let rendered = render_config_warning(&warning, false, false);
        assert_eq!(
            rendered,
            "[WARN] Unknown config key 'namespce' in .berth/config.toml:3\n   Did you mean 'namespace'?\n"
        );
    }

    #[test]
    fn warning_without_line() {
        let warning = ConfigWarning {
            key: "extra".to_string(),
            file: PathBuf::from("berth.toml"),
            line: None,
            suggestion: None,
        };
        let rendered = render_config_warning(&warning, false, false);
        assert_eq!(rendered, "[WARN] Unknown config key 'extra' in berth.toml\n");
    }
}
