use berth::StatusEntry;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

const HEADERS: [&str; 4] = ["NAME", "KIND", "TARGET", "STATUS"];
const GAP: usize = 2;

fn row_cells(entry: &StatusEntry) -> [String; 4] {
    match &entry.result {
        Ok(status) => [
            entry.name.clone(),
            status.kind.clone(),
            status.target.clone(),
            status.status.clone(),
        ],
        Err(err) => [
            entry.name.clone(),
            "-".to_string(),
            "-".to_string(),
            err.to_string(),
        ],
    }
}

/// Render entries as an aligned table. The last column is never padded.
pub fn render_status_table(
    entries: &[StatusEntry],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let rows: Vec<[String; 4]> = entries.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let header = pad_row(&HEADERS.map(|h| h.to_string()), &widths);
    out.push_str(&ColoredText::plain(header).bold().render(supports_color));
    out.push('\n');

    let rule = if supports_unicode {
        theme::rules::HORIZONTAL
    } else {
        theme::rules::HORIZONTAL_ASCII
    };
    let total = widths.iter().sum::<usize>() + GAP * (widths.len() - 1);
    out.push_str(&ColoredText::dim(rule.repeat(total)).render(supports_color));
    out.push('\n');

    for (entry, row) in entries.iter().zip(&rows) {
        let line = pad_row(row, &widths);
        let line = if entry.is_ok() {
            line
        } else {
            ColoredText::error(line).render(supports_color)
        };
        out.push_str(&line);
        out.push('\n');
    }

    let failed = entries.iter().filter(|e| !e.is_ok()).count();
    if failed > 0 {
        out.push_str(&format!(
            "\n{} {} of {} deployments could not report status\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            failed,
            entries.len()
        ));
    }
    out
}

fn pad_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        line.push_str(cell);
        if i + 1 < cells.len() {
            let padding = width.saturating_sub(cell.width()) + GAP;
            line.push_str(&" ".repeat(padding));
        }
    }
    line
}

/// One JSON object per entry, in declared order
pub fn status_json(entries: &[StatusEntry]) -> Vec<serde_json::Value> {
    entries
        .iter()
        .map(|entry| match &entry.result {
            Ok(status) => serde_json::json!({
                "event": "status",
                "name": entry.name,
                "kind": status.kind,
                "target": status.target,
                "status": status.status,
            }),
            Err(err) => serde_json::json!({
                "event": "status",
                "name": entry.name,
                "error": err.to_string(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use berth::domain::ports::StatusResult;
    use berth::{BerthError, ConfigError};

    fn entries() -> Vec<StatusEntry> {
        vec![
            StatusEntry {
                name: "db".to_string(),
                result: Ok(StatusResult::new("db", "Chart", "bitnami/postgresql", "deployed")),
            },
            StatusEntry {
                name: "api".to_string(),
                result: Ok(StatusResult::new(
                    "api",
                    "Manifests",
                    "k8s/api/*.yaml,k8s/api/extra.yaml",
                    "N/A",
                )),
            },
            StatusEntry {
                name: "worker".to_string(),
                result: Err(BerthError::configuration(
                    "worker",
                    ConfigError::NoDeploymentMethod,
                )),
            },
        ]
    }

    #[test]
    fn table_aligns_columns() {
        let rendered = render_status_table(&entries()[..2], false, false);
        insta::assert_snapshot!(rendered, @r"
        NAME  KIND       TARGET                   STATUS
        --------------------------------------------------
        db    Chart      bitnami/postgresql       deployed
        api   Manifests  k8s/api/*.yaml,k8s/a...  N/A
        ");
    }

    #[test]
    fn failed_entries_are_counted() {
        let rendered = render_status_table(&entries(), false, true);
        assert!(rendered.contains("worker  -"));
        assert!(rendered.contains("has no deployment method"));
        assert!(rendered.contains("1 of 3 deployments could not report status"));
    }

    #[test]
    fn wide_characters_use_display_width() {
        let entries = vec![StatusEntry {
            name: "ウェブ".to_string(),
            result: Ok(StatusResult::new("ウェブ", "Component", "web", "N/A")),
        }];
        let rendered = render_status_table(&entries, false, false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0].find("KIND"), Some(8));
        assert_eq!(lines[2].width(), lines[0].width() - "STATUS".len() + "N/A".len());
    }

    #[test]
    fn json_reports_errors_per_entry() {
        let json = status_json(&entries());
        assert_eq!(json.len(), 3);
        assert_eq!(json[0]["status"], "deployed");
        assert_eq!(json[1]["target"], "k8s/api/*.yaml,k8s/a...");
        assert!(json[2]["error"]
            .as_str()
            .unwrap()
            .contains("deployment 'worker'"));
        assert!(json[2].get("status").is_none());
    }
}
