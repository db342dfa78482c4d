use crate::cli::error::Result;
use crate::core::PlannedFile;
use prettytable::{format, Cell, Row, Table};
use serde::Serialize;
use std::path::PathBuf;

/// Longest command shown in a table cell before it is cut
const MAX_COMMAND_WIDTH: usize = 60;

/// Planned files of one directory, as shown by `seqrun list`
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryPlan {
    pub directory: PathBuf,
    pub found: bool,
    pub files: Vec<PlannedFile>,
    /// Set when the directory exists but could not be listed
    pub error: Option<String>,
}

/// Render one directory plan as a text table
pub fn render_plan_table(plan: &DirectoryPlan) -> String {
    if !plan.found {
        return format!("{} (not found)\n", plan.directory.display());
    }
    if let Some(error) = &plan.error {
        return format!("{} (could not list: {})\n", plan.directory.display(), error);
    }
    if plan.files.is_empty() {
        return format!("{} (no numbered files)\n", plan.directory.display());
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(Row::new(
        ["#", "File", "Action", "Command"]
            .iter()
            .map(|title| Cell::new(title))
            .collect(),
    ));

    for (index, file) in plan.files.iter().enumerate() {
        let (action, detail) = match (&file.command, &file.error) {
            (_, Some(error)) => ("error", error.clone()),
            (Some(command), None) => ("run", truncate(command, MAX_COMMAND_WIDTH)),
            (None, None) => ("skip", String::new()),
        };
        table.add_row(Row::new(vec![
            Cell::new(&(index + 1).to_string()),
            Cell::new(&file.name),
            Cell::new(action),
            Cell::new(&detail),
        ]));
    }

    format!("{}\n{}", plan.directory.display(), table)
}

/// Render every plan as pretty-printed JSON
pub fn render_plan_json(plans: &[DirectoryPlan]) -> Result<String> {
    Ok(serde_json::to_string_pretty(plans)?)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut)
}
