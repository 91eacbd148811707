use serde::Serialize;

use crate::cli::script::{Outcome, ScriptError};
use crate::model::task::TaskRecord;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

/// One executed script line, as printed by `tl run --json`
#[derive(Serialize)]
pub struct ActionJson<'a> {
    pub line: usize,
    pub action: &'a str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<&'a TaskRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<&'a [TaskRecord]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<'a> ActionJson<'a> {
    fn empty(line: usize, action: &'a str, ok: bool) -> Self {
        ActionJson {
            line,
            action,
            ok,
            error: None,
            name: None,
            task: None,
            tasks: None,
            names: None,
            count: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn action_to_json<'a>(
    line: usize,
    action: &'a str,
    result: &'a Result<Outcome, ScriptError>,
) -> ActionJson<'a> {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            let mut json = ActionJson::empty(line, action, false);
            json.error = Some(e.to_string());
            return json;
        }
    };

    let mut json = ActionJson::empty(line, action, true);
    match outcome {
        Outcome::Added(name)
        | Outcome::Deleted(name)
        | Outcome::Completed(name)
        | Outcome::Queued(name)
        | Outcome::Dequeued(name) => json.name = Some(name.as_str()),
        Outcome::Restored(task) => json.task = Some(task),
        Outcome::Sorted(count) => json.count = Some(*count),
        Outcome::Tasks(tasks) => json.tasks = Some(tasks.as_slice()),
        Outcome::Names(names) => json.names = Some(names.as_slice()),
    }
    json
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// `name | due_date | priority | status`, the row format shared with the TUI
pub fn format_task_line(task: &TaskRecord) -> String {
    format!(
        "{} | {} | {} | {}",
        task.name, task.due_date, task.priority, task.status
    )
}

/// Lines printed to stdout for a successful action
pub fn format_outcome(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Added(name) => vec![format!("added: {}", name)],
        Outcome::Deleted(name) => vec![format!("deleted: {}", name)],
        Outcome::Restored(task) => vec![format!("restored: {}", task.name)],
        Outcome::Completed(name) => vec![format!("completed: {}", name)],
        Outcome::Sorted(count) => vec![format!(
            "sorted {} task{}",
            count,
            if *count == 1 { "" } else { "s" }
        )],
        Outcome::Queued(name) => vec![format!("queued urgent: {}", name)],
        Outcome::Dequeued(name) => vec![format!("Processing urgent task: {}", name)],
        Outcome::Tasks(tasks) => tasks.iter().map(format_task_line).collect(),
        Outcome::Names(names) => names.clone(),
    }
}

/// The stderr line for a failed script line
pub fn format_error(line: usize, err: &ScriptError) -> String {
    format!("line {}: error: {}", line, err)
}
