//! Line-oriented scripts for `tl run`.
//!
//! One action per line. Blank lines and lines starting with `#` are skipped.
//! `add` takes up to three `|`-separated fields, mirroring the way tasks are
//! printed: `add Pay rent | 2024-01-01 09:00:00 | High`.

use crate::model::task::{Priority, TaskRecord, now_due_date};
use crate::ops::board::Board;
use crate::ops::error::TaskError;

/// One parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add {
        name: String,
        due_date: Option<String>,
        priority: Option<Priority>,
    },
    Delete(String),
    Undo,
    Complete(String),
    Sort,
    Urgent(String),
    /// Dequeue the oldest urgent task
    Next,
    Search(String),
    List,
    /// Show the urgent queue
    Queue,
}

impl Action {
    /// The command word this action was parsed from
    pub fn verb(&self) -> &'static str {
        match self {
            Action::Add { .. } => "add",
            Action::Delete(_) => "delete",
            Action::Undo => "undo",
            Action::Complete(_) => "complete",
            Action::Sort => "sort",
            Action::Urgent(_) => "urgent",
            Action::Next => "next",
            Action::Search(_) => "search",
            Action::List => "list",
            Action::Queue => "queue",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("{0} takes no arguments")]
    UnexpectedArgument(&'static str),
    #[error(transparent)]
    Task(#[from] TaskError),
}

/// What a successfully executed action produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(String),
    Deleted(String),
    Restored(TaskRecord),
    Completed(String),
    Sorted(usize),
    Queued(String),
    Dequeued(String),
    Tasks(Vec<TaskRecord>),
    Names(Vec<String>),
}

/// Parse one line. `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Action>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let action = match word.to_ascii_lowercase().as_str() {
        "add" => parse_add(rest)?,
        "delete" | "del" | "rm" => Action::Delete(required(rest, "delete")?),
        "complete" | "done" => Action::Complete(required(rest, "complete")?),
        "urgent" => Action::Urgent(required(rest, "urgent")?),
        "search" => Action::Search(rest.to_string()),
        "undo" => no_args(rest, "undo", Action::Undo)?,
        "sort" => no_args(rest, "sort", Action::Sort)?,
        "next" => no_args(rest, "next", Action::Next)?,
        "list" | "ls" => no_args(rest, "list", Action::List)?,
        "queue" => no_args(rest, "queue", Action::Queue)?,
        _ => return Err(ScriptError::UnknownCommand(word.to_string())),
    };
    Ok(Some(action))
}

/// Parse a whole script, keeping 1-based line numbers and dropping blank lines
pub fn parse_script(text: &str) -> Vec<(usize, Result<Action, ScriptError>)> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| parse_line(line).transpose().map(|parsed| (i + 1, parsed)))
        .collect()
}

fn parse_add(rest: &str) -> Result<Action, ScriptError> {
    if rest.is_empty() {
        return Err(ScriptError::MissingArgument("add"));
    }
    let mut fields = rest.splitn(3, '|').map(str::trim);
    let name = fields.next().unwrap_or_default().to_string();
    let due_date = fields
        .next()
        .filter(|due| !due.is_empty())
        .map(str::to_string);
    let priority = match fields.next().filter(|p| !p.is_empty()) {
        Some(p) => Some(p.parse::<Priority>()?),
        None => None,
    };
    Ok(Action::Add {
        name,
        due_date,
        priority,
    })
}

fn required(rest: &str, verb: &'static str) -> Result<String, ScriptError> {
    if rest.is_empty() {
        Err(ScriptError::MissingArgument(verb))
    } else {
        Ok(rest.to_string())
    }
}

fn no_args(rest: &str, verb: &'static str, action: Action) -> Result<Action, ScriptError> {
    if rest.is_empty() {
        Ok(action)
    } else {
        Err(ScriptError::UnexpectedArgument(verb))
    }
}

/// Apply one action to the board
pub fn run_action(
    board: &mut Board,
    action: Action,
    default_priority: Priority,
) -> Result<Outcome, ScriptError> {
    let outcome = match action {
        Action::Add {
            name,
            due_date,
            priority,
        } => {
            let due_date = due_date.unwrap_or_else(now_due_date);
            board.add_task(&name, &due_date, priority.unwrap_or(default_priority))?;
            Outcome::Added(name.trim().to_string())
        }
        Action::Delete(name) => {
            board.delete_task(&name)?;
            Outcome::Deleted(name)
        }
        Action::Undo => Outcome::Restored(board.undo_delete()?),
        Action::Complete(name) => {
            board.mark_complete(&name)?;
            Outcome::Completed(name)
        }
        Action::Sort => {
            board.sort_by_due_date()?;
            Outcome::Sorted(board.tasks().len())
        }
        Action::Urgent(name) => {
            board.enqueue_urgent(&name);
            Outcome::Queued(name)
        }
        Action::Next => Outcome::Dequeued(board.dequeue_urgent()?),
        Action::Search(text) => {
            Outcome::Tasks(board.search(&text).into_iter().cloned().collect())
        }
        Action::List => Outcome::Tasks(board.tasks().list_all()),
        Action::Queue => Outcome::Names(board.urgent().iter().map(str::to_string).collect()),
    };
    Ok(outcome)
}
