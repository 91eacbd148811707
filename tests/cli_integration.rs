//! Integration tests for the `tl` CLI.
//!
//! Each test points the config directory at a temp dir, runs `tl` as a
//! subprocess with a script on stdin or in a file, and checks stdout/stderr.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Get the path to the built `tl` binary.
fn tl_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("tl");
    path
}

/// Run `tl` with `stdin` piped in, returning (stdout, stderr, success).
fn run_tl(config_home: &Path, args: &[&str], stdin: &str) -> (String, String, bool) {
    let mut child = Command::new(tl_bin())
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run tl");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run a script from stdin expecting success, return stdout.
fn run_script(script: &str) -> String {
    let home = TempDir::new().unwrap();
    let (stdout, stderr, success) = run_tl(home.path(), &["run"], script);
    if !success {
        panic!("tl run failed:\nstdout: {}\nstderr: {}", stdout, stderr);
    }
    stdout
}

// ---------------------------------------------------------------------------
// tl run
// ---------------------------------------------------------------------------

#[test]
fn test_add_and_sort() {
    let out = run_script(
        "\
add Buy milk | 2024-01-02 10:00:00 | Low
add Pay rent | 2024-01-01 09:00:00 | High
sort
list
",
    );
    assert_eq!(
        out,
        "\
added: Buy milk
added: Pay rent
sorted 2 tasks
Pay rent | 2024-01-01 09:00:00 | High | Pending
Buy milk | 2024-01-02 10:00:00 | Low | Pending
"
    );
}

#[test]
fn test_delete_then_undo_appends() {
    let out = run_script(
        "\
add A | 2024-01-01 00:00:00
add B | 2024-01-02 00:00:00
delete A
undo
list
",
    );
    let rows: Vec<&str> = out.lines().rev().take(2).collect();
    assert_eq!(
        rows,
        vec![
            "A | 2024-01-01 00:00:00 | Low | Pending",
            "B | 2024-01-02 00:00:00 | Low | Pending",
        ]
    );
}

#[test]
fn test_missing_task_reports_and_continues() {
    let home = TempDir::new().unwrap();
    let (stdout, stderr, success) = run_tl(
        home.path(),
        &["run"],
        "add A | 2024-01-01 00:00:00\ndelete Ghost\nlist\n",
    );
    assert!(success);
    assert_eq!(stderr, "line 2: error: task not found: Ghost\n");
    assert!(stdout.ends_with("A | 2024-01-01 00:00:00 | Low | Pending\n"));
}

#[test]
fn test_failed_line_is_reported_once_without_color() {
    let home = TempDir::new().unwrap();
    let (stdout, stderr, success) = run_tl(home.path(), &["run"], "delete Ghost\n");
    assert!(success);
    assert_eq!(stdout, "");
    assert_eq!(stderr, "line 1: error: task not found: Ghost\n");
}

#[test]
fn test_urgent_queue_fifo() {
    let home = TempDir::new().unwrap();
    let (stdout, stderr, success) = run_tl(
        home.path(),
        &["run"],
        "urgent X\nurgent Y\nqueue\nnext\nnext\nnext\n",
    );
    assert!(success);
    assert_eq!(
        stdout,
        "\
queued urgent: X
queued urgent: Y
X
Y
Processing urgent task: X
Processing urgent task: Y
"
    );
    assert_eq!(stderr, "line 6: error: urgent queue is empty\n");
}

#[test]
fn test_search_is_case_insensitive() {
    let out = run_script(
        "\
add Buy milk | 2024-01-02 10:00:00
add Pay rent | 2024-01-01 09:00:00
add buy bread | 2024-01-03 10:00:00
search BUY
",
    );
    let found: Vec<&str> = out.lines().skip(3).collect();
    assert_eq!(
        found,
        vec![
            "Buy milk | 2024-01-02 10:00:00 | Low | Pending",
            "buy bread | 2024-01-03 10:00:00 | Low | Pending",
        ]
    );
}

#[test]
fn test_bad_due_date_is_rejected_at_add() {
    let home = TempDir::new().unwrap();
    let (stdout, stderr, success) = run_tl(
        home.path(),
        &["run"],
        "add A | 2024-01-02 00:00:00\nadd B | tomorrow\nsort\n",
    );
    assert!(success);
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.starts_with("line 2: error: invalid due date \"tomorrow\""));
    assert!(!stderr.contains('\x1b'));
    assert!(stdout.contains("sorted 1 task\n"));
}

#[test]
fn test_script_file_argument() {
    let home = TempDir::new().unwrap();
    let script = home.path().join("tasks.txt");
    fs::write(&script, "# setup\nadd A | 2024-01-01 00:00:00\n\ncomplete A\nlist\n").unwrap();
    let (stdout, _, success) = run_tl(home.path(), &["run", script.to_str().unwrap()], "");
    assert!(success);
    assert!(stdout.ends_with("A | 2024-01-01 00:00:00 | Low | Completed\n"));
}

#[test]
fn test_unreadable_script_file() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("nope.txt");
    let (_, stderr, success) = run_tl(home.path(), &["run", missing.to_str().unwrap()], "");
    assert!(!success);
    assert!(stderr.starts_with("error: could not read"));
}

#[test]
fn test_strict_stops_at_first_error() {
    let home = TempDir::new().unwrap();
    let (stdout, stderr, success) = run_tl(
        home.path(),
        &["run", "--strict"],
        "undo\nadd A | 2024-01-01 00:00:00\n",
    );
    assert!(!success);
    assert_eq!(
        stderr,
        "line 1: error: undo stack is empty\nerror: stopped at line 1\n"
    );
    assert_eq!(stdout, "");
}

#[test]
fn test_json_output() {
    let home = TempDir::new().unwrap();
    let (stdout, _, success) = run_tl(
        home.path(),
        &["run", "--json"],
        "add A | 2024-01-01 00:00:00 | Medium\nbogus\nlist\n",
    );
    assert!(success);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);

    assert_eq!(lines[0]["action"], "add");
    assert_eq!(lines[0]["ok"], true);
    assert_eq!(lines[0]["name"], "A");

    assert_eq!(lines[1]["line"], 2);
    assert_eq!(lines[1]["ok"], false);
    assert_eq!(lines[1]["error"], "unknown command: bogus");

    let task = &lines[2]["tasks"][0];
    assert_eq!(task["name"], "A");
    assert_eq!(task["priority"], "Medium");
    assert_eq!(task["status"], "Pending");
}

#[test]
fn test_default_priority_from_config() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("tasklist");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[defaults]\npriority = \"High\"\n").unwrap();

    let (stdout, _, success) =
        run_tl(home.path(), &["run"], "add A | 2024-01-01 00:00:00\nlist\n");
    assert!(success);
    assert!(stdout.contains("A | 2024-01-01 00:00:00 | High | Pending"));
}

// ---------------------------------------------------------------------------
// tl config
// ---------------------------------------------------------------------------

#[test]
fn test_config_path_uses_xdg() {
    let home = TempDir::new().unwrap();
    let (stdout, _, success) = run_tl(home.path(), &["config", "path"], "");
    assert!(success);
    let expected = home.path().join("tasklist").join("config.toml");
    assert_eq!(stdout.trim_end(), expected.display().to_string());
}

#[test]
fn test_config_set_preserves_comments() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");
    fs::write(&path, "# my settings\n[ui]\nshow_key_hints = true\n").unwrap();
    let config_arg = path.to_str().unwrap();

    let (stdout, _, success) = run_tl(
        home.path(),
        &["--config", config_arg, "config", "set", "defaults.priority", "Medium"],
        "",
    );
    assert!(success);
    assert_eq!(stdout, "defaults.priority = Medium\n");

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("# my settings\n"));
    assert!(text.contains("priority = \"Medium\""));

    let (shown, _, _) = run_tl(home.path(), &["--config", config_arg, "config", "show"], "");
    assert!(shown.contains("priority = \"Medium\""));
    assert!(shown.contains("show_key_hints = true"));
}

#[test]
fn test_config_set_rejects_bad_value() {
    let home = TempDir::new().unwrap();
    let (_, stderr, success) = run_tl(
        home.path(),
        &["config", "set", "defaults.priority", "Someday"],
        "",
    );
    assert!(!success);
    assert!(stderr.starts_with("error: invalid value for defaults.priority"));
    assert!(!home.path().join("tasklist").join("config.toml").exists());
}
