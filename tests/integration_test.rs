use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn notes_cmd(data_file: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_notes"));
    cmd.env_remove("NOTES_DATA_FILE")
        .arg("--data-file")
        .arg(data_file);
    cmd
}

fn run(data_file: &Path, args: &[&str]) -> Output {
    notes_cmd(data_file).args(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_list_without_file_is_empty() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("notes.json");

    let output = run(&data, &["list"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No notes found"));
    assert!(!data.exists());

    let output = run(&data, &["list", "--json"]);
    assert!(output.status.success());
    let notes: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(notes, serde_json::json!([]));
}

#[test]
fn test_full_note_workflow() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("notes.json");

    let output = run(&data, &["add", "A", "--content", "x"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Created note 1 - A"));

    let output = run(&data, &["add", "B", "-c", "y", "--json"]);
    assert!(output.status.success());
    let b: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(b["id"], 2);
    assert_eq!(b["content"], "y");

    let output = run(&data, &["delete", "1"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Deleted note 1"));

    let output = run(&data, &["add", "C", "-c", "z", "--json"]);
    let c: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(c["id"], 3);

    let output = run(&data, &["list"]);
    let listing = stdout(&output);
    assert!(!listing.contains(" A\n"));
    assert!(listing.contains("B"));
    assert!(listing.contains("C"));
}

#[test]
fn test_update_title_keeps_content() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("notes.json");

    run(&data, &["add", "Old", "-c", "body"]);

    let output = run(&data, &["update", "1", "--title", "New", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let note: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(note["title"], "New");
    assert_eq!(note["content"], "body");

    let output = run(&data, &["get", "1"]);
    assert!(output.status.success());
    let shown = stdout(&output);
    assert!(shown.contains("Note 1: New"));
    assert!(shown.contains("body"));
}

#[test]
fn test_missing_note_fails() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("notes.json");

    for args in [
        vec!["get", "1"],
        vec!["delete", "1"],
        vec!["update", "1", "--title", "x"],
    ] {
        let output = run(&data, &args);
        assert!(!output.status.success());
        assert!(stderr(&output).contains("Note not found: 1"));
    }
}

#[test]
fn test_blank_title_is_accepted() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("notes.json");

    let output = run(&data, &["add", "  ", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let output = run(&data, &["update", "1", "--title", "", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let note: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(note["title"], "");
}

#[test]
fn test_corrupt_file_is_reported() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("notes.json");
    std::fs::write(&data, "[{\"id\": \"one\"}]").unwrap();

    let output = run(&data, &["list"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("corrupt"));

    // The file is left as it was.
    let raw = std::fs::read_to_string(&data).unwrap();
    assert_eq!(raw, "[{\"id\": \"one\"}]");
}

#[test]
fn test_add_reads_content_from_stdin() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("notes.json");

    let mut child = notes_cmd(&data)
        .args(["add", "Piped", "--stdin", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"line one\nline two\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let note: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(note["content"], "line one\nline two\n");
}

#[test]
fn test_data_file_from_env() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("env_notes.json");

    let output = Command::new(env!("CARGO_BIN_EXE_notes"))
        .env("NOTES_DATA_FILE", &data)
        .args(["add", "From env"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(data.exists());
}

#[test]
fn test_data_file_from_dotenv() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(".env"), "NOTES_DATA_FILE=from_dotenv.json\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_notes"))
        .current_dir(tmp.path())
        .env_remove("NOTES_DATA_FILE")
        .args(["add", "From dotenv"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(tmp.path().join("from_dotenv.json").exists());
    assert!(!tmp.path().join("notes_data.json").exists());
}

#[test]
fn test_reads_file_with_offsetless_timestamps() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("notes.json");
    std::fs::write(
        &data,
        r#"[
  {
    "id": 4,
    "title": "Legacy",
    "content": "kept",
    "created_at": "2024-05-01T10:30:00.123456"
  }
]"#,
    )
    .unwrap();

    let output = run(&data, &["add", "Next", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let note: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(note["id"], 5);

    let output = run(&data, &["get", "4", "--json"]);
    let legacy: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(legacy["content"], "kept");
}
