//! CLI integration tests
//!
//! These tests run the built binary and check:
//! - Argument handling and usage errors
//! - The listing table on stdout
//! - Diagnostics and exit codes

use std::fs;
use std::os::unix::fs::symlink;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const HEADER: &str = "Type&Perms Links Owner          Group            Size Modified     Name";
const SEPARATOR: &str = "---------- ----- -------------- ------------ -------- ------------ --------";

fn dirlist() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dirlist"));
    cmd.env_remove("RUST_LOG").env_remove("DIRLIST_LOG_LEVEL");
    cmd
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    dirlist()
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute dirlist")
}

/// Directory with a regular file, a subdirectory and a symlink to the file
fn create_sample_dir(dir: &TempDir) {
    fs::write(dir.path().join("file.txt"), "hello world").expect("Failed to write file");
    fs::create_dir(dir.path().join("subdir")).expect("Failed to create subdir");
    symlink("file.txt", dir.path().join("link")).expect("Failed to create symlink");
}

fn data_rows(stdout: &str) -> Vec<&str> {
    stdout.lines().skip(2).collect()
}

#[test]
fn test_cli_help() {
    let output = dirlist().arg("--help").output().expect("Failed to execute dirlist");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dirlist"));
    assert!(stdout.contains("DIRECTORY"));
}

#[test]
fn test_cli_version() {
    let output = dirlist().arg("--version").output().expect("Failed to execute dirlist");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dirlist"));
}

#[test]
fn test_list_sample_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    create_sample_dir(&temp_dir);

    let target = temp_dir.path().to_str().expect("Non UTF-8 temp path");
    let output = run_in(Path::new("/"), &[target]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[1], SEPARATOR);

    let rows = data_rows(&stdout);
    assert_eq!(rows.len(), 3, "unexpected output:\n{}", stdout);

    let link_rows: Vec<&&str> = rows.iter().filter(|r| r.starts_with('l')).collect();
    assert_eq!(link_rows.len(), 1);
    assert!(link_rows[0].ends_with(" link -> file.txt"));

    let subdir_row = rows
        .iter()
        .find(|r| r.ends_with(" subdir"))
        .expect("No row for subdir");
    assert!(subdir_row.starts_with('d'));

    let file_row = rows
        .iter()
        .find(|r| r.starts_with('-'))
        .expect("No row for file.txt");
    assert!(file_row.ends_with(" file.txt"));
    assert!(file_row.contains(" 11 "));

    for row in &rows {
        assert!(!row.ends_with(" .") && !row.ends_with(" .."));
    }
}

#[test]
fn test_defaults_to_current_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("only.txt"), "").expect("Failed to write file");

    let output = run_in(temp_dir.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows = data_rows(&stdout);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].ends_with(" only.txt"));
}

#[test]
fn test_empty_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_in(temp_dir.path(), &["."]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, format!("{}\n{}\n", HEADER, SEPARATOR));
}

#[test]
fn test_two_arguments_is_usage_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_in(temp_dir.path(), &[".", "."]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
    assert!(stderr.contains("[DIRECTORY]"));
}

// Failing to open the directory is reported as a failed run (exit status 1),
// not as an empty successful listing.
#[test]
fn test_nonexistent_path() {
    let output = run_in(Path::new("/"), &["/nonexistent/dirlist/path/12345"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error opening directory"));
    assert!(stderr.contains("No such file or directory"));
    assert!(stderr.contains("Could not open: /nonexistent/dirlist/path/12345"));
}

#[test]
fn test_file_instead_of_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("file.txt"), "content").expect("Failed to write file");

    let output = run_in(temp_dir.path(), &["file.txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error opening directory"));
    assert!(stderr.contains("Could not open: file.txt"));
}

#[test]
fn test_broken_pipe_reports_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    // Far more output than a pipe buffer holds, so writes outlive the reader
    for i in 0..3000 {
        let name = format!("entry-with-a-reasonably-long-name-{:05}", i);
        fs::write(temp_dir.path().join(name), "").expect("Failed to write file");
    }

    let mut child = dirlist()
        .arg(temp_dir.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn dirlist");
    drop(child.stdout.take());

    let output = child.wait_with_output().expect("Failed to wait for dirlist");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to write listing"));
    assert!(stderr.contains("Broken pipe"));
}
