//! Exit-status and diagnostic contract of the binary.

use std::process::Command;

#[test]
fn missing_document_prints_error_and_exits_with_status_1() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-rubric.docx");

    let output = Command::new(env!("CARGO_BIN_EXE_rubrica"))
        .arg(&path)
        .output()
        .expect("failed to run rubrica binary");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ERROR"), "diagnostic missing: {}", stdout);
    // No section headers may appear when the document fails to load
    assert!(!stdout.contains("PARÁGRAFOS"));
    assert!(!stdout.contains("TABLAS"));
}

#[test]
fn unreadable_package_also_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.docx");
    std::fs::write(&path, b"this is not a zip archive").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_rubrica"))
        .arg(&path)
        .output()
        .expect("failed to run rubrica binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("ERROR"));
}
