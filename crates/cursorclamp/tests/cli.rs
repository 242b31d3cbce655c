use std::process::Command;

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cursorclamp"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute cursorclamp");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mouse cursor"));
    assert!(stdout.contains("lock"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cursorclamp"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute cursorclamp");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cursorclamp"));
}

#[test]
fn lock_rejects_malformed_handle() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cursorclamp"));
    cmd.args(["lock", "not-a-handle"]);

    // Act
    let output = cmd.output().expect("failed to execute cursorclamp");

    // Assert
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a window handle"));
}

#[test]
fn unknown_subcommand_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_cursorclamp"))
        .arg("frobnicate")
        .output()
        .expect("failed to execute cursorclamp");

    assert!(!output.status.success());
}

#[cfg(not(windows))]
#[test]
fn list_reports_unsupported_platform() {
    let output = Command::new(env!("CARGO_BIN_EXE_cursorclamp"))
        .arg("list")
        .output()
        .expect("failed to execute cursorclamp");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("only supports Windows"));
}
