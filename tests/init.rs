use std::process::Command;

#[test]
fn init_creates_valid_toml() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_gitwho"))
        .arg("init")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "gitwho init failed: {}", String::from_utf8_lossy(&output.stderr));

    let config_path = dir.path().join(".gitwho.toml");
    assert!(config_path.exists(), ".gitwho.toml should exist");

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[report]"));

    // Commented template parses back to the defaults
    let config: gitwho_core::GitwhoConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.report.leaderboard_size, 3);
    assert_eq!(config.report.duplicate_limit, 20);
}

#[test]
fn init_refuses_if_exists() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".gitwho.toml"), "# existing").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_gitwho"))
        .arg("init")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let content = std::fs::read_to_string(dir.path().join(".gitwho.toml")).unwrap();
    assert_eq!(content, "# existing");
}

const CHANGES: &str = r#"{
  "totalCommits": 2,
  "totalFiles": 1,
  "totalLinesTouched": {"new": 5},
  "authorsLines": [
    {"authorName": "alice", "authorMail": "alice@example.com", "linesTouched": {"new": 3}},
    {"authorName": "bob", "authorMail": "bob@example.com", "linesTouched": {"new": 2}}
  ]
}"#;

fn new_liners(dir: &std::path::Path, extra: &[&str]) -> String {
    std::fs::write(dir.join("changes.json"), CHANGES).unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_gitwho"))
        .args(["changes", "--input", "changes.json", "--format", "short"])
        .args(extra)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(output.status.success(), "gitwho changes failed: {}", String::from_utf8_lossy(&output.stderr));
    let text = String::from_utf8(output.stdout).unwrap();
    let start = text.find("Top New Liners\n").unwrap();
    let board = &text[start..];
    board[..board.find("\n\n").unwrap_or(board.len())].to_string()
}

#[test]
fn local_config_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".gitwho.toml"), "[report]\nleaderboard_size = 1\n").unwrap();

    assert_eq!(new_liners(dir.path(), &[]), "Top New Liners\n  alice: 3 (60%)");
}

#[test]
fn config_flag_wins_over_local_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".gitwho.toml"), "[report]\nleaderboard_size = 1\n").unwrap();
    std::fs::write(dir.path().join("team.toml"), "[report]\nleaderboard_size = 2\n").unwrap();

    assert_eq!(
        new_liners(dir.path(), &["--config", "team.toml"]),
        "Top New Liners\n  alice: 3 (60%)\n  bob: 2 (40%)"
    );
}

#[test]
fn missing_config_flag_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".gitwho.toml"), "[report]\nleaderboard_size = 1\n").unwrap();
    std::fs::write(dir.path().join("changes.json"), CHANGES).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_gitwho"))
        .args(["changes", "--input", "changes.json", "--config", "absent.toml"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.toml"));
}
