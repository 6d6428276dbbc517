//! Error scenario integration tests

use std::process::Command;

use tempfile::TempDir;

fn site_bin(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_smoldb-site"));
    cmd.env("SMOLDB_SITE_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn config_get_unknown_key() {
    let dir = TempDir::new().unwrap();
    let output = site_bin(&dir)
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown key"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_theme() {
    let dir = TempDir::new().unwrap();
    let output = site_bin(&dir)
        .args(["config", "set", "theme", "neon"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("theme"), "got: {}", stderr);
}

#[test]
fn config_set_zero_dwell() {
    let dir = TempDir::new().unwrap();
    let output = site_bin(&dir)
        .args(["config", "set", "dwell_ms", "0"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("dwell"), "got: {}", stderr);
}

#[test]
fn config_init_twice_fails() {
    let dir = TempDir::new().unwrap();
    let first = site_bin(&dir).args(["config", "init"]).output().unwrap();
    assert!(first.status.success());

    let second = site_bin(&dir).args(["config", "init"]).output().unwrap();
    assert!(!second.status.success());
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("already exists"), "got: {}", stderr);
}

#[test]
fn invalid_dwell_flag_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let output = site_bin(&dir)
        .args(["show", "--dwell", "soon"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid dwell time"), "got: {}", stderr);
}

#[test]
fn invalid_theme_flag_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = site_bin(&dir)
        .args(["--theme", "neon"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn unparseable_config_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "dwell_ms = = 1").unwrap();

    let output = site_bin(&dir).arg("show").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("smolDB"));
}

#[cfg(unix)]
#[test]
fn copy_without_clipboard_tool_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let empty_path = TempDir::new().unwrap();

    let set = site_bin(&dir)
        .args(["config", "set", "clipboard_tool", "wl-copy"])
        .output()
        .unwrap();
    assert!(set.status.success());

    let output = site_bin(&dir)
        .args(["copy", "--no-notify"])
        .env("PATH", empty_path.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("wl-copy not found"),
        "Expected clipboard error, got: {}",
        stderr
    );
}

#[cfg(unix)]
#[test]
fn interactive_exits_on_ctrl_c_while_waiting_for_input() {
    use std::process::Stdio;
    use std::time::{Duration, Instant};

    let dir = TempDir::new().unwrap();
    let mut child = site_bin(&dir)
        .args(["interactive", "--no-notify"])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to start interactive session");

    // Keep stdin open so the session is blocked on a read
    let _stdin = child.stdin.take();
    std::thread::sleep(Duration::from_millis(1000));

    let killed = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("Failed to send SIGINT");
    assert!(killed.success());

    let deadline = Instant::now() + Duration::from_secs(5);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break Some(status);
        }
        if Instant::now() >= deadline {
            break None;
        }
        std::thread::sleep(Duration::from_millis(50));
    };

    if status.is_none() {
        let _ = child.kill();
    }
    let status = status.expect("interactive session still running after Ctrl-C");
    assert!(status.success(), "unexpected exit: {:?}", status);
}
