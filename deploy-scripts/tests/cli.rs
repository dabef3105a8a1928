//! Tests of the deploy binary's exit status and output streams

use std::{env, fs, path::PathBuf, process::Command};

use rand::{thread_rng, Rng};

/// An empty scratch directory, removed on drop
struct EmptyDir(PathBuf);

impl EmptyDir {
    fn new() -> Self {
        let dir = env::temp_dir().join(format!("deploy-scripts-{:x}", thread_rng().gen::<u64>()));
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }
}

impl Drop for EmptyDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

#[test]
fn test_failed_deploy_exits_with_error() {
    let dir = EmptyDir::new();

    let output = Command::new(env!("CARGO_BIN_EXE_deploy-scripts"))
        .arg("--artifacts-dir")
        .arg(&dir.0)
        .arg("bridge")
        .env_remove("RUST_LOG")
        .env_remove("PKEY")
        .env_remove("RPC_URL")
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.is_empty(), "unexpected stdout: {stdout}");
    assert!(!stdout.contains("deployed to"));
    assert!(stderr.contains("UnknownContract"), "unexpected stderr: {stderr}");
}

#[test]
fn test_unknown_command_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_deploy-scripts"))
        .arg("token-sale")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
