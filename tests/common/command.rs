use assert_cmd::Command;
use std::path::Path;

pub fn run_osaconfig_command(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("osaconfig").expect("Failed to find osaconfig binary");
    cmd.env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Runs a checkout against a local upstream with clones placed under `base_dir`.
pub fn osaconfig_checkout(url: &str, base_dir: &Path, commit_sha: &str) -> Command {
    let base_dir = base_dir.display().to_string();
    run_osaconfig_command(&[commit_sha, "--osaurl", url, "--base-dir", &base_dir])
}
