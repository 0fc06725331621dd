#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Base holding the Form 470 table.
pub const BASE: &str = "app742LUED30ISmmF";

/// The Form 470 table id.
pub const TABLE: &str = "tblPRqxmCUOo09XCP";

/// Path of the Form 470 table on the API.
pub const TABLE_PATH: &str = "/v0/app742LUED30ISmmF/tblPRqxmCUOo09XCP";

/// Get a live API key from the environment.
/// Returns None if not set, causing live tests to be skipped.
pub fn get_test_api_key() -> Option<String> {
    std::env::var("AIRTAB_TEST_API_KEY").ok()
}

/// A CLI command isolated from the user's config and environment.
pub fn cli(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_airtab"));
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("AIRTABLE_API_KEY");
    cmd.env_remove("AIRTABLE_BASE_ID");
    cmd.env_remove("AIRTABLE_API_URL");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run the CLI with a custom HOME directory for isolated config storage.
pub fn run_cli(args: &[&str], home: &Path) -> Output {
    cli(home)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub fn run_cli_success(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub fn run_cli_failure(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Count JSON lines (records), skipping messages.
pub fn json_lines(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .filter(|l| l.starts_with('{'))
        .map(|l| serde_json::from_str(l).expect("Invalid JSON line"))
        .collect()
}
