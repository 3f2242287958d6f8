use serde::Serialize;
use std::process::Command;

/// Build metadata printed by the `report` subcommand.
#[derive(Debug, Serialize)]
pub struct Report {
    pub cli_version: &'static str,
    pub planar_version: &'static str,
    pub code_rev: String,
}

impl Report {
    pub fn collect() -> Self {
        Self {
            cli_version: env!("CARGO_PKG_VERSION"),
            planar_version: planar::VERSION,
            code_rev: current_git_rev(),
        }
    }
}

/// Commit hash from `GIT_COMMIT` (build time, then runtime), else `git rev-parse HEAD`,
/// else `"unknown"`.
pub fn current_git_rev() -> String {
    let from_build = option_env!("GIT_COMMIT").filter(|s| !s.is_empty());
    if let Some(rev) = from_build {
        return rev.to_string();
    }
    if let Some(rev) = std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
