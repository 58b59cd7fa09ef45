//! Commit history capture via the `git` subprocess.
//!
//! The log is an opaque blob: one line per commit in git's native order,
//! `<abbrev-hash> - <subject> (<author-name>)`. Nothing here parses or
//! re-orders it; the text goes to the model verbatim.
//!
//! Subprocess invocation sits behind [`CommandRunner`] so tests can substitute
//! a stub without a git binary or a repository.

use crate::error::{ChlogError, Result};
use std::process::{Command, Stdio};

pub const GIT_PROGRAM: &str = "git";
pub const GIT_LOG_ARGS: [&str; 2] = ["log", "--pretty=format:%h - %s (%an)"];

// ---------------------------------------------------------------------------
// CommandRunner
// ---------------------------------------------------------------------------

/// Captured result of one subprocess invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// External-process boundary. The production impl shells out; test doubles
/// return canned [`CommandOutput`] values.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<CommandOutput>;
}

/// Runs the real binary with piped stdout/stderr.
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        })
    }
}

// ---------------------------------------------------------------------------
// CommitLog
// ---------------------------------------------------------------------------

/// The raw `git log` text. Whitespace-only output counts as empty: a fresh
/// repository with no commits produces nothing to summarize.
#[derive(Debug, Clone)]
pub struct CommitLog(String);

impl CommitLog {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// A captured log plus any non-fatal stderr chatter from git.
#[derive(Debug, Clone)]
pub struct HistoryCapture {
    pub log: CommitLog,
    /// Present when git wrote to stderr but still exited successfully.
    pub warning: Option<String>,
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// Run `git log` through `runner` and capture the result.
///
/// A spawn failure or a non-zero exit is fatal. Stderr output on a successful
/// exit is surfaced as a warning in the capture, not an error.
pub fn collect<R: CommandRunner>(runner: &R) -> Result<HistoryCapture> {
    let output = runner
        .run(GIT_PROGRAM, &GIT_LOG_ARGS)
        .map_err(|e| ChlogError::GitLog(format!("failed to run {GIT_PROGRAM}: {e}")))?;

    if !output.success {
        let stderr = output.stderr.trim();
        let detail = if stderr.is_empty() {
            "git log exited with a failure status".to_string()
        } else {
            stderr.to_string()
        };
        return Err(ChlogError::GitLog(detail));
    }

    let warning = {
        let stderr = output.stderr.trim();
        (!stderr.is_empty()).then(|| stderr.to_string())
    };

    Ok(HistoryCapture {
        log: CommitLog::new(output.stdout),
        warning,
    })
}
