//! The changelog pipeline, end to end: capture history, bail out early when
//! there is nothing to summarize, generate, write.

use chlog_core::history::{self, CommandRunner};
use chlog_core::pipeline::{self, TextGenerator};
use std::path::Path;

/// Output filename, written to the current working directory.
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// How a successful run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// The changelog was generated and written.
    Generated,
    /// The repository had no commits: nothing to do, not an error.
    NoCommits,
}

/// Drive the pipeline. The generator is only invoked when the captured log
/// is non-empty; `output` is only touched on full success.
pub async fn execute<R, G>(runner: &R, generator: &G, output: &Path) -> anyhow::Result<RunStatus>
where
    R: CommandRunner,
    G: TextGenerator,
{
    let capture = history::collect(runner)?;

    if let Some(warning) = &capture.warning {
        eprintln!("Git log stderr: {warning}");
    }

    if capture.log.is_empty() {
        println!("No git commits to generate a changelog from.");
        return Ok(RunStatus::NoCommits);
    }

    println!("Generating changelog with Gemini...");
    pipeline::generate_and_write(generator, &capture.log, output).await?;

    println!("{CHANGELOG_FILE} generated successfully.");
    Ok(RunStatus::Generated)
}
