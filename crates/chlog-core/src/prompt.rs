//! Prompt assembly for the changelog request.

use crate::history::CommitLog;

/// Build the generation prompt with the full commit log embedded verbatim
/// between `---` fences.
pub fn build(log: &CommitLog) -> String {
    format!(
        "Based on the following git log, create a changelog in Markdown format.\n\
         The changelog should be suitable for a CHANGELOG.md file.\n\
         Group changes by type (e.g., \"Features\", \"Bug Fixes\", \"Refactoring\", \"Documentation\").\n\
         Each item should be a bullet point with the commit message.\n\
         \n\
         Git Log:\n\
         ---\n\
         {}\n\
         ---\n",
        log.as_str()
    )
}
