//! Generation stage: prompt → remote model → `CHANGELOG.md`.
//!
//! The remote call sits behind [`TextGenerator`] so the stage is testable
//! without a network. The returned text is written byte-for-byte, with no
//! wrapping and no post-processing.

use crate::error::Result;
use crate::history::CommitLog;
use crate::io;
use crate::prompt;
use std::future::Future;
use std::path::Path;
use thiserror::Error;

/// Failures a [`TextGenerator`] can report. Both are terminal; they differ
/// only in the diagnostic shown to the user.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to generate changelog with Gemini: {0}")]
    Transport(String),

    #[error("Gemini API did not return valid content\nfull API response: {0}")]
    EmptyResponse(String),
}

/// Remote text-generation boundary: one prompt in, completion text out.
pub trait TextGenerator {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = std::result::Result<String, GenerateError>> + Send;
}

/// Build the prompt for `log`, run it through `generator`, and persist the
/// completion to `output`. The output file is untouched on any failure.
pub async fn generate_and_write<G: TextGenerator>(
    generator: &G,
    log: &CommitLog,
    output: &Path,
) -> Result<()> {
    let prompt = prompt::build(log);
    let text = generator.generate(&prompt).await?;
    io::atomic_write(output, text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChlogError;
    use tempfile::TempDir;

    struct FixedGenerator(&'static str);

    impl TextGenerator for FixedGenerator {
        fn generate(
            &self,
            _prompt: &str,
        ) -> impl Future<Output = std::result::Result<String, GenerateError>> + Send {
            let text = self.0.to_string();
            async move { Ok(text) }
        }
    }

    struct EmptyResponseGenerator;

    impl TextGenerator for EmptyResponseGenerator {
        fn generate(
            &self,
            _prompt: &str,
        ) -> impl Future<Output = std::result::Result<String, GenerateError>> + Send {
            async move { Err(GenerateError::EmptyResponse("{\"candidates\":[]}".into())) }
        }
    }

    #[tokio::test]
    async fn writes_completion_byte_for_byte() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("CHANGELOG.md");
        let log = CommitLog::new("a1b2c3d - Add X (Ada)");
        generate_and_write(&FixedGenerator("## Features\n- Added X"), &log, &out)
            .await
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "## Features\n- Added X"
        );
    }

    #[tokio::test]
    async fn generation_failure_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("CHANGELOG.md");
        let log = CommitLog::new("a1b2c3d - Add X (Ada)");
        let err = generate_and_write(&EmptyResponseGenerator, &log, &out)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ChlogError::Generate(GenerateError::EmptyResponse(_))
        ));
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn generation_failure_preserves_existing_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("CHANGELOG.md");
        std::fs::write(&out, "previous changelog").unwrap();
        let log = CommitLog::new("a1b2c3d - Add X (Ada)");
        let result = generate_and_write(&EmptyResponseGenerator, &log, &out).await;
        assert!(result.is_err());
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "previous changelog"
        );
    }
}
