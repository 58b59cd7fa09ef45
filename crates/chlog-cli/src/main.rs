mod run;

use anyhow::Context;
use chlog_core::credentials;
use chlog_core::history::SystemCommandRunner;
use chlog_core::pipeline::{GenerateError, TextGenerator};
use clap::Parser;
use gemini_agent::{GeminiClient, GeminiError};
use std::future::Future;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "chlog",
    about = "Generate CHANGELOG.md from the repository's git history with Gemini",
    version
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    if let Err(e) = try_main() {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let api_key = credentials::resolve()?;
    let generator = GeminiGenerator::new(GeminiClient::new(api_key));

    let rt = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    rt.block_on(run::execute(
        &SystemCommandRunner,
        &generator,
        Path::new(run::CHANGELOG_FILE),
    ))?;
    Ok(())
}

/// Adapts [`GeminiClient`] to the pipeline's [`TextGenerator`] seam.
struct GeminiGenerator {
    client: GeminiClient,
}

impl GeminiGenerator {
    fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

impl TextGenerator for GeminiGenerator {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, GenerateError>> + Send {
        async move {
            self.client.generate(prompt).await.map_err(|e| match e {
                GeminiError::EmptyResponse { response } => GenerateError::EmptyResponse(response),
                other => GenerateError::Transport(other.to_string()),
            })
        }
    }
}
