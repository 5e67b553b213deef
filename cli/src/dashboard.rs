use crate::error::{CliError, Result};
use crate::progress::with_spinner;
use crate::render;
use crate::ui;
use dialoguer::{Input, theme::ColorfulTheme};
use sentiment_client::{
    ClientConfig, RequestOrchestrator, SentimentHttpClient, SessionState,
    config::ensure_config_file_exists, start_session,
};
use std::future::Future;
use std::path::Path;
use tokio::runtime::Runtime;
use tracing::debug;

const REFRESH_COMMAND: &str = ":r";
const QUIT_COMMAND: &str = ":q";

/// How the session snapshot is written out
#[derive(Debug, Clone, Copy)]
pub struct OutputMode {
    pub json: bool,
}

impl OutputMode {
    fn show(&self, state: &SessionState) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(state)?);
        } else {
            render::print_dashboard(state);
        }
        Ok(())
    }
}

fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;
    Ok(rt.block_on(future))
}

/// Write the default configuration file
pub fn init(config_path: &str, force: bool) -> Result<()> {
    ui::section_header("Sentiment Dashboard Configuration Setup");
    let written = ensure_config_file_exists(config_path, force)
        .map_err(|e| CliError::from(e).with_context("Failed to create configuration file"))?;

    if written {
        ui::success_message(&format!("Configuration written to {}", config_path));
        ui::info_message("Edit base_url to point at your scoring service");
    } else {
        ui::warning_message(&format!(
            "{} already exists, use --force to overwrite it",
            Path::new(config_path).display()
        ));
    }
    Ok(())
}

/// Submit one text, then show the refreshed session
pub fn analyze(config: ClientConfig, text: String, output: OutputMode) -> Result<()> {
    block_on(async move {
        let orchestrator = start_session(config).await?;
        let outcome = with_spinner("Analyzing...", !output.json, orchestrator.submit(&text)).await;

        match outcome {
            Ok(result) => {
                debug!(sentiment = %result.sentiment.as_str(), "analysis complete");
                output.show(&orchestrator.state())
            }
            Err(description) => {
                if output.json {
                    output.show(&orchestrator.state())?;
                }
                Err(CliError::Analysis(description))
            }
        }
    })?
}

/// Fetch and show the history list with its distribution
pub fn history(config: ClientConfig, output: OutputMode) -> Result<()> {
    block_on(async move {
        let orchestrator = RequestOrchestrator::connect(config)?;
        let fetched = with_spinner(
            "Loading history...",
            !output.json,
            orchestrator.refresh_history(),
        )
        .await;

        match fetched {
            Ok(_) => output.show(&orchestrator.state()),
            Err(description) => Err(CliError::Analysis(description)),
        }
    })?
}

/// Interactive loop: type text to analyze, `:r` to refresh, `:q` to quit
pub fn interactive(config: ClientConfig, output: OutputMode) -> Result<()> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    let orchestrator = rt.block_on(with_spinner(
        "Connecting...",
        !output.json,
        start_session(config),
    ))?;
    output.show(&orchestrator.state())?;
    ui::info_message(&format!(
        "Type text to analyze, {} to refresh history, {} to quit",
        REFRESH_COMMAND, QUIT_COMMAND
    ));

    let mut buffer = String::new();
    loop {
        let line: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Text")
            .with_initial_text(buffer.clone())
            .allow_empty(true)
            .interact_text()?;

        match line.trim() {
            QUIT_COMMAND => break,
            REFRESH_COMMAND => {
                refresh(&rt, &orchestrator, output)?;
            }
            _ => {
                buffer = submit(&rt, &orchestrator, &line, output)?;
            }
        }
    }

    Ok(())
}

/// Submit and redraw; returns what should stay in the input buffer
fn submit(
    rt: &Runtime,
    orchestrator: &RequestOrchestrator<SentimentHttpClient>,
    line: &str,
    output: OutputMode,
) -> Result<String> {
    let outcome = rt.block_on(with_spinner(
        "Analyzing...",
        !output.json,
        orchestrator.submit(line),
    ));
    output.show(&orchestrator.state())?;

    // Input survives a failed submission so it can be edited and retried
    Ok(match outcome {
        Ok(_) => String::new(),
        Err(_) => line.to_string(),
    })
}

fn refresh(
    rt: &Runtime,
    orchestrator: &RequestOrchestrator<SentimentHttpClient>,
    output: OutputMode,
) -> Result<()> {
    let _ = rt.block_on(with_spinner(
        "Refreshing history...",
        !output.json,
        orchestrator.refresh_history(),
    ));
    output.show(&orchestrator.state())
}
