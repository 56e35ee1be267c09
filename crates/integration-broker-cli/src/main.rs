// crates/integration-broker-cli/src/main.rs
// ============================================================================
// Module: Integration Broker CLI Entry Point
// Description: Command dispatcher for broker runs, selection, and config checks.
// Purpose: Drive the integration broker from a TOML catalog.
// Dependencies: clap, integration-broker, integration-broker-config, thiserror.
// ============================================================================

//! ## Overview
//! The CLI loads a [`BrokerConfig`], wires the configured knowledge base,
//! logger, and publisher into an [`IntegrationBroker`], and executes one
//! command. Log records go to stderr as JSON lines; events and results go to
//! stdout.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use integration_broker::CallbackPublisher;
use integration_broker::IntegrationBroker;
use integration_broker::IntegrationBrokerBuilder;
use integration_broker::JsonLineLog;
use integration_broker::LogPublisher;
use integration_broker::RunOutcome;
use integration_broker_config::BrokerConfig;
use integration_broker_config::PublisherKind;
use integration_broker_core::ApiId;
use integration_broker_core::BrokerLog;
use integration_broker_core::EventKind;
use integration_broker_core::PublishError;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "integration-broker", version, disable_help_subcommand = true)]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one detection, selection, and integration pass.
    Run(RunCommand),
    /// Select the best API from explicit candidates.
    Select(SelectCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for `run`.
#[derive(Args, Debug)]
struct RunCommand {
    /// Config file path (defaults to `INTEGRATION_BROKER_CONFIG`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `select`.
#[derive(Args, Debug)]
struct SelectCommand {
    /// Config file path (defaults to `INTEGRATION_BROKER_CONFIG`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Candidate API identifiers, in preference order.
    #[arg(value_name = "CANDIDATE", required = true)]
    candidates: Vec<String>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Load and validate a config file.
    Validate(ConfigValidateCommand),
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Config file path (defaults to `INTEGRATION_BROKER_CONFIG`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`].
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(command) => command_run(&command),
        Commands::Select(command) => command_select(&command),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

// ============================================================================
// SECTION: Broker Commands
// ============================================================================

/// Executes the `run` command.
fn command_run(command: &RunCommand) -> CliResult<ExitCode> {
    let outcome = execute_run(command)?;
    write_stdout_line(outcome.as_str())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::from(run_exit_status(&outcome)))
}

/// Runs one broker pass from the command's config.
fn execute_run(command: &RunCommand) -> CliResult<RunOutcome> {
    let config = load_config(command.config.as_deref())?;
    let broker = build_broker(&config)?;
    Ok(broker.run())
}

/// Maps a run outcome to the process exit status.
const fn run_exit_status(outcome: &RunOutcome) -> u8 {
    if outcome.is_success() { 0 } else { 1 }
}

/// Executes the `select` command.
fn command_select(command: &SelectCommand) -> CliResult<ExitCode> {
    let selected = execute_select(command)?;
    write_stdout_line(selected.as_str())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Selects among the command's candidates using the configured catalog.
fn execute_select(command: &SelectCommand) -> CliResult<ApiId> {
    let config = load_config(command.config.as_deref())?;
    let broker = build_broker(&config)?;
    let candidates = parse_candidates(&command.candidates)?;
    broker.select_optimal_api(&candidates).map_err(|err| CliError::new(err.to_string()))
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = load_config(command.config.as_deref())?;
    write_stdout_line("config valid").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Broker Assembly
// ============================================================================

/// Loads and validates the config file.
fn load_config(path: Option<&Path>) -> CliResult<BrokerConfig> {
    BrokerConfig::load(path).map_err(|err| CliError::new(format!("failed to load config: {err}")))
}

/// Builds the broker for CLI execution with stderr logs and the configured publisher.
fn build_broker(config: &BrokerConfig) -> CliResult<IntegrationBroker> {
    let log: Arc<dyn BrokerLog> =
        Arc::new(JsonLineLog::new(std::io::stderr()).with_min_level(config.logging.level));
    let builder = broker_builder(config, log);
    let builder = match config.events.publisher {
        PublisherKind::Log => builder.publisher(LogPublisher::new(std::io::stdout())),
        PublisherKind::None => {
            builder.publisher(CallbackPublisher::with_publisher(discard_event, "none"))
        }
    };
    builder.build().map_err(|err| CliError::new(err.to_string()))
}

/// Returns a builder carrying the config's knowledge base, needs, and logger.
fn broker_builder(config: &BrokerConfig, log: Arc<dyn BrokerLog>) -> IntegrationBrokerBuilder {
    IntegrationBroker::builder()
        .knowledge(Arc::new(config.knowledge_base()))
        .needs(config.broker.needs.iter().cloned())
        .log(log)
}

/// Publisher handler that drops every event.
const fn discard_event(_event: EventKind, _payload: &str) -> Result<(), PublishError> {
    Ok(())
}

/// Converts raw candidate arguments into API identifiers, verbatim.
fn parse_candidates(raw: &[String]) -> CliResult<Vec<ApiId>> {
    raw.iter()
        .map(|candidate| {
            if candidate.trim().is_empty() {
                Err(CliError::new("candidate must not be empty".to_string()))
            } else {
                Ok(ApiId::new(candidate.as_str()))
            }
        })
        .collect()
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
