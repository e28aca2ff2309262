use std::fs::{self, OpenOptions};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use clap::Parser;
use saheli::app::App;
use saheli::config::{Cli, log_file_path};
use saheli::infra::agent::{AgentClient, AgentSessionId};
use saheli::infra::http::HttpAgentTransport;
use saheli::runtime;
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&cli) {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Error: {err}");
        }

        return ExitCode::FAILURE;
    }

    if let Err(err) = run(&cli) {
        error!("{err}");

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Sends log output to `~/.saheli/saheli.log`; the terminal belongs to the
/// UI.
fn init_logging(cli: &Cli) -> Result<(), String> {
    let log_path = log_file_path().ok_or_else(|| "Home directory not found".to_string())?;
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).map_err(|err| {
            format!("Failed to create log directory {}: {err}", log_dir.display())
        })?;
    }
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|err| format!("Failed to open log file {}: {err}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(cli.log_level)
        .with_writer(Mutex::new(log_file))
        .try_init()
        .map_err(|err| format!("Failed to initialize logging: {err}"))
}

fn run(cli: &Cli) -> Result<(), String> {
    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to start async runtime: {err}"))?;
    let _runtime_guard = tokio_runtime.enter();

    let transport = HttpAgentTransport::new(cli.agent_url.clone(), cli.api_key.clone(), cli.timeout())
        .map_err(|err| err.to_string())?;
    let session_id = AgentSessionId::generate();
    info!(session_id = %session_id, agent_url = %cli.agent_url, "starting saheli");

    let agent_client = AgentClient::new(Arc::new(transport), cli.agent_directory(), session_id);
    let mut app = App::new(agent_client);

    runtime::run(&mut app).map_err(|err| format!("Terminal error: {err}"))
}
