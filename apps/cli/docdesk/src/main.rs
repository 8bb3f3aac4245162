use docdesk::cli::Cli;
use docdesk::commands::execute;
use docdesk::error::DocdeskError;
use docdesk::logger::initialize as LoggerInitialize;
use docdesk::router::RouteTable;

use client_core::config::default_config_dir;
use client_core::{ClientConfig, DocumentClient};

use std::process::ExitCode;

use clap::Parser;
use log::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggerInitialize(cli.log_dir.as_deref(), cli.verbose) {
        eprintln!("{e}");
    }

    match run(&cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("Command failed: {e:?}");
            if cli.json
                && let Ok(json) = serde_json::to_string(&e)
            {
                eprintln!("{json}");
            } else {
                eprintln!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<String, DocdeskError> {
    let config_dir = default_config_dir();
    let config = ClientConfig::resolve(cli.base_url.as_deref(), config_dir.as_deref())?;

    debug!("Document service at {}", config.base_url);

    let client = DocumentClient::new(&config)?;
    let routes = RouteTable::default();

    execute(&cli.command, &client, &routes, cli.json).await
}
