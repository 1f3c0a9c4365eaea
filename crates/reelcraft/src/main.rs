//! Reelcraft CLI binary.
//!
//! - `reelcraft serve` runs the HTTP API
//! - `reelcraft generate` runs the pipeline once from the command line
//! - `reelcraft platforms` lists supported platforms

use clap::Parser;
use reelcraft::{LogSettings, ReelcraftConfig, init_logging};
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    use cli::{Cli, Commands, GenerateOptions, handle_generate, handle_platforms, handle_serve};

    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match ReelcraftConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e.message());
            return ExitCode::FAILURE;
        }
    };

    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    let settings = LogSettings::new(level).with_json(cli.json_logs || config.logging.json);
    if let Err(e) = init_logging(&settings) {
        eprintln!("Error: failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Commands::Serve { host, port } => {
            handle_serve(&config, host, port).await.map(|()| ExitCode::SUCCESS)
        }
        Commands::Generate {
            niche,
            platforms,
            input,
            pretty,
        } => {
            handle_generate(
                &config,
                GenerateOptions {
                    niche,
                    platforms,
                    input,
                    pretty,
                },
            )
            .await
        }
        Commands::Platforms => {
            handle_platforms();
            Ok(ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
