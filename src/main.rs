//! Resume screener: semantic + skill-gap resume screening service and client

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_screener::cli::{Cli, Commands, ConfigAction};
use resume_screener::client::ScreeningClient;
use resume_screener::error::{AnalysisError, Result};
use resume_screener::output::render;
use resume_screener::{cli, server, Config};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind_addr = bind;
            }
            info!("Starting scoring service on {}", config.server.bind_addr);
            server::serve(&config).await?;
        }

        Commands::Analyze {
            resume,
            job,
            job_text,
            server,
        } => {
            cli::validate_file_extension(&resume, &["pdf"])
                .map_err(|e| AnalysisError::InvalidInput(format!("Resume file: {}", e)))?;

            let job_description = match (job, job_text) {
                (Some(path), None) => std::fs::read_to_string(&path)?,
                (None, Some(text)) => text,
                _ => {
                    return Err(AnalysisError::InvalidInput(
                        "Please provide both a resume and a job description.".to_string(),
                    ))
                }
            };

            let server_url = server.unwrap_or(config.client.server_url);
            let client = ScreeningClient::new(server_url)?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .expect("Invalid spinner template"),
            );
            spinner.set_message("Analyzing resume...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let result = client.analyze(&resume, &job_description).await;
            spinner.finish_and_clear();

            match result {
                Ok(report) => render::render_report(&report),
                Err(e) => {
                    render::render_failure(&e.to_string());
                    process::exit(1);
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Server bind address:  {}", config.server.bind_addr);
                println!("Client server URL:    {}", config.client.server_url);
                println!("Embedding model:      {}", config.model.embedding_model);
                println!("Models directory:     {}", config.models_dir().display());
                println!(
                    "Scoring weights:      semantic {:.0}% / skills {:.0}%",
                    config.scoring.semantic_weight * 100.0,
                    config.scoring.skill_weight * 100.0
                );
                println!(
                    "Skill keywords ({}):  {}",
                    config.scoring.skill_keywords.len(),
                    config.scoring.skill_keywords.join(", ")
                );
            }
            Some(ConfigAction::Reset) => {
                Config::default().save()?;
                println!("Configuration reset to defaults.");
            }
        },
    }

    Ok(())
}
