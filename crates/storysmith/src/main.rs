//! Storysmith CLI binary.
//!
//! - `serve` runs the story API
//! - `prompt` prints the rendered prompt for a requirement

use clap::Parser;
use storysmith::{
    ObservabilityConfig, StorysmithConfig, build_prompt, init_observability_with_config,
};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_server};

    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let settings = StorysmithConfig::load(cli.config.as_deref())?;

    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        settings.logging.level.clone()
    };
    let _telemetry = init_observability_with_config(
        &ObservabilityConfig::default()
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs || settings.logging.json),
    )?;

    match cli.command {
        Commands::Serve { bind } => {
            run_server(&settings, bind).await?;
        }

        Commands::Prompt { requirement } => {
            println!("{}", build_prompt(&requirement));
        }
    }

    Ok(())
}
