use anyhow::Result;
use clap::Parser;
use seqrun::cli::cli::Cli;
use tracing::{debug, error};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing with environment-based filtering; logs go to stderr
    // so the run report on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting seqrun {}", seqrun::cli::VERSION);

    // Execute command with user-friendly error handling
    if let Err(e) = cli.execute().await {
        // Log the full error for debugging
        error!("Command execution failed: {:?}", e);

        // Display user-friendly error message
        eprintln!("Error: {}", e.user_message());

        // Exit with error code
        std::process::exit(1);
    }

    debug!("Command completed successfully");
    Ok(())
}
