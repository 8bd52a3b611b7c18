use esg_intake::cli;
use esg_intake::config::IntakeConfig;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with the conversation.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = IntakeConfig::from_env()?;

    eprintln!("🌱 ESG Intake v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Type a message and press Enter. Pick options by number.");
    eprintln!("   /profile shows your answers, /transcript dumps JSON, /quit to exit.\n");

    let reader = BufReader::new(tokio::io::stdin());
    let profile = cli::run(&config, reader, tokio::io::stdout()).await?;

    tracing::info!(
        completed = !profile.motivation.is_empty(),
        "Intake session ended"
    );
    Ok(())
}
