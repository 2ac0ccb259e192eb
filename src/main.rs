use anyhow::Result;
use letter_duel::config::Config;
use letter_duel::console::{spawn_stdin_reader, Console};
use letter_duel::session::GameSession;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so they never interleave with the game on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("letter_duel=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Turn budget {}s, tick every {:?}",
        config.turn_seconds, config.tick_interval
    );

    let console = Console::new(spawn_stdin_reader(), std::io::stdout());
    let mut session = GameSession::new(console, config);
    session.run().await?;

    info!("Players are done, exiting");
    Ok(())
}
