/// Podcastr - terminal podcast player
use anyhow::Context;
use clap::{Parser, Subcommand};
use podcastr_cli::{
    config::AppConfig,
    device::ClockDevice,
    repl::{self, Command},
};
use podcastr_client::EpisodeClient;
use podcastr_core::Episode;
use podcastr_playback::{PlayerSession, SurfaceSignal};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "podcastr")]
#[command(about = "Listen to the latest podcast episodes from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the latest episodes
    List {
        /// Number of episodes to fetch
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one episode
    Show {
        /// Episode id
        id: String,
    },
    /// Play episodes interactively
    Listen {
        /// Number of episodes to fetch
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(&config);

    let client = EpisodeClient::new(config.client_config()).context("Invalid API settings")?;

    match cli.command {
        Commands::List { limit } => {
            let episodes = fetch_latest(&client, limit.unwrap_or(config.api.limit)).await?;
            println!("{}", repl::render_episodes(&episodes));
        }
        Commands::Show { id } => {
            let episode = client
                .episode(&id)
                .await
                .with_context(|| format!("Failed to fetch episode {}", id))?;
            println!("{}", repl::render_episode(&episode));
        }
        Commands::Listen { limit } => {
            let episodes = fetch_latest(&client, limit.unwrap_or(config.api.limit)).await?;
            listen(&config, episodes).await?;
        }
    }

    Ok(())
}

/// `RUST_LOG`, else the configured filter, else `podcastr=info`
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        config
            .log
            .filter
            .as_deref()
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| "podcastr=info".into())
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn fetch_latest(client: &EpisodeClient, limit: usize) -> anyhow::Result<Vec<Episode>> {
    let episodes = client
        .latest_episodes(limit)
        .await
        .with_context(|| format!("Failed to fetch episodes from {}", client.base_url()))?;
    tracing::info!(count = episodes.len(), "Fetched latest episodes");
    Ok(episodes)
}

async fn listen(config: &AppConfig, episodes: Vec<Episode>) -> anyhow::Result<()> {
    let mut device = ClockDevice::new(config.tick());
    for episode in &episodes {
        device.register(episode.media_url.clone(), episode.duration);
    }
    let mut session = PlayerSession::new(config.player_config(), device);

    println!("{}", repl::render_episodes(&episodes));
    println!("\n{}", repl::HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(config.tick());

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                for signal in session.tick() {
                    if let SurfaceSignal::Failed { message } = signal {
                        println!("Playback failed: {}", message);
                    }
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };

                match Command::parse(&line) {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => match repl::execute(&mut session, &episodes, command) {
                        Ok(Some(output)) => println!("{}", output),
                        Ok(None) => {}
                        Err(e) => println!("{}", e),
                    },
                    Ok(None) => {}
                    Err(e) => println!("{} (type `help`)", e),
                }
            }
        }

        for event in session.drain_events() {
            tracing::debug!(?event, "Player event");
            if let Some(text) = repl::describe_event(&session, &event) {
                println!("{}", text);
            }
        }
    }

    session.clear_player_state();
    Ok(())
}
