/// Podcastr Server - page data for the Podcastr web player
use clap::{Parser, Subcommand};
use podcastr_content_client::{ContentClient, EpisodeQuery};
use podcastr_server::{api, config::ServerConfig, state::AppState};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "podcastr-server")]
#[command(about = "Podcastr page data server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the newest episodes from the content service
    Episodes {
        /// Number of episodes to list
        #[arg(short, long, default_value_t = 12)]
        limit: usize,
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podcastr_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Episodes { limit, config } => {
            list_episodes(limit, config).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting Podcastr Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Content service: {}", config.content.url);

    let client = ContentClient::new(config.content.client_config())?;
    let app_state = AppState::new(Arc::new(client), config.pages.clone());

    let app = api::router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_episodes(limit: usize, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let client = ContentClient::new(config.content.client_config())?;

    let episodes = client.list_episodes(&EpisodeQuery::latest(limit)).await?;

    println!("Episodes:");
    for detail in episodes {
        println!(
            "  {} - {} ({}, {})",
            detail.id(),
            detail.episode.title,
            detail.duration_as_string,
            detail.published_at_display
        );
    }

    Ok(())
}
