use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use colloquy::{AppState, ServerConfig, build_segments, io, render_transcript, routes};

#[derive(Parser)]
#[command(name = "colloquy")]
#[command(author, version, about = "Speaker-attributed transcription service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP transcription service
    Serve {
        /// Bind host (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Render a saved provider response as a speaker-attributed transcript
    Render {
        /// Input file (speech-to-text JSON response)
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            verbose,
        } => {
            setup_logging(verbose);
            serve(host, port).await
        }
        Commands::Render { input, verbose } => {
            setup_logging(verbose);
            render(input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = ServerConfig::from_env().context("Failed to load configuration")?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let address = config.address();
    let state = AppState::new(config)?;
    let app = routes::create_router(state)?;

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!("Listening on {address}");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn render(input: PathBuf) -> Result<()> {
    let response = io::parse_scribe_file(&input).context("Failed to parse input transcript")?;

    info!(
        "Loaded {} words, language {:?}",
        response.words.len(),
        response.language
    );

    let segments = build_segments(&response.words);
    print!("{}", render_transcript(&segments));

    Ok(())
}
