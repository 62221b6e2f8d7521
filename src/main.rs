use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use sporlapi::{
    cli::{self, PlayerCommand},
    config, error,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Show an album and its tracks
    Album(AlbumOptions),

    /// Show an artist and their top tracks
    Artist(ArtistOptions),

    /// Show a track
    Track { id: String },

    /// Search the catalog
    Search(SearchOptions),

    /// Control playback
    #[command(subcommand)]
    Player(PlayerCommand),

    /// List the markets Spotify is available in
    Markets,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumOptions {
    id: String,

    /// ISO 3166-1 alpha-2 country code
    #[clap(long)]
    market: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistOptions {
    id: String,

    /// Market for the top tracks
    #[clap(long, default_value = "US")]
    market: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    query: String,

    /// Comma separated item types: album, artist, playlist, track, show, episode, audiobook
    #[clap(long = "type", default_value = "track")]
    types: String,

    /// Results per type, 1 to 50
    #[clap(long)]
    limit: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SPORLAPI_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Album(opt) => cli::album(opt.id, opt.market).await,
        Command::Artist(opt) => cli::artist(opt.id, opt.market).await,
        Command::Track { id } => cli::track(id).await,
        Command::Search(opt) => cli::search(opt.query, opt.types, opt.limit).await,
        Command::Player(command) => cli::player(command).await,
        Command::Markets => cli::markets().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
