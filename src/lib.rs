//! Typed client for the Spotify Web API
//!
//! The library validates arguments before any request is made, sends each
//! operation through a pluggable [`transport::Transport`], and parses the
//! responses into typed records. Every failure is an [`error::Error`] with a
//! stable [`error::ErrorKind`]. A small command line tool is built on top.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error kinds and the error value returned by every operation
//! - `management` - Token persistence and the token refresh task
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Web API operations, one file per resource
//! - `transport` - The HTTP seam and its reqwest implementation
//! - `types` - Entity records and their response parsers
//! - `utils` - PKCE helpers
//! - `validate` - Argument validators
//!
//! # Example
//!
//! ```
//! use sporlapi::{config, spotify::{QueryOptions, SpotifyClient}};
//!
//! #[tokio::main]
//! async fn main() -> sporlapi::Res<()> {
//!     config::load_env().await?;
//!     let client = SpotifyClient::from_config()?;
//!     let album = client
//!         .get_album("4aawyAB9vmqN3uQ7FjRGTy", "BQC...", &QueryOptions::new())
//!         .await?;
//!     println!("{}", album.name);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod transport;
pub mod types;
pub mod utils;
pub mod validate;

/// Result for the CLI and server plumbing, where any error is reported as
/// text. Library operations return [`error::Result`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Terminal output of the `sporlapi` binary. These are user facing lines,
// diagnostics go through `tracing`.

/// `[o] message` on stdout.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// `[✓] message` on stdout.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// `[!] message` on stderr, then exits with status 1.
///
/// ```ignore
/// let client = SpotifyClient::from_config()
///     .unwrap_or_else(|e| error!("Cannot create client: {}", e));
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// `[!] message` on stderr; the program carries on.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
