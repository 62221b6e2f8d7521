//! # CLI Module
//!
//! User-facing commands of the `sporlapi` binary. Each command loads the
//! cached token, calls one or more operations of
//! [`SpotifyClient`](crate::spotify::SpotifyClient) and prints the result as a
//! table.
//!
//! ```bash
//! sporlapi auth                                # log in through the browser
//! sporlapi album 4aawyAB9vmqN3uQ7FjRGTy        # album with its tracks
//! sporlapi search "kent" --type artist,album   # search the catalog
//! sporlapi player volume 40                    # control playback
//! ```
//!
//! Failed operations are reported with their error kind (`not_found`,
//! `rate_limited`, ...) instead of aborting with a backtrace.

mod album;
mod artist;
mod auth;
mod markets;
mod player;
mod search;
mod table;
mod track;

pub use album::album;
pub use artist::artist;
pub use auth::auth;
pub use markets::markets;
pub use player::{PlayerCommand, player};
pub use search::search;
pub use track::track;

use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error,
    error::Error,
    management::{AccountsRefresher, TokenHandle, TokenManager},
    spotify::SpotifyClient,
    warning,
};

/// A client and a token source for the cached login.
pub(crate) struct Session {
    pub client: SpotifyClient,
    pub tokens: TokenHandle,
}

impl Session {
    pub async fn token(&self) -> Option<String> {
        match self.tokens.get_token().await {
            Ok(token) => Some(token),
            Err(e) => {
                report(&e);
                None
            }
        }
    }
}

pub(crate) async fn session() -> Session {
    let manager = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => error!(
            "Failed to load token. Please run sporlapi auth\n Error: {}",
            e
        ),
    };
    let refresher = match AccountsRefresher::from_config() {
        Ok(refresher) => refresher,
        Err(e) => error!("{}", e),
    };
    let client = match SpotifyClient::from_config() {
        Ok(client) => client,
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    };

    Session {
        client,
        tokens: TokenHandle::spawn(manager, Arc::new(refresher)),
    }
}

pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

pub(crate) fn report(err: &Error) {
    if err.kind.is_validation() {
        warning!("Invalid argument: {} [{}]", err, err.kind)
    } else {
        warning!("{} [{}]", err, err.kind)
    }
}
