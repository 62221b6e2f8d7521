//! # Spotify Web API
//!
//! Typed operations over the Spotify Web API. Every operation is an `async`
//! method on [`SpotifyClient`], implemented in the file of the resource it
//! belongs to:
//!
//! ```text
//! SpotifyClient<T: Transport>
//!     ├── albums      GET /albums, /me/albums, /browse/new-releases
//!     ├── artists     GET /artists/{id}, top tracks, related artists
//!     ├── tracks      GET /tracks, /me/tracks
//!     ├── playlists   /playlists/{id}, /me/playlists, /browse/featured-playlists
//!     ├── search      GET /search
//!     ├── player      /me/player/*
//!     ├── users       /me, /users/{id}, /me/following
//!     ├── shows       GET /shows, /me/shows
//!     ├── episodes    GET /episodes, /me/episodes
//!     ├── audiobooks  GET /audiobooks, /me/audiobooks
//!     ├── chapters    GET /chapters
//!     ├── categories  GET /browse/categories
//!     └── markets     GET /markets
//!          ↓
//! Transport (reqwest by default)
//! ```
//!
//! ## Request flow
//!
//! 1. Arguments are validated in a fixed order: the primary id, the access
//!    token, id lists and their contents, then operation specific checks
//!    (limits, enumerations, ranges). The first failure is returned and no
//!    request is made.
//! 2. Exactly one request goes through the [`Transport`](crate::transport::Transport).
//!    Its errors are returned unchanged.
//! 3. Responses wrapped in an envelope (`{"albums": [...]}`) are checked for
//!    the expected key; a missing key is an `unexpected_response` error that
//!    carries the raw response.
//! 4. The payload is parsed into the records of [`crate::types`].
//!
//! ## Authentication
//!
//! [`auth`] talks to the accounts service: client credentials, refresh and
//! the PKCE browser login used by `sporlapi auth`. Long running programs
//! should hand tokens out through [`crate::management::TokenHandle`].
//!
//! ## Usage
//!
//! ```rust
//! let client = SpotifyClient::from_config()?;
//! let opts = QueryOptions::new().market("SE");
//!
//! let album = client.get_album("4aawyAB9vmqN3uQ7FjRGTy", &token, &opts).await?;
//! let results = client.search("Kent", "artist,album", &token, &opts).await?;
//! ```

pub mod albums;
pub mod artists;
pub mod audiobooks;
pub mod auth;
pub mod categories;
pub mod chapters;
mod client;
pub mod episodes;
pub mod markets;
pub mod player;
pub mod playlists;
mod query;
pub mod search;
pub mod shows;
pub mod tracks;
pub mod users;

pub use client::SpotifyClient;
pub use player::StartPlayback;
pub use playlists::PlaylistDetails;
pub use query::{MAX_LIMIT, QueryOptions, TIME_RANGES, with_query};
pub use search::SearchTypes;
