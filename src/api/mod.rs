//! # API Module
//!
//! HTTP endpoints of the local server started by `sporlapi auth`.
//!
//! - [`callback`] completes the OAuth 2.0 PKCE login: the accounts service
//!   redirects the browser here with an authorization code, which is
//!   exchanged for a token using the verifier kept in the shared state.
//! - [`health`] answers with the crate version and whether a login is idle,
//!   pending or complete.
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use sporlapi::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health))
//!     .layer(Extension(shared_state));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
