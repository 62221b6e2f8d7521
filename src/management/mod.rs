//! Token lifecycle: persistence on disk and a background task handing out
//! valid access tokens.

mod actor;
mod auth;

pub use actor::{TokenActor, TokenHandle};
pub use auth::{AccountsRefresher, EXPIRY_BUFFER_SECS, TokenManager, TokenRefresher};
