use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{config, error, management::TokenManager, spotify, success, types::PkceToken};

pub async fn auth() {
    let client_id = match config::spotify_client_id() {
        Ok(client_id) => client_id,
        Err(e) => error!("{}", e),
    };

    let shared_state: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
    let token = match spotify::auth::auth(shared_state, &client_id).await {
        Ok(token) => token,
        Err(e) => error!("Authentication failed. Err: {} [{}]", e, e.kind),
    };

    if let Err(e) = TokenManager::new(token).persist().await {
        error!("Failed to save token to cache: {}", e);
    }
    success!("Authentication successful!");
}
