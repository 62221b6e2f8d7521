use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{config, spotify::auth::exchange_code_pkce, types::PkceToken, warning};

/// Receives `?code=...` from the accounts service and completes the PKCE
/// exchange, storing the token in the shared state.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<PkceToken>>>>,
) -> Html<&'static str> {
    if let Some(reason) = params.get("error") {
        warning!("Authorization denied: {}", reason);
        return Html("<h4>Authorization denied.</h4>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let client_id = match config::spotify_client_id() {
        Ok(client_id) => client_id,
        Err(e) => {
            warning!("{}", e);
            return Html("<h4>Login failed.</h4>");
        }
    };

    let mut state = shared_state.lock().await;
    let Some(pkce_state) = state.as_mut() else {
        return Html("<h4>Missing PKCE code verifier.</h4>");
    };

    match exchange_code_pkce(code, &pkce_state.code_verifier, &client_id).await {
        Ok(token) => {
            pkce_state.token = Some(token);
            Html("<h2>Authentication successful.</h2><p>You can close this window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed ({}): {}", e.kind, e);
            Html("<h4>Login failed.</h4>")
        }
    }
}
