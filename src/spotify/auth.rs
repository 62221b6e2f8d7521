use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use chrono::Utc;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::query::with_query;
use crate::{
    config,
    error::{Error, Result},
    server::start_api_server,
    transport::{decode_error_body, map_reqwest_error},
    types::{PkceToken, Token},
    utils::{CHALLENGE_METHOD, PkcePair},
    validate, warning,
};

/// How long [`auth`] waits for the browser to come back to the callback.
pub const LOGIN_TIMEOUT: Duration = Duration::from_secs(120);

const DEFAULT_EXPIRES_IN: u64 = 3600;

/// Runs the OAuth 2.0 PKCE login.
///
/// Starts the local callback server, opens the authorization page in the
/// default browser and waits until the callback handler has exchanged the
/// code for a token (see [`crate::api::callback`]). The token is returned,
/// persisting it is up to the caller.
pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>, client_id: &str) -> Result<Token> {
    validate::id(client_id, "client_id")?;

    let PkcePair {
        verifier,
        challenge,
    } = PkcePair::generate();

    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier: verifier,
            token: None,
        });
    }

    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            warn!(error = %e, "callback server stopped");
        }
    });

    let auth_url = authorize_url(client_id, &challenge);
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    wait_for_token(shared_state, LOGIN_TIMEOUT)
        .await
        .ok_or_else(|| Error::timeout("no authorization callback received"))
}

/// The accounts service page the user is sent to.
pub fn authorize_url(client_id: &str, code_challenge: &str) -> String {
    with_query(
        &config::spotify_apiauth_url(),
        &[
            ("client_id", client_id.to_string()),
            ("response_type", "code".to_string()),
            ("redirect_uri", config::spotify_redirect_uri()),
            ("code_challenge", code_challenge.to_string()),
            ("code_challenge_method", CHALLENGE_METHOD.to_string()),
            ("scope", config::spotify_scope()),
        ],
    )
}

async fn wait_for_token(
    shared_state: Arc<Mutex<Option<PkceToken>>>,
    max_wait: Duration,
) -> Option<Token> {
    let start = Instant::now();

    while start.elapsed() < max_wait {
        {
            let lock = shared_state.lock().await;
            if let Some(token) = lock.as_ref().and_then(|pkce| pkce.token.clone()) {
                return Some(token);
            }
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Client credentials grant; the token carries no user context.
pub async fn request_client_credentials_token(
    client_id: &str,
    client_secret: &str,
) -> Result<Token> {
    validate::id(client_id, "client_id")?;
    validate::id(client_secret, "client_secret")?;

    let request = token_request()?
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")]);
    send_token_request(request, None).await
}

/// Exchanges a refresh token for a new access token.
///
/// The accounts service may omit the refresh token in its answer, in which
/// case the one passed in is kept.
pub async fn refresh_token(refresh_token: &str, client_id: &str) -> Result<Token> {
    validate::id(refresh_token, "refresh_token")?;
    validate::id(client_id, "client_id")?;

    let request = token_request()?.form(&[
        ("grant_type", "refresh_token"),
        ("refresh_token", refresh_token),
        ("client_id", client_id),
    ]);
    send_token_request(request, Some(refresh_token)).await
}

/// Exchanges the authorization code received on the callback, together with
/// the verifier generated at the start of the login, for a token.
pub async fn exchange_code_pkce(code: &str, verifier: &str, client_id: &str) -> Result<Token> {
    validate::id(code, "code")?;
    validate::id(verifier, "code_verifier")?;
    validate::id(client_id, "client_id")?;

    let redirect_uri = config::spotify_redirect_uri();
    let request = token_request()?.form(&[
        ("grant_type", "authorization_code"),
        ("client_id", client_id),
        ("code", code),
        ("code_verifier", verifier),
        ("redirect_uri", &redirect_uri),
    ]);
    send_token_request(request, None).await
}

fn token_request() -> Result<RequestBuilder> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config::http_timeout_secs()))
        .build()
        .map_err(Error::network)?;

    Ok(client.post(config::spotify_apitoken_url()))
}

async fn send_token_request(request: RequestBuilder, previous_refresh: Option<&str>) -> Result<Token> {
    let response = request.send().await.map_err(map_reqwest_error)?;
    let status = response.status();
    let text = response.text().await.map_err(map_reqwest_error)?;
    debug!(status = status.as_u16(), "token endpoint answered");

    if !status.is_success() {
        return Err(Error::from_http_status(
            status.as_u16(),
            &decode_error_body(&text),
        ));
    }

    let json: Value = serde_json::from_str(&text).map_err(Error::json_decode)?;
    token_from_json(&json, previous_refresh, Utc::now().timestamp() as u64)
}

/// Builds a [`Token`] from a token endpoint response.
pub fn token_from_json(
    json: &Value,
    previous_refresh: Option<&str>,
    obtained_at: u64,
) -> Result<Token> {
    let Some(access_token) = json
        .get("access_token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
    else {
        return Err(Error::unexpected_response(
            "Token response is missing `access_token`",
            json,
        ));
    };

    Ok(Token {
        access_token: access_token.to_string(),
        refresh_token: json
            .get("refresh_token")
            .and_then(Value::as_str)
            .or(previous_refresh)
            .map(String::from),
        scope: json
            .get("scope")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        expires_in: json
            .get("expires_in")
            .and_then(Value::as_u64)
            .unwrap_or(DEFAULT_EXPIRES_IN),
        obtained_at,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn refresh_keeps_previous_refresh_token() {
        let token = token_from_json(
            &json!({ "access_token": "BQD", "token_type": "Bearer", "expires_in": 3600 }),
            Some("AQC"),
            1_700_000_000,
        )
        .unwrap();
        assert_eq!(token.refresh_token.as_deref(), Some("AQC"));
        assert_eq!(token.expires_at(), 1_700_003_600);
        assert_eq!(token.scope, "");
    }

    #[test]
    fn missing_access_token_is_unexpected_response() {
        let err = token_from_json(&json!({ "expires_in": 3600 }), None, 0).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedResponse);
    }

    #[test]
    fn authorize_url_is_encoded() {
        let url = authorize_url("abc123", "E9Melhoa2Owv");
        assert!(url.contains("?client_id=abc123&response_type=code"));
        assert!(url.contains("code_challenge=E9Melhoa2Owv&code_challenge_method=S256"));
        assert!(url.contains("redirect_uri=http"));
        assert!(!url.contains("redirect_uri=http://"));
    }

    #[tokio::test]
    async fn empty_code_is_rejected_before_any_request() {
        let err = exchange_code_pkce("", "verifier", "client").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyId);
        assert_eq!(err.detail("field"), Some(&json!("code")));
    }
}
