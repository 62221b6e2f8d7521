use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

use crate::{
    config,
    error::{Error, ErrorKind, Result},
    spotify::auth,
    types::Token,
};

/// Tokens are refreshed this many seconds before they actually expire.
pub const EXPIRY_BUFFER_SECS: u64 = 240;

/// Obtains a fresh token once the current one has expired.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    async fn refresh(&self, current: &Token) -> Result<Token>;
}

/// Refreshes through the accounts service.
///
/// With a client secret the client credentials grant is used when the
/// current token has no refresh token.
#[derive(Debug, Clone)]
pub struct AccountsRefresher {
    pub client_id: String,
    pub client_secret: Option<String>,
}

impl AccountsRefresher {
    /// Reads the client id and the optional secret from the environment.
    pub fn from_config() -> std::result::Result<Self, String> {
        Ok(Self {
            client_id: config::spotify_client_id()?,
            client_secret: config::spotify_client_secret().ok(),
        })
    }
}

#[async_trait]
impl TokenRefresher for AccountsRefresher {
    async fn refresh(&self, current: &Token) -> Result<Token> {
        match (&current.refresh_token, &self.client_secret) {
            (Some(refresh_token), _) => auth::refresh_token(refresh_token, &self.client_id).await,
            (None, Some(secret)) => {
                auth::request_client_credentials_token(&self.client_id, secret).await
            }
            (None, None) => Err(Error::new(
                ErrorKind::Unauthorized,
                "Token expired and cannot be refreshed, run `sporlapi auth`",
            )),
        }
    }
}

/// Holds the current token and keeps its on-disk copy in sync.
pub struct TokenManager {
    token: Token,
    path: Option<PathBuf>,
}

impl TokenManager {
    /// A manager persisting to the default cache file.
    pub fn new(token: Token) -> Self {
        TokenManager {
            token,
            path: Some(Self::token_path()),
        }
    }

    /// A manager that never touches the disk.
    pub fn in_memory(token: Token) -> Self {
        TokenManager { token, path: None }
    }

    pub async fn load() -> std::result::Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self {
            token,
            path: Some(path),
        })
    }

    pub async fn persist(&self) -> std::result::Result<(), String> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(path, json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Returns the access token, refreshing it first when it is about to expire.
    pub async fn get_valid_token(&mut self, refresher: &dyn TokenRefresher) -> Result<String> {
        if self.is_expired() {
            debug!(expires_at = self.token.expires_at(), "refreshing access token");
            self.token = refresher.refresh(&self.token).await?;
            if let Err(e) = self.persist().await {
                warn!(error = %e, "failed to persist refreshed token");
            }
        }

        Ok(self.token.access_token.clone())
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp() as u64)
    }

    /// `true` once `now` is within [`EXPIRY_BUFFER_SECS`] of the expiry.
    pub fn is_expired_at(&self, now: u64) -> bool {
        now + EXPIRY_BUFFER_SECS >= self.token.expires_at()
    }

    pub fn token_path() -> PathBuf {
        config::data_dir().join("cache").join("token.json")
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
