use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use super::auth::{TokenManager, TokenRefresher};
use crate::error::{Error, ErrorKind, Result};

const CHANNEL_CAPACITY: usize = 32;

enum Command {
    GetToken {
        reply: oneshot::Sender<Result<String>>,
    },
}

/// Background task that exclusively owns the current token.
///
/// Requests are served one at a time, so a refresh triggered by one caller
/// is observed by every caller queued behind it and the accounts service is
/// asked at most once per expiry.
pub struct TokenActor {
    manager: TokenManager,
    refresher: Arc<dyn TokenRefresher>,
    receiver: mpsc::Receiver<Command>,
}

impl TokenActor {
    /// Runs until every [`TokenHandle`] has been dropped.
    ///
    /// This should be called inside a `tokio::spawn`.
    pub async fn run(mut self) {
        info!("token actor started");

        while let Some(command) = self.receiver.recv().await {
            match command {
                Command::GetToken { reply } => {
                    let token = self.manager.get_valid_token(self.refresher.as_ref()).await;
                    if reply.send(token).is_err() {
                        debug!("token requester went away");
                    }
                }
            }
        }

        debug!("token actor stopped");
    }
}

/// Cheap, cloneable access to a running [`TokenActor`].
#[derive(Clone)]
pub struct TokenHandle {
    sender: mpsc::Sender<Command>,
}

impl TokenHandle {
    /// Spawns the actor on the current runtime and returns its handle.
    pub fn spawn(manager: TokenManager, refresher: Arc<dyn TokenRefresher>) -> Self {
        let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
        let actor = TokenActor {
            manager,
            refresher,
            receiver,
        };
        tokio::spawn(actor.run());

        TokenHandle { sender }
    }

    /// A valid access token, refreshed first when it is about to expire.
    pub async fn get_token(&self) -> Result<String> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(Command::GetToken { reply })
            .await
            .map_err(|_| stopped())?;

        response.await.map_err(|_| stopped())?
    }
}

fn stopped() -> Error {
    Error::new(ErrorKind::Unauthorized, "Token manager is not running")
}
