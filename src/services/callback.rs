// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-shot local HTTP listener for the OAuth redirect.
//!
//! The listener serves exactly one purpose: receive the `code` query
//! parameter Strava appends to the redirect. The code travels through a
//! single-slot channel handed in at construction; once the waiter has it,
//! the server is shut down gracefully.

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

use crate::error::{AppError, Result};

/// Static page shown in the browser after the redirect lands.
const CONFIRMATION_BODY: &str =
    "<html><body>Authorization complete. You can close this window.</body></html>";

/// Query parameters Strava appends to the redirect URI.
#[derive(Deserialize)]
struct CallbackParams {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
struct CallbackState {
    code_tx: mpsc::Sender<String>,
}

/// A bound, running redirect listener.
pub struct CallbackServer {
    local_addr: SocketAddr,
    code_rx: mpsc::Receiver<String>,
    shutdown_tx: oneshot::Sender<()>,
    server_task: tokio::task::JoinHandle<()>,
}

impl CallbackServer {
    /// Bind the listener on localhost at `port` (0 picks an ephemeral port)
    /// and start serving. The server runs until [`wait_for_code`] shuts it
    /// down.
    ///
    /// [`wait_for_code`]: CallbackServer::wait_for_code
    pub async fn bind(port: u16) -> Result<Self> {
        // Single-slot channel: only the first code received matters.
        let (code_tx, code_rx) = mpsc::channel(1);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let app = Router::new()
            .route("/callback", get(handle_callback))
            .with_state(CallbackState { code_tx });

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(address = %local_addr, "OAuth callback listener started");

        let server_task = tokio::spawn(async move {
            let serve = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });
            if let Err(e) = serve.await {
                tracing::error!(error = %e, "Callback server error");
            }
        });

        Ok(Self {
            local_addr,
            code_rx,
            shutdown_tx,
            server_task,
        })
    }

    /// The address the listener actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Block until the authorization code arrives, then stop the listener.
    ///
    /// Consumes the server: the listener is shut down whether a code arrived
    /// or the wait timed out.
    pub async fn wait_for_code(mut self, timeout: Duration) -> Result<String> {
        let received = tokio::time::timeout(timeout, self.code_rx.recv()).await;

        let _ = self.shutdown_tx.send(());
        let _ = self.server_task.await;

        match received {
            Ok(Some(code)) => {
                tracing::info!("Authorization code received");
                Ok(code)
            }
            _ => Err(AppError::AuthTimeout),
        }
    }
}

/// Handle the redirect request: hand the code to the waiter and show the
/// confirmation page. Requests without a code (including provider errors)
/// get the same static page while the waiter keeps waiting.
async fn handle_callback(
    State(state): State<CallbackState>,
    Query(params): Query<CallbackParams>,
) -> Html<&'static str> {
    if let Some(error) = &params.error {
        tracing::warn!(error = %error, "Authorization error reported by Strava");
    }

    if let Some(code) = params.code {
        // try_send: if a code was already delivered, later ones are dropped
        let _ = state.code_tx.try_send(code);
    }

    Html(CONFIRMATION_BODY)
}
