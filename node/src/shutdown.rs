// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Graceful shutdown helper.

use tokio::signal::unix::{signal, SignalKind};
use tracing::{info, warn};

/// Resolves on SIGINT or SIGTERM.
///
/// If the handlers cannot be installed the future never resolves and the
/// node runs until the transport fails.
pub async fn signalled() {
    let (mut sigterm, mut sigint) =
        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(sigterm), Ok(sigint)) => (sigterm, sigint),
            (Err(err), _) | (_, Err(err)) => {
                warn!("Cannot install signal handlers: {err}");
                return std::future::pending().await;
            }
        };

    tokio::select! {
        _ = sigterm.recv() => info!("Received SIGTERM, initiating shutdown..."),
        _ = sigint.recv() => info!("Received SIGINT, initiating shutdown..."),
    };
}
