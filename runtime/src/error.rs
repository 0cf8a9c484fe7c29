// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use dapp_encoding::DecodeError;
use dapp_ledger::LedgerError;
use thiserror::Error;

/// Reasons for rejecting an input. None of them stops the runtime.
#[derive(Error, Debug)]
pub enum InputError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Cannot withdraw native coins before the application address is known")]
    AppAddressUnknown,

    #[error("Input rejected by the application: {0:#}")]
    Rejected(anyhow::Error),

    #[error("A panic occurred: {0}")]
    ApplicationFault(String),
}

impl InputError {
    /// Wraps an error returned by the application, unless it is already
    /// an error raised by the runtime on the application's behalf.
    pub fn from_application(error: anyhow::Error) -> Self {
        match error.downcast::<InputError>() {
            Ok(error) => error,
            Err(error) => InputError::Rejected(error),
        }
    }
}

/// Failures talking to the rollup server. These are fatal.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Invalid rollup url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Host component missing in rollup url")]
    UriHostMissing,

    #[error("Port component missing in rollup url")]
    UriPortMissing,

    #[error("Connection to the rollup server failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Http error: {0}")]
    Http(#[from] hyper::Error),

    #[error("Invalid http request: {0}")]
    Request(#[from] hyper::http::Error),

    #[error("Invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rollup server answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid request type: {0}")]
    InvalidRequestType(String),
}
