// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload does not have the size required by its layout.
    #[error("Malformed {what} payload: expected {expected} bytes, got {actual}")]
    MalformedPayload {
        what: &'static str,
        expected: Expected,
        actual: usize,
    },

    /// The portal reports that the transfer failed on the origin chain.
    #[error("Token transfer failed on the origin chain")]
    FailedTransfer,
}

/// Size requirement of a layout, used for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Exactly(usize),
    AtLeast(usize),
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Exactly(size) => write!(f, "exactly {size}"),
            Expected::AtLeast(size) => write!(f, "at least {size}"),
        }
    }
}
