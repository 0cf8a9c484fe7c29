// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::address_book::AddressBook;

/// Rollup HTTP server inside a RISC-V machine.
pub const MACHINE_ROLLUP_URL: &str = "http://127.0.0.1:5004";

/// Rollup HTTP server of a host-mode development node.
pub const HOST_ROLLUP_URL: &str = "http://127.0.0.1:8080/rollup";

/// Differences between versions of the rollup contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolFlags {
    /// Token deposits start with a one byte success flag.
    pub token_deposit_success_flag: bool,
    /// Advance metadata carries the application address.
    pub app_address_from_metadata: bool,
}

impl Default for ProtocolFlags {
    fn default() -> Self {
        Self {
            token_deposit_success_flag: true,
            app_address_from_metadata: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Base URL of the rollup HTTP server.
    pub rollup_url: String,
    pub address_book: AddressBook,
    pub flags: ProtocolFlags,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        let rollup_url = if cfg!(target_arch = "riscv64") {
            MACHINE_ROLLUP_URL
        } else {
            HOST_ROLLUP_URL
        };
        Self {
            rollup_url: rollup_url.to_string(),
            address_book: AddressBook::default(),
            flags: ProtocolFlags::default(),
        }
    }
}
