// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use dapp_encoding::HexString;
use primitive_types::H160;
use serde::{Deserialize, Serialize};

/// Metadata of an advance input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Account or contract that added the input to the input box
    pub msg_sender: H160,
    /// Position of the input, starting at zero
    pub input_index: u64,
    /// Block in which the input was added on the origin chain
    pub block_number: u64,
    /// Timestamp of that block
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// Application contract the input was addressed to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_contract: Option<H160>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_randao: Option<HexString>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceInput {
    pub metadata: Metadata,
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectInput {
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Advance(AdvanceInput),
    Inspect(InspectInput),
}

/// Outcome of the previous input, sent when asking for the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinishStatus {
    Accept,
    Reject,
}
