// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use primitive_types::U256;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Cannot transfer to self")]
    SelfTransfer,

    #[error("Insufficient funds: balance is {balance}, requested {requested}")]
    InsufficientFunds { balance: U256, requested: U256 },

    #[error("Balance overflow")]
    BalanceOverflow,
}
