// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Asset bookkeeping of a rollup application.
//!
//! The ledger tracks two independent balance tables: native coin balances
//! keyed by owner, and token balances keyed by token contract and owner.
//! Balances live in the unsigned 256-bit range.
//!
//! A zero balance is never stored: absence means zero. Enumerations are
//! therefore minimal and, because the tables are ordered maps over the raw
//! address bytes, deterministic.
//!
//! Every operation is atomic on its own. There is no transaction spanning
//! several operations.

mod error;

use std::collections::BTreeMap;

use dapp_encoding::{encode_native_withdrawal, encode_token_withdrawal};
use primitive_types::{H160, U256};
use tracing::{debug, warn};

pub use error::LedgerError;

/// The balance table an operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Asset {
    /// The native coin of the origin chain
    Native,
    /// A fungible token, identified by its contract address
    Token(H160),
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Asset::Native => write!(f, "native"),
            Asset::Token(token) => write!(f, "token {token:?}"),
        }
    }
}

type Balances = BTreeMap<H160, U256>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ledger {
    native: Balances,
    tokens: BTreeMap<H160, Balances>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    fn balances(&self, asset: &Asset) -> Option<&Balances> {
        match asset {
            Asset::Native => Some(&self.native),
            Asset::Token(token) => self.tokens.get(token),
        }
    }

    /// Balance of `owner`, zero when unknown.
    pub fn balance_of(&self, asset: &Asset, owner: &H160) -> U256 {
        self.balances(asset)
            .and_then(|balances| balances.get(owner))
            .copied()
            .unwrap_or_default()
    }

    /// Owners holding a non-zero balance, in ascending byte order.
    pub fn addresses(&self, asset: &Asset) -> Vec<H160> {
        self.balances(asset)
            .map(|balances| balances.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Tokens with at least one non-zero balance, in ascending byte order.
    pub fn tokens(&self) -> Vec<H160> {
        self.tokens.keys().copied().collect()
    }

    fn set_balance(&mut self, asset: &Asset, owner: &H160, value: U256) {
        match asset {
            Asset::Native => {
                if value.is_zero() {
                    self.native.remove(owner);
                } else {
                    self.native.insert(*owner, value);
                }
            }
            Asset::Token(token) => {
                if value.is_zero() {
                    if let Some(balances) = self.tokens.get_mut(token) {
                        balances.remove(owner);
                        if balances.is_empty() {
                            self.tokens.remove(token);
                        }
                    }
                } else {
                    self.tokens.entry(*token).or_default().insert(*owner, value);
                }
            }
        }
    }

    /// Credits `amount` to `owner`.
    ///
    /// The asset already left the origin chain, so a deposit never fails:
    /// a balance that would exceed `U256::MAX` saturates instead. Returns
    /// `true` when that happened.
    pub fn deposit(&mut self, asset: &Asset, owner: &H160, amount: &U256) -> bool {
        let (balance, saturated) = match self.balance_of(asset, owner).checked_add(*amount) {
            Some(balance) => (balance, false),
            None => {
                warn!(%asset, ?owner, %amount, "Deposit overflows balance, saturating");
                (U256::MAX, true)
            }
        };
        self.set_balance(asset, owner, balance);
        debug!(%asset, ?owner, %amount, %balance, "Deposit credited");
        saturated
    }

    /// Moves `amount` from `src` to `dst`. Either both balances change or
    /// none does.
    pub fn transfer(
        &mut self,
        asset: &Asset,
        src: &H160,
        dst: &H160,
        amount: &U256,
    ) -> Result<(), LedgerError> {
        if src == dst {
            return Err(LedgerError::SelfTransfer);
        }
        let src_balance = self.debit(asset, src, amount)?;
        let dst_balance = self
            .balance_of(asset, dst)
            .checked_add(*amount)
            .ok_or(LedgerError::BalanceOverflow)?;

        self.set_balance(asset, src, src_balance);
        self.set_balance(asset, dst, dst_balance);
        debug!(%asset, ?src, ?dst, %amount, "Transfer committed");
        Ok(())
    }

    /// Removes `amount` from `owner` and returns the voucher payload that
    /// releases it on the origin chain.
    pub fn withdraw(
        &mut self,
        asset: &Asset,
        owner: &H160,
        amount: &U256,
    ) -> Result<Vec<u8>, LedgerError> {
        let balance = self.debit(asset, owner, amount)?;
        self.set_balance(asset, owner, balance);
        debug!(%asset, ?owner, %amount, "Withdrawal committed");

        Ok(match asset {
            Asset::Native => encode_native_withdrawal(owner, amount),
            Asset::Token(_) => encode_token_withdrawal(owner, amount),
        })
    }

    /// Balance of `owner` after removing `amount`, without committing it.
    fn debit(&self, asset: &Asset, owner: &H160, amount: &U256) -> Result<U256, LedgerError> {
        let balance = self.balance_of(asset, owner);
        balance
            .checked_sub(*amount)
            .ok_or(LedgerError::InsufficientFunds {
                balance,
                requested: *amount,
            })
    }
}
