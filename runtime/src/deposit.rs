// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Deposits handed to the application.
//!
//! The ledger is credited before the application runs; a deposit only
//! tells the application what just arrived.

use std::fmt;

use dapp_ledger::Asset;
use primitive_types::{H160, U256};

/// Number of decimals of the native coin.
pub const NATIVE_DECIMALS: usize = 18;

/// Native coin deposit, amount in wei.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeDeposit {
    pub sender: H160,
    pub amount: U256,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDeposit {
    pub token: H160,
    pub sender: H160,
    pub amount: U256,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deposit {
    Native(NativeDeposit),
    Token(TokenDeposit),
}

impl Deposit {
    pub fn sender(&self) -> &H160 {
        match self {
            Deposit::Native(deposit) => &deposit.sender,
            Deposit::Token(deposit) => &deposit.sender,
        }
    }

    pub fn amount(&self) -> &U256 {
        match self {
            Deposit::Native(deposit) => &deposit.amount,
            Deposit::Token(deposit) => &deposit.amount,
        }
    }

    pub fn asset(&self) -> Asset {
        match self {
            Deposit::Native(_) => Asset::Native,
            Deposit::Token(deposit) => Asset::Token(deposit.token),
        }
    }
}

/// Formats a wei amount in ether, keeping every decimal.
pub fn format_ether(wei: &U256) -> String {
    let unit = U256::exp10(NATIVE_DECIMALS);
    let (integer, fraction) = wei.div_mod(unit);
    format!("{integer}.{:0width$}", fraction.as_u64(), width = NATIVE_DECIMALS)
}

impl fmt::Display for NativeDeposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} deposited {} Ether",
            self.sender,
            format_ether(&self.amount)
        )
    }
}

impl fmt::Display for TokenDeposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} deposited {} of {:?} token",
            self.sender, self.amount, self.token
        )
    }
}

impl fmt::Display for Deposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deposit::Native(deposit) => deposit.fmt(f),
            Deposit::Token(deposit) => deposit.fmt(f),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_native_deposit_display() {
        let deposit = NativeDeposit {
            sender: H160::repeat_byte(0xfa),
            amount: U256::exp10(18) + U256::from(5),
        };
        assert_eq!(
            deposit.to_string(),
            "0xfafafafafafafafafafafafafafafafafafafafa deposited 1.000000000000000005 Ether"
        );
    }

    #[test]
    fn test_format_ether() {
        assert_eq!(format_ether(&U256::zero()), "0.000000000000000000");
        assert_eq!(
            format_ether(&U256::from(123_000_000_000_000_000u64)),
            "0.123000000000000000"
        );
        assert_eq!(
            format_ether(&U256::MAX),
            "115792089237316195423570985008687907853269984665640564039457.584007913129639935"
        );
    }

    #[test]
    fn test_token_deposit_display() {
        let deposit = Deposit::Token(TokenDeposit {
            token: H160::repeat_byte(0xba),
            sender: H160::repeat_byte(0xfa),
            amount: U256::from(123),
        });
        assert_eq!(
            deposit.to_string(),
            "0xfafafafafafafafafafafafafafafafafafafafa deposited 123 of \
             0xbabababababababababababababababababababa token"
        );
        assert_eq!(deposit.asset(), Asset::Token(H160::repeat_byte(0xba)));
        assert_eq!(deposit.sender(), &H160::repeat_byte(0xfa));
        assert_eq!(deposit.amount(), &U256::from(123));
    }
}
