// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Withdrawal vouchers.
//!
//! Assets leave the rollup through vouchers: contract calls executed on
//! the origin chain once the epoch is settled. A native coin withdrawal
//! asks the application contract to release coins, while a token
//! withdrawal calls `transfer` on the token contract, which the
//! application contract holds in custody.
//!
//! Both calls share the same layout:
//!
//! ```text
//! selector(4) | padding(12) | receiver(20) | amount(32)
//! ```

use primitive_types::{H160, U256};

use crate::abi::CallData;

/// Keccak256 of withdrawEther(address,uint256), first 4 bytes
/// This is function selector: https://docs.soliditylang.org/en/latest/abi-spec.html#function-selector
pub const WITHDRAW_ETHER_METHOD_ID: &[u8; 4] = b"\x52\x2f\x68\x15";

/// Keccak256 of transfer(address,uint256), first 4 bytes
pub const TRANSFER_METHOD_ID: &[u8; 4] = b"\xa9\x05\x9c\xbb";

/// Returns the call data releasing `amount` native coins to `receiver`.
///
/// Signature: withdrawEther(address,uint256)
pub fn encode_native_withdrawal(receiver: &H160, amount: &U256) -> Vec<u8> {
    CallData::new(WITHDRAW_ETHER_METHOD_ID, 2)
        .address(receiver)
        .uint256(amount)
        .finish()
}

/// Returns the call data moving `amount` tokens to `receiver`.
///
/// Signature: transfer(address,uint256)
pub fn encode_token_withdrawal(receiver: &H160, amount: &U256) -> Vec<u8> {
    CallData::new(TRANSFER_METHOD_ID, 2)
        .address(receiver)
        .uint256(amount)
        .finish()
}
