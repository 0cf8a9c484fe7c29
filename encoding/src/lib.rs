// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Binary layouts exchanged with the origin chain.
//!
//! Portals prepend a fixed-width header to the application payload of
//! every deposit they relay. Withdrawals travel the other way as vouchers
//! whose payload is a Solidity ABI encoded contract call.
//!
//! All integers are big-endian and unsigned. Addresses are 20 bytes and
//! magnitudes are 32 bytes.

pub mod abi;
pub mod deposit;
pub mod error;
pub mod hex_string;
pub mod withdrawal;

pub use deposit::{
    decode_app_address, decode_native_deposit, decode_token_deposit,
    encode_native_deposit, encode_token_deposit, NativeDepositPayload,
    TokenDepositPayload,
};
pub use error::DecodeError;
pub use hex_string::HexString;
pub use withdrawal::{encode_native_withdrawal, encode_token_withdrawal};

/// Size of an address in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// Size of an unsigned 256-bit magnitude in bytes.
pub const U256_SIZE: usize = 32;
