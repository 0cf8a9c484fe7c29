// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Portal deposit payloads.
//!
//! A portal relays an asset transfer from the origin chain by adding an
//! input whose payload starts with a fixed header:
//!
//! ```text
//! native coin:  sender(20) | amount(32) | payload(*)
//! token:        [success(1)] | token(20) | sender(20) | amount(32) | payload(*)
//! ```
//!
//! The trailing bytes are the application payload the deposit was
//! piggy-backed onto. An empty remainder is valid.
//!
//! The leading success byte of token deposits only exists in older portal
//! versions, hence the `with_success_flag` switch.
//!
//! The address relay sends a bare `address(20)`.

use primitive_types::{H160, U256};

use crate::error::{DecodeError, Expected};
use crate::{ADDRESS_SIZE, U256_SIZE};

/// Header size of a native coin deposit.
pub const NATIVE_DEPOSIT_HEADER_SIZE: usize = ADDRESS_SIZE + U256_SIZE;

/// Header size of a token deposit, success flag excluded.
pub const TOKEN_DEPOSIT_HEADER_SIZE: usize = 2 * ADDRESS_SIZE + U256_SIZE;

/// Native coin deposit parsed from a portal payload.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NativeDepositPayload<'a> {
    /// Account that sent the coins on the origin chain
    pub sender: H160,
    /// Deposited amount
    pub amount: U256,
    /// Application payload following the header
    pub payload: &'a [u8],
}

/// Token deposit parsed from a portal payload.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TokenDepositPayload<'a> {
    /// Token contract on the origin chain
    pub token: H160,
    /// Account that sent the tokens on the origin chain
    pub sender: H160,
    /// Deposited amount
    pub amount: U256,
    /// Application payload following the header
    pub payload: &'a [u8],
}

/// Consumes fixed-size fields from the front of a buffer.
struct Cursor<'a> {
    bytes: &'a [u8],
}

impl<'a> Cursor<'a> {
    fn address(&mut self) -> H160 {
        let (head, tail) = self.bytes.split_at(ADDRESS_SIZE);
        self.bytes = tail;
        H160::from_slice(head)
    }

    fn u256(&mut self) -> U256 {
        let (head, tail) = self.bytes.split_at(U256_SIZE);
        self.bytes = tail;
        U256::from_big_endian(head)
    }

    fn byte(&mut self) -> u8 {
        let (head, tail) = self.bytes.split_at(1);
        self.bytes = tail;
        head[0]
    }
}

fn require_at_least(
    what: &'static str,
    bytes: &[u8],
    size: usize,
) -> Result<(), DecodeError> {
    if bytes.len() < size {
        Err(DecodeError::MalformedPayload {
            what,
            expected: Expected::AtLeast(size),
            actual: bytes.len(),
        })
    } else {
        Ok(())
    }
}

/// Tries to parse a native coin deposit.
pub fn decode_native_deposit(bytes: &[u8]) -> Result<NativeDepositPayload<'_>, DecodeError> {
    require_at_least("native deposit", bytes, NATIVE_DEPOSIT_HEADER_SIZE)?;

    let mut cursor = Cursor { bytes };
    let sender = cursor.address();
    let amount = cursor.u256();

    Ok(NativeDepositPayload {
        sender,
        amount,
        payload: cursor.bytes,
    })
}

/// Tries to parse a token deposit.
///
/// When `with_success_flag` is set, a zero leading byte means the
/// transfer failed on the origin chain and nothing was deposited.
pub fn decode_token_deposit(
    bytes: &[u8],
    with_success_flag: bool,
) -> Result<TokenDepositPayload<'_>, DecodeError> {
    let header_size = TOKEN_DEPOSIT_HEADER_SIZE + usize::from(with_success_flag);
    require_at_least("token deposit", bytes, header_size)?;

    let mut cursor = Cursor { bytes };
    if with_success_flag && cursor.byte() == 0 {
        return Err(DecodeError::FailedTransfer);
    }
    let token = cursor.address();
    let sender = cursor.address();
    let amount = cursor.u256();

    Ok(TokenDepositPayload {
        token,
        sender,
        amount,
        payload: cursor.bytes,
    })
}

/// Tries to parse the message sent by the application address relay.
pub fn decode_app_address(bytes: &[u8]) -> Result<H160, DecodeError> {
    if bytes.len() != ADDRESS_SIZE {
        return Err(DecodeError::MalformedPayload {
            what: "application address relay",
            expected: Expected::Exactly(ADDRESS_SIZE),
            actual: bytes.len(),
        });
    }
    Ok(H160::from_slice(bytes))
}

/// Builds the payload the native coin portal would send.
pub fn encode_native_deposit(sender: &H160, amount: &U256, payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(NATIVE_DEPOSIT_HEADER_SIZE + payload.len());
    bytes.extend_from_slice(sender.as_bytes());
    bytes.extend_from_slice(&Into::<[u8; 32]>::into(*amount));
    bytes.extend_from_slice(payload);
    bytes
}

/// Builds the payload the token portal would send for a successful transfer.
pub fn encode_token_deposit(
    token: &H160,
    sender: &H160,
    amount: &U256,
    payload: &[u8],
    with_success_flag: bool,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(TOKEN_DEPOSIT_HEADER_SIZE + 1 + payload.len());
    if with_success_flag {
        bytes.push(1);
    }
    bytes.extend_from_slice(token.as_bytes());
    bytes.extend_from_slice(sender.as_bytes());
    bytes.extend_from_slice(&Into::<[u8; 32]>::into(*amount));
    bytes.extend_from_slice(payload);
    bytes
}
