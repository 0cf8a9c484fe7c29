// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! ABI utility functions
//!
//! The bare minimum for building and reading contract call parameters
//! encoded with the Solidity ABI standard. Only static types are
//! supported. See the
//! [Contract ABI specification](https://docs.soliditylang.org/en/develop/abi-spec.html)

use primitive_types::{H160, U256};

use crate::{ADDRESS_SIZE, U256_SIZE};

/// Size of a function selector in bytes.
pub const SELECTOR_SIZE: usize = 4;

/// All arguments in ABI encoding are padded to 32 bytes
/// https://docs.soliditylang.org/en/develop/abi-spec.html#formal-specification-of-the-encoding
pub const ABI_H160_LEFT_PADDING: [u8; 12] = [0u8; 12];

/// Builder for the call data of a function taking static arguments only.
#[derive(Debug, Clone)]
pub struct CallData {
    data: Vec<u8>,
}

impl CallData {
    /// Starts a call to the function identified by `selector`.
    pub fn new(selector: &[u8; SELECTOR_SIZE], arguments: usize) -> Self {
        let mut data = Vec::with_capacity(SELECTOR_SIZE + arguments * U256_SIZE);
        data.extend_from_slice(selector);
        Self { data }
    }

    /// Appends an `address` argument, right-aligned in its slot.
    pub fn address(mut self, address: &H160) -> Self {
        self.data.extend_from_slice(&ABI_H160_LEFT_PADDING);
        self.data.extend_from_slice(address.as_bytes());
        debug_assert!((self.data.len() - SELECTOR_SIZE) % U256_SIZE == 0);
        self
    }

    /// Appends a `uint256` argument.
    pub fn uint256(mut self, value: &U256) -> Self {
        self.data.extend_from_slice(&Into::<[u8; 32]>::into(*value));
        debug_assert!((self.data.len() - SELECTOR_SIZE) % U256_SIZE == 0);
        self
    }

    pub fn finish(self) -> Vec<u8> {
        self.data
    }
}

/// Split call data into its selector and the argument area.
pub fn split_selector(call_data: &[u8]) -> Option<([u8; SELECTOR_SIZE], &[u8])> {
    let selector = call_data.get(..SELECTOR_SIZE)?.try_into().ok()?;
    Some((selector, &call_data[SELECTOR_SIZE..]))
}

/// Get a single 32 bytes/256 bit parameter from a contract call, input data buffer
pub fn u256_parameter(input_data: &[u8], parameter_number: usize) -> Option<U256> {
    let location = parameter_number * U256_SIZE;
    input_data
        .get(location..location + U256_SIZE)
        .map(U256::from_big_endian)
}

/// Get an address parameter from the input data buffer
pub fn h160_parameter(input_data: &[u8], parameter_number: usize) -> Option<H160> {
    let location = parameter_number * U256_SIZE;
    let slot = input_data.get(location..location + U256_SIZE)?;
    // Check leading zeroes
    let (padding, address) = slot.split_at(U256_SIZE - ADDRESS_SIZE);
    if padding.iter().all(|x| *x == 0u8) {
        Some(H160::from_slice(address))
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_call_data_layout() {
        let address = H160::repeat_byte(0xfa);
        let call = CallData::new(b"\x01\x02\x03\x04", 2)
            .address(&address)
            .uint256(&U256::from(100))
            .finish();

        assert_eq!(call.len(), 4 + 2 * 32);
        assert_eq!(&call[..4], b"\x01\x02\x03\x04");
        assert_eq!(&call[4..16], &[0u8; 12]);
        assert_eq!(&call[16..36], address.as_bytes());
        assert_eq!(call[67], 100);
        assert!(call[36..67].iter().all(|b| *b == 0));

        let (selector, args) = split_selector(&call).unwrap();
        assert_eq!(&selector, b"\x01\x02\x03\x04");
        assert_eq!(h160_parameter(args, 0), Some(address));
        assert_eq!(u256_parameter(args, 1), Some(U256::from(100)));
        assert_eq!(u256_parameter(args, 2), None);
    }

    #[test]
    fn test_h160_parameter_rejects_dirty_padding() {
        let mut slot = [0u8; 32];
        slot[0] = 1;
        assert_eq!(h160_parameter(&slot, 0), None);
    }
}
