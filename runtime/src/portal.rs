// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Recognition of inputs sent by the portals and the address relay.

use dapp_encoding::{decode_app_address, decode_native_deposit, decode_token_deposit, DecodeError};
use dapp_ledger::{Asset, Ledger};
use primitive_types::H160;
use tracing::debug;

use crate::address_book::AddressBook;
use crate::config::ProtocolFlags;
use crate::deposit::{Deposit, NativeDeposit, TokenDeposit};

/// Well-known sender of an advance input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Portal {
    AppAddressRelay,
    Native,
    Token,
}

/// What an advance input turned out to be.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The relay told us the application address. Terminal for the input.
    AppAddress(H160),
    /// A deposit already credited to the ledger, and the residual payload.
    Deposit(Deposit, &'a [u8]),
    /// An ordinary input; the payload is untouched.
    Plain(&'a [u8]),
}

#[derive(Debug, Clone)]
pub struct PortalRegistry {
    app_address_relay: Option<H160>,
    native: H160,
    token: H160,
    token_success_flag: bool,
}

impl PortalRegistry {
    pub fn new(address_book: &AddressBook, flags: &ProtocolFlags) -> Self {
        Self {
            app_address_relay: address_book.app_address_relay,
            native: address_book.ether_portal,
            token: address_book.erc20_portal,
            token_success_flag: flags.token_deposit_success_flag,
        }
    }

    /// The relay is looked up first, should it share an address with a portal.
    pub fn classify(&self, sender: &H160) -> Option<Portal> {
        if self.app_address_relay.as_ref() == Some(sender) {
            Some(Portal::AppAddressRelay)
        } else if *sender == self.native {
            Some(Portal::Native)
        } else if *sender == self.token {
            Some(Portal::Token)
        } else {
            None
        }
    }

    /// Decodes the input sent by `sender` and credits any deposit.
    ///
    /// On error the ledger is left untouched.
    pub fn resolve<'a>(
        &self,
        ledger: &mut Ledger,
        sender: &H160,
        payload: &'a [u8],
    ) -> Result<Resolution<'a>, DecodeError> {
        match self.classify(sender) {
            None => Ok(Resolution::Plain(payload)),
            Some(Portal::AppAddressRelay) => {
                let address = decode_app_address(payload)?;
                Ok(Resolution::AppAddress(address))
            }
            Some(Portal::Native) => {
                let decoded = decode_native_deposit(payload)?;
                ledger.deposit(&Asset::Native, &decoded.sender, &decoded.amount);
                let deposit = NativeDeposit {
                    sender: decoded.sender,
                    amount: decoded.amount,
                };
                debug!(%deposit, "Native deposit");
                Ok(Resolution::Deposit(Deposit::Native(deposit), decoded.payload))
            }
            Some(Portal::Token) => {
                let decoded = decode_token_deposit(payload, self.token_success_flag)?;
                ledger.deposit(
                    &Asset::Token(decoded.token),
                    &decoded.sender,
                    &decoded.amount,
                );
                let deposit = TokenDeposit {
                    token: decoded.token,
                    sender: decoded.sender,
                    amount: decoded.amount,
                };
                debug!(%deposit, "Token deposit");
                Ok(Resolution::Deposit(Deposit::Token(deposit), decoded.payload))
            }
        }
    }
}
