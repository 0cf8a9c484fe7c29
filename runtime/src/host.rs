// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Capabilities exposed to the application.
//!
//! Inspect calls only ever see an [`InspectHost`], so they cannot emit
//! vouchers or notices nor touch the ledger.

use std::fmt;

use dapp_ledger::{Asset, Ledger};
use primitive_types::{H160, U256};
use tracing::debug;

use crate::address_book::AddressBook;
use crate::error::InputError;
use crate::output::{Notice, Output, Outputs, Report, Voucher};

/// Read-only view of the environment, plus reports.
pub trait InspectHost {
    /// Buffers a report. Reports are sent even when the input is rejected.
    fn report(&mut self, payload: &[u8]);

    /// Buffers a report holding formatted text.
    fn report_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.report(args.to_string().as_bytes())
    }

    /// Address of the application contract, once it has been relayed.
    fn app_address(&self) -> Option<H160>;

    fn address_book(&self) -> &AddressBook;

    fn balance_of(&self, asset: &Asset, owner: &H160) -> U256;

    fn addresses(&self, asset: &Asset) -> Vec<H160>;

    fn tokens(&self) -> Vec<H160>;
}

/// Capabilities available while advancing the state.
pub trait AdvanceHost: InspectHost {
    /// Buffers a voucher and returns its index within the input.
    fn voucher(&mut self, destination: &H160, payload: &[u8]) -> usize;

    /// Buffers a voucher sending `value` native coins along with the call.
    fn voucher_with_value(&mut self, destination: &H160, value: &U256, payload: &[u8]) -> usize;

    /// Buffers a notice and returns its index within the input.
    fn notice(&mut self, payload: &[u8]) -> usize;

    fn transfer(
        &mut self,
        asset: &Asset,
        src: &H160,
        dst: &H160,
        amount: &U256,
    ) -> Result<(), InputError>;

    /// Debits `owner` and emits the voucher releasing the funds on the
    /// origin chain. Returns the voucher index.
    fn withdraw(&mut self, asset: &Asset, owner: &H160, amount: &U256)
        -> Result<usize, InputError>;
}

/// State shared by every input of a run.
#[derive(Debug, Default)]
pub struct Environment {
    address_book: AddressBook,
    ledger: Ledger,
    app_address: Option<H160>,
    outputs: Outputs,
}

impl Environment {
    pub fn new(address_book: AddressBook) -> Self {
        Self {
            address_book,
            ..Self::default()
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub(crate) fn set_app_address(&mut self, address: H160) {
        if self.app_address != Some(address) {
            debug!(?address, "Application address set");
        }
        self.app_address = Some(address);
    }

    /// Outputs buffered by the current input.
    pub fn outputs(&self) -> impl Iterator<Item = &Output> {
        self.outputs.iter()
    }

    pub(crate) fn take_outputs(&mut self) -> Vec<Output> {
        self.outputs.take()
    }

    pub(crate) fn reset_outputs(&mut self) {
        self.outputs.take();
    }
}

impl InspectHost for Environment {
    fn report(&mut self, payload: &[u8]) {
        self.outputs.push_report(Report {
            payload: payload.to_vec(),
        });
    }

    fn app_address(&self) -> Option<H160> {
        self.app_address
    }

    fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    fn balance_of(&self, asset: &Asset, owner: &H160) -> U256 {
        self.ledger.balance_of(asset, owner)
    }

    fn addresses(&self, asset: &Asset) -> Vec<H160> {
        self.ledger.addresses(asset)
    }

    fn tokens(&self) -> Vec<H160> {
        self.ledger.tokens()
    }
}

impl AdvanceHost for Environment {
    fn voucher(&mut self, destination: &H160, payload: &[u8]) -> usize {
        self.outputs.push_voucher(Voucher {
            destination: *destination,
            value: None,
            payload: payload.to_vec(),
        })
    }

    fn voucher_with_value(&mut self, destination: &H160, value: &U256, payload: &[u8]) -> usize {
        self.outputs.push_voucher(Voucher {
            destination: *destination,
            value: Some(*value),
            payload: payload.to_vec(),
        })
    }

    fn notice(&mut self, payload: &[u8]) -> usize {
        self.outputs.push_notice(Notice {
            payload: payload.to_vec(),
        })
    }

    fn transfer(
        &mut self,
        asset: &Asset,
        src: &H160,
        dst: &H160,
        amount: &U256,
    ) -> Result<(), InputError> {
        Ok(self.ledger.transfer(asset, src, dst, amount)?)
    }

    fn withdraw(
        &mut self,
        asset: &Asset,
        owner: &H160,
        amount: &U256,
    ) -> Result<usize, InputError> {
        let destination = match asset {
            Asset::Native => self.app_address.ok_or(InputError::AppAddressUnknown)?,
            Asset::Token(token) => *token,
        };
        let payload = self.ledger.withdraw(asset, owner, amount)?;
        Ok(self.voucher(&destination, &payload))
    }
}
