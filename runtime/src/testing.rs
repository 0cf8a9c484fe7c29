// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Test doubles for applications built on the runtime.
//!
//! [`Harness`] drives a [`Dispatcher`] without any rollup server and
//! returns everything an input emitted, whatever its outcome.
//! [`MockRollup`] replays scripted inputs to a [`Runner`](crate::Runner).

use std::collections::VecDeque;

use dapp_encoding::{encode_native_deposit, encode_token_deposit};
use primitive_types::{H160, U256};

use crate::address_book::AddressBook;
use crate::application::Application;
use crate::config::ProtocolFlags;
use crate::dispatch::Dispatcher;
use crate::error::{InputError, TransportError};
use crate::host::{Environment, InspectHost};
use crate::input::{AdvanceInput, FinishStatus, Input, InspectInput, Metadata};
use crate::output::{Notice, Output, Report, Voucher};
use crate::rollup::Rollup;

/// Chain id stamped on the metadata of simulated inputs.
pub const TEST_CHAIN_ID: u64 = 31337;

/// Advance input with zeroed metadata.
pub fn advance_input(sender: H160, payload: &[u8]) -> Input {
    Input::Advance(AdvanceInput {
        metadata: Metadata {
            msg_sender: sender,
            input_index: 0,
            block_number: 0,
            timestamp: 0,
            chain_id: Some(TEST_CHAIN_ID),
            app_contract: None,
            prev_randao: None,
        },
        payload: payload.to_vec(),
    })
}

#[derive(Debug)]
pub struct AdvanceResult {
    pub metadata: Metadata,
    pub vouchers: Vec<Voucher>,
    pub notices: Vec<Notice>,
    pub reports: Vec<Report>,
    pub result: Result<(), InputError>,
}

#[derive(Debug)]
pub struct InspectResult {
    pub reports: Vec<Report>,
    pub result: Result<(), InputError>,
}

pub struct Harness<A> {
    dispatcher: Dispatcher<A>,
    input_index: u64,
    flags: ProtocolFlags,
}

impl<A: Application> Harness<A> {
    pub fn new(app: A) -> Self {
        Self::with_config(app, AddressBook::default(), ProtocolFlags::default())
    }

    pub fn with_config(app: A, address_book: AddressBook, flags: ProtocolFlags) -> Self {
        Self {
            dispatcher: Dispatcher::new(app, address_book, flags.clone()),
            input_index: 0,
            flags,
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        self.environment().address_book()
    }

    pub fn environment(&self) -> &Environment {
        self.dispatcher.environment()
    }

    pub fn application(&self) -> &A {
        self.dispatcher.application()
    }

    /// Sends an advance input. Input indices and block numbers increase
    /// with every call.
    pub fn advance(&mut self, sender: &H160, payload: &[u8]) -> AdvanceResult {
        let metadata = Metadata {
            msg_sender: *sender,
            input_index: self.input_index,
            block_number: self.input_index,
            timestamp: self.input_index * 12,
            chain_id: Some(TEST_CHAIN_ID),
            app_contract: self.environment().app_address(),
            prev_randao: None,
        };
        self.input_index += 1;

        let input = Input::Advance(AdvanceInput {
            metadata: metadata.clone(),
            payload: payload.to_vec(),
        });
        let result = self.dispatcher.handle(&input);

        let mut outcome = AdvanceResult {
            metadata,
            vouchers: vec![],
            notices: vec![],
            reports: vec![],
            result,
        };
        for output in self.dispatcher.take_outputs() {
            match output {
                Output::Voucher(voucher) => outcome.vouchers.push(voucher),
                Output::Notice(notice) => outcome.notices.push(notice),
                Output::Report(report) => outcome.reports.push(report),
            }
        }
        outcome
    }

    /// Deposits native coins through the portal.
    pub fn deposit_native(
        &mut self,
        sender: &H160,
        amount: &U256,
        payload: &[u8],
    ) -> AdvanceResult {
        let portal = self.address_book().ether_portal;
        self.advance(&portal, &encode_native_deposit(sender, amount, payload))
    }

    /// Deposits tokens through the portal.
    pub fn deposit_token(
        &mut self,
        token: &H160,
        sender: &H160,
        amount: &U256,
        payload: &[u8],
    ) -> AdvanceResult {
        let portal = self.address_book().erc20_portal;
        let payload = encode_token_deposit(
            token,
            sender,
            amount,
            payload,
            self.flags.token_deposit_success_flag,
        );
        self.advance(&portal, &payload)
    }

    /// Sends the application address through the relay.
    ///
    /// # Panics
    ///
    /// When the address book has no relay.
    pub fn relay_app_address(&mut self, address: &H160) -> AdvanceResult {
        let relay = self
            .address_book()
            .app_address_relay
            .expect("address book without relay");
        self.advance(&relay, address.as_bytes())
    }

    pub fn inspect(&mut self, payload: &[u8]) -> InspectResult {
        let input = Input::Inspect(InspectInput {
            payload: payload.to_vec(),
        });
        let result = self.dispatcher.handle(&input);
        let reports = self
            .dispatcher
            .take_outputs()
            .into_iter()
            .filter_map(|output| match output {
                Output::Report(report) => Some(report),
                _ => None,
            })
            .collect();
        InspectResult { reports, result }
    }
}

/// Scripted rollup server.
///
/// `None` entries answer "no input yet". Once the script is exhausted,
/// finish fails with a 503 status.
#[derive(Debug, Default)]
pub struct MockRollup {
    inputs: VecDeque<Option<Input>>,
    /// Statuses received by finish, in order
    pub finished: Vec<FinishStatus>,
    /// Outputs received, in order
    pub sent: Vec<Output>,
    vouchers: u64,
    notices: u64,
}

impl MockRollup {
    pub fn new(inputs: impl IntoIterator<Item = Option<Input>>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Rollup for MockRollup {
    async fn finish(&mut self, status: FinishStatus) -> Result<Option<Input>, TransportError> {
        self.finished.push(status);
        self.inputs.pop_front().ok_or_else(|| TransportError::Status {
            status: 503,
            body: "no more inputs".to_string(),
        })
    }

    async fn send_voucher(&mut self, voucher: &Voucher) -> Result<u64, TransportError> {
        self.sent.push(Output::Voucher(voucher.clone()));
        self.vouchers += 1;
        Ok(self.vouchers - 1)
    }

    async fn send_notice(&mut self, notice: &Notice) -> Result<u64, TransportError> {
        self.sent.push(Output::Notice(notice.clone()));
        self.notices += 1;
        Ok(self.notices - 1)
    }

    async fn send_report(&mut self, report: &Report) -> Result<(), TransportError> {
        self.sent.push(Output::Report(report.clone()));
        Ok(())
    }
}
