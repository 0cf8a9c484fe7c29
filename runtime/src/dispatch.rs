// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Per-input control flow.
//!
//! An advance input is first matched against the portals. Relay messages
//! and inputs a portal cannot decode never reach the application; every
//! other input is handed to it together with the deposit, if any.
//!
//! The application runs behind [`catch_fault`], so a panic only rejects
//! the current input.

use tracing::{debug, error};

use crate::address_book::AddressBook;
use crate::application::Application;
use crate::config::ProtocolFlags;
use crate::error::InputError;
use crate::host::{AdvanceHost, Environment, InspectHost};
use crate::input::{AdvanceInput, Input, InspectInput};
use crate::output::Output;
use crate::panic_protection::catch_fault;
use crate::portal::{PortalRegistry, Resolution};

pub struct Dispatcher<A> {
    app: A,
    env: Environment,
    portals: PortalRegistry,
    flags: ProtocolFlags,
}

impl<A: Application> Dispatcher<A> {
    pub fn new(app: A, address_book: AddressBook, flags: ProtocolFlags) -> Self {
        let portals = PortalRegistry::new(&address_book, &flags);
        Self {
            app,
            env: Environment::new(address_book),
            portals,
            flags,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn application(&self) -> &A {
        &self.app
    }

    /// Processes one input. Outputs of the previous input are discarded.
    ///
    /// Ledger operations that succeeded before an error are kept.
    pub fn handle(&mut self, input: &Input) -> Result<(), InputError> {
        self.env.reset_outputs();

        let result = match input {
            Input::Advance(advance) => self.advance(advance),
            Input::Inspect(inspect) => self.inspect(inspect),
        };

        if let Err(err) = &result {
            error!("Input rejected: {err}");
        }
        result
    }

    /// Outputs buffered by the last input, in emission order.
    pub fn take_outputs(&mut self) -> Vec<Output> {
        self.env.take_outputs()
    }

    fn advance(&mut self, input: &AdvanceInput) -> Result<(), InputError> {
        let metadata = &input.metadata;
        debug!(
            index = metadata.input_index,
            sender = ?metadata.msg_sender,
            size = input.payload.len(),
            "Advance"
        );

        if self.flags.app_address_from_metadata {
            if let Some(address) = metadata.app_contract {
                self.env.set_app_address(address);
            }
        }

        let resolution = self
            .portals
            .resolve(self.env.ledger_mut(), &metadata.msg_sender, &input.payload)?;

        let (deposit, payload) = match resolution {
            Resolution::AppAddress(address) => {
                self.env.set_app_address(address);
                return Ok(());
            }
            Resolution::Deposit(deposit, payload) => (Some(deposit), payload),
            Resolution::Plain(payload) => (None, payload),
        };

        let Self { app, env, .. } = self;
        let host: &mut dyn AdvanceHost = env;
        catch_fault(|| app.advance(host, metadata, deposit.as_ref(), payload))?
            .map_err(InputError::from_application)
    }

    fn inspect(&mut self, input: &InspectInput) -> Result<(), InputError> {
        debug!(size = input.payload.len(), "Inspect");

        let Self { app, env, .. } = self;
        let host: &mut dyn InspectHost = env;
        catch_fault(|| app.inspect(host, &input.payload))?.map_err(InputError::from_application)
    }
}
