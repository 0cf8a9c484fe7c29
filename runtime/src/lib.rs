// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Runtime of a rollup application.
//!
//! The [`Runner`] asks the rollup server for the next input, hands it to
//! the [`Dispatcher`] and reports whether the input was accepted. The
//! dispatcher recognises deposits made through the portals, keeps the
//! [`Ledger`] up to date and calls the user [`Application`].

pub mod address_book;
pub mod application;
pub mod config;
pub mod deposit;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod http;
pub mod input;
pub mod output;
pub mod panic_protection;
pub mod portal;
pub mod rollup;
pub mod runner;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

use std::future::Future;

pub use address_book::AddressBook;
pub use application::Application;
pub use config::{ProtocolFlags, RuntimeConfig};
pub use dapp_encoding::DecodeError;
pub use dapp_ledger::{Asset, Ledger, LedgerError};
pub use deposit::{Deposit, NativeDeposit, TokenDeposit};
pub use dispatch::Dispatcher;
pub use error::{InputError, TransportError};
pub use host::{AdvanceHost, Environment, InspectHost};
pub use http::RollupHttp;
pub use input::{AdvanceInput, FinishStatus, Input, InspectInput, Metadata};
pub use output::{Notice, Output, Report, Voucher};
pub use rollup::Rollup;
pub use runner::Runner;

pub use primitive_types::{H160, U256};

/// Serves `app` against the rollup server configured in `config` until
/// the transport fails or `shutdown` resolves.
pub async fn run<A, S>(config: &RuntimeConfig, app: A, shutdown: S) -> Result<(), TransportError>
where
    A: Application,
    S: Future<Output = ()>,
{
    let rollup = RollupHttp::new(&config.rollup_url)?;
    let dispatcher = Dispatcher::new(app, config.address_book.clone(), config.flags.clone());
    Runner::new(rollup, dispatcher).run(shutdown).await
}
