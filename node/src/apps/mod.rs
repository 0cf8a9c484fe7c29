// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Demo applications served by the node.

mod address;
mod echo;
mod error;
mod honeypot;
mod panic;
mod wallet;

use dapp_runtime::{Application, H160};
use hex_literal::hex;

pub use address::AddressApp;
pub use echo::EchoApp;
pub use error::ErrorApp;
pub use honeypot::HoneypotApp;
pub use panic::PanicApp;
pub use wallet::WalletApp;

/// Owner of the honeypot: the first development account.
pub const HONEYPOT_OWNER: H160 = H160(hex!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Example {
    /// Echo every input as a voucher, a notice and a report
    Echo,
    /// Reject every input
    Error,
    /// Ether vault only its owner can withdraw from
    Honeypot,
    /// Panic on every input
    Panic,
    /// Report the application address on inspect
    Address,
    /// Custodial Ether and token wallet
    Wallet,
}

impl Example {
    pub fn application(self) -> Box<dyn Application> {
        match self {
            Example::Echo => Box::new(EchoApp),
            Example::Error => Box::new(ErrorApp),
            Example::Honeypot => Box::new(HoneypotApp::new(HONEYPOT_OWNER)),
            Example::Panic => Box::new(PanicApp),
            Example::Address => Box::new(AddressApp),
            Example::Wallet => Box::new(WalletApp),
        }
    }
}
