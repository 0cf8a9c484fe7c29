// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use crate::deposit::Deposit;
use crate::host::{AdvanceHost, InspectHost};
use crate::input::Metadata;

/// Logic of a rollup application.
///
/// Returning an error, or panicking, rejects the input. Ledger operations
/// performed before that point are kept.
pub trait Application {
    /// Advances the application state.
    ///
    /// `deposit` is set when the input came from a portal, in which case
    /// `payload` is what follows the deposit header.
    fn advance(
        &mut self,
        host: &mut dyn AdvanceHost,
        metadata: &Metadata,
        deposit: Option<&Deposit>,
        payload: &[u8],
    ) -> anyhow::Result<()>;

    /// Answers a query without changing state.
    fn inspect(&mut self, host: &mut dyn InspectHost, payload: &[u8]) -> anyhow::Result<()>;
}

impl<A: Application + ?Sized> Application for Box<A> {
    fn advance(
        &mut self,
        host: &mut dyn AdvanceHost,
        metadata: &Metadata,
        deposit: Option<&Deposit>,
        payload: &[u8],
    ) -> anyhow::Result<()> {
        (**self).advance(host, metadata, deposit, payload)
    }

    fn inspect(&mut self, host: &mut dyn InspectHost, payload: &[u8]) -> anyhow::Result<()> {
        (**self).inspect(host, payload)
    }
}
