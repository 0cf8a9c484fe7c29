// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use dapp_runtime::{AdvanceHost, Application, Deposit, InspectHost, Metadata};

/// Emits a voucher to the sender, a notice and a report for each advance
/// input, and a report for each inspect input.
pub struct EchoApp;

impl Application for EchoApp {
    fn advance(
        &mut self,
        host: &mut dyn AdvanceHost,
        metadata: &Metadata,
        _deposit: Option<&Deposit>,
        payload: &[u8],
    ) -> anyhow::Result<()> {
        host.voucher(&metadata.msg_sender, payload);
        host.notice(payload);
        host.report(payload);
        Ok(())
    }

    fn inspect(&mut self, host: &mut dyn InspectHost, payload: &[u8]) -> anyhow::Result<()> {
        host.report(payload);
        Ok(())
    }
}
