// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use anyhow::{bail, ensure};
use dapp_runtime::{AdvanceHost, Application, Asset, Deposit, InspectHost, Metadata, H160};
use tracing::info;

/// Custodial wallet over Ether and tokens.
///
/// Deposits stay in the depositor's balance and are acknowledged with a
/// notice. An advance input without deposit withdraws the sender's whole
/// balance: of the token whose address is the payload, or of Ether when
/// the payload is empty. Inspecting an address reports its balances, one
/// line per asset.
pub struct WalletApp;

fn asset_of(payload: &[u8]) -> anyhow::Result<Asset> {
    match payload.len() {
        0 => Ok(Asset::Native),
        20 => Ok(Asset::Token(H160::from_slice(payload))),
        len => bail!("expected an empty payload or a token address, got {len} bytes"),
    }
}

impl Application for WalletApp {
    fn advance(
        &mut self,
        host: &mut dyn AdvanceHost,
        metadata: &Metadata,
        deposit: Option<&Deposit>,
        payload: &[u8],
    ) -> anyhow::Result<()> {
        if let Some(deposit) = deposit {
            info!(
                sender = ?deposit.sender(),
                amount = %deposit.amount(),
                asset = %deposit.asset(),
                "Deposit received"
            );
            host.notice(deposit.to_string().as_bytes());
            return Ok(());
        }

        let asset = asset_of(payload)?;
        let owner = metadata.msg_sender;
        let balance = host.balance_of(&asset, &owner);
        ensure!(!balance.is_zero(), "nothing to withdraw");
        host.withdraw(&asset, &owner, &balance)?;
        info!(%asset, ?owner, %balance, "Withdrawn");
        Ok(())
    }

    fn inspect(&mut self, host: &mut dyn InspectHost, payload: &[u8]) -> anyhow::Result<()> {
        ensure!(payload.len() == 20, "expected an address");
        let owner = H160::from_slice(payload);

        let tokens = host.tokens().into_iter().map(Asset::Token);
        for asset in std::iter::once(Asset::Native).chain(tokens) {
            let balance = host.balance_of(&asset, &owner);
            if !balance.is_zero() {
                host.report_fmt(format_args!("{asset}: {balance}"));
            }
        }
        Ok(())
    }
}
