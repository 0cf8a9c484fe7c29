// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use anyhow::{bail, ensure};
use dapp_runtime::{AdvanceHost, Application, Asset, Deposit, InspectHost, Metadata, H160};
use tracing::info;

/// Ether vault. Every deposit ends up in the owner's balance and only the
/// owner can withdraw it. Each input reports the owner's balance as a
/// 32-byte big-endian integer.
pub struct HoneypotApp {
    owner: H160,
}

impl HoneypotApp {
    pub fn new(owner: H160) -> Self {
        Self { owner }
    }

    fn deposit(&self, host: &mut dyn AdvanceHost, deposit: &Deposit) -> anyhow::Result<()> {
        match deposit {
            Deposit::Native(deposit) => {
                if deposit.sender != self.owner {
                    host.transfer(&Asset::Native, &deposit.sender, &self.owner, &deposit.amount)?;
                }
                Ok(())
            }
            Deposit::Token(deposit) => bail!("unsupported deposit: {deposit}"),
        }
    }

    fn withdraw(&self, host: &mut dyn AdvanceHost, metadata: &Metadata) -> anyhow::Result<()> {
        ensure!(metadata.msg_sender == self.owner, "input not from owner");
        let balance = host.balance_of(&Asset::Native, &self.owner);
        ensure!(!balance.is_zero(), "nothing to withdraw");
        host.withdraw(&Asset::Native, &self.owner, &balance)?;
        info!(%balance, "Withdrawn");
        Ok(())
    }

    fn report_balance<H: InspectHost + ?Sized>(&self, host: &mut H) {
        let balance = host.balance_of(&Asset::Native, &self.owner);
        host.report(&Into::<[u8; 32]>::into(balance));
    }
}

impl Application for HoneypotApp {
    fn advance(
        &mut self,
        host: &mut dyn AdvanceHost,
        metadata: &Metadata,
        deposit: Option<&Deposit>,
        _payload: &[u8],
    ) -> anyhow::Result<()> {
        let result = match deposit {
            Some(deposit) => self.deposit(host, deposit),
            None => self.withdraw(host, metadata),
        };
        self.report_balance(host);
        result
    }

    fn inspect(&mut self, host: &mut dyn InspectHost, _payload: &[u8]) -> anyhow::Result<()> {
        self.report_balance(host);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use dapp_encoding::encode_native_withdrawal;
    use hex_literal::hex;
    use dapp_runtime::testing::{AdvanceResult, Harness};
    use dapp_runtime::U256;
    use pretty_assertions::assert_eq;

    const OWNER: H160 = H160([0xfa; 20]);
    const HACKER: H160 = H160([0xfe; 20]);
    const APP: H160 = H160(hex!("ab7528bb862fb57e8a2bcd567a2e929a0be56a5e"));
    const TOKEN: H160 = H160([0xba; 20]);

    fn harness() -> Harness<HoneypotApp> {
        let mut harness = Harness::new(HoneypotApp::new(OWNER));
        assert!(harness.relay_app_address(&APP).result.is_ok());
        harness
    }

    fn reported_balance(result: &AdvanceResult) -> U256 {
        assert_eq!(result.reports.len(), 1);
        U256::from_big_endian(&result.reports[0].payload)
    }

    #[test]
    fn test_deposits() {
        let mut harness = harness();

        let result = harness.deposit_native(&OWNER, &U256::from(100), b"");
        assert!(result.result.is_ok());
        assert_eq!(reported_balance(&result), U256::from(100));

        let result = harness.deposit_native(&HACKER, &U256::from(100), b"");
        assert!(result.result.is_ok());
        assert_eq!(reported_balance(&result), U256::from(200));
        assert!(harness
            .environment()
            .balance_of(&Asset::Native, &HACKER)
            .is_zero());
    }

    #[test]
    fn test_withdraw() {
        let mut harness = harness();
        harness.deposit_native(&OWNER, &U256::from(100), b"");

        let result = harness.advance(&OWNER, b"");
        assert!(result.result.is_ok());
        assert_eq!(reported_balance(&result), U256::zero());
        assert_eq!(result.vouchers.len(), 1);
        assert_eq!(result.vouchers[0].destination, APP);

        let mut expected = vec![0x52, 0x2f, 0x68, 0x15];
        expected.extend_from_slice(&[0u8; 12]);
        expected.extend_from_slice(OWNER.as_bytes());
        expected.extend_from_slice(&Into::<[u8; 32]>::into(U256::from(100)));
        assert_eq!(result.vouchers[0].payload, expected);
        assert_eq!(
            expected,
            encode_native_withdrawal(&OWNER, &U256::from(100))
        );
    }

    #[test]
    fn test_withdraw_without_funds() {
        let mut harness = harness();
        let result = harness.advance(&OWNER, b"");
        let error = result.result.unwrap_err();
        assert!(error.to_string().contains("nothing to withdraw"));
    }

    #[test]
    fn test_withdraw_from_hacker() {
        let mut harness = harness();
        harness.deposit_native(&OWNER, &U256::from(100), b"");

        let result = harness.advance(&HACKER, b"");
        let error = result.result.as_ref().unwrap_err();
        assert!(error.to_string().contains("input not from owner"));
        assert_eq!(reported_balance(&result), U256::from(100));
    }

    #[test]
    fn test_token_deposit_rejected() {
        let mut harness = harness();
        let result = harness.deposit_token(&TOKEN, &OWNER, &U256::from(1), b"");
        assert!(result
            .result
            .unwrap_err()
            .to_string()
            .contains("unsupported deposit"));
        // The deposit itself is already in the ledger.
        assert_eq!(
            harness
                .environment()
                .balance_of(&Asset::Token(TOKEN), &OWNER),
            U256::one()
        );
    }

    #[test]
    fn test_withdraw_before_relay() {
        let mut harness = Harness::new(HoneypotApp::new(OWNER));
        harness.deposit_native(&OWNER, &U256::from(100), b"");

        let result = harness.advance(&OWNER, b"");
        assert!(result.result.is_err());
        assert_eq!(reported_balance(&result), U256::from(100));
    }

    #[test]
    fn test_inspect() {
        let mut harness = harness();
        harness.deposit_native(&HACKER, &U256::from(7), b"");
        let result = harness.inspect(b"");
        assert_eq!(
            U256::from_big_endian(&result.reports[0].payload),
            U256::from(7)
        );
    }
}
