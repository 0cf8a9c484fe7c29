// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use anyhow::bail;
use dapp_runtime::{AdvanceHost, Application, Deposit, InspectHost, Metadata};

/// Reports the application address on inspect, once it was relayed.
///
/// The relay input never reaches the application; every other advance
/// input is rejected.
pub struct AddressApp;

impl Application for AddressApp {
    fn advance(
        &mut self,
        _host: &mut dyn AdvanceHost,
        _metadata: &Metadata,
        _deposit: Option<&Deposit>,
        _payload: &[u8],
    ) -> anyhow::Result<()> {
        bail!("input not accepted")
    }

    fn inspect(&mut self, host: &mut dyn InspectHost, _payload: &[u8]) -> anyhow::Result<()> {
        if let Some(address) = host.app_address() {
            host.report(address.as_bytes());
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;
    use dapp_runtime::testing::Harness;
    use dapp_runtime::{DecodeError, InputError, H160};
    use pretty_assertions::assert_eq;

    const APP: H160 = H160(hex!("ab7528bb862fb57e8a2bcd567a2e929a0be56a5e"));

    #[test]
    fn test_reports_relayed_address() {
        let mut harness = Harness::new(AddressApp);
        assert!(harness.inspect(b"").reports.is_empty());

        let result = harness.relay_app_address(&APP);
        assert!(result.result.is_ok());

        let result = harness.inspect(b"");
        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.reports[0].payload, APP.as_bytes().to_vec());
    }

    #[test]
    fn test_malformed_relay_message() {
        let mut harness = Harness::new(AddressApp);
        let relay = harness.address_book().app_address_relay.unwrap();

        let result = harness.advance(&relay, &[0xab; 19]);
        assert!(matches!(
            result.result,
            Err(InputError::Decode(DecodeError::MalformedPayload { .. }))
        ));
        assert!(harness.inspect(b"").reports.is_empty());
    }

    #[test]
    fn test_other_inputs_rejected() {
        let mut harness = Harness::new(AddressApp);
        let result = harness.advance(&H160::repeat_byte(0xfa), b"");
        assert!(result.result.is_err());
    }
}
