// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use dapp_runtime::{AdvanceHost, Application, Deposit, InspectHost, Metadata};

/// Panics on every input. The runtime rejects the input and keeps going.
pub struct PanicApp;

impl Application for PanicApp {
    fn advance(
        &mut self,
        _host: &mut dyn AdvanceHost,
        _metadata: &Metadata,
        _deposit: Option<&Deposit>,
        _payload: &[u8],
    ) -> anyhow::Result<()> {
        panic!("input not accepted")
    }

    fn inspect(&mut self, _host: &mut dyn InspectHost, _payload: &[u8]) -> anyhow::Result<()> {
        panic!("input not accepted")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use dapp_runtime::testing::Harness;
    use dapp_runtime::{InputError, H160};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_panic_rejects_input() {
        let mut harness = Harness::new(PanicApp);

        let result = harness.advance(&H160::repeat_byte(0xfa), b"");
        assert!(matches!(result.result, Err(InputError::ApplicationFault(_))));
        assert_eq!(
            result.result.unwrap_err().to_string(),
            "A panic occurred: input not accepted"
        );

        let result = harness.inspect(b"");
        assert!(matches!(result.result, Err(InputError::ApplicationFault(_))));
    }
}
