// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use anyhow::bail;
use dapp_runtime::{AdvanceHost, Application, Deposit, InspectHost, Metadata};

/// Rejects every input.
pub struct ErrorApp;

impl Application for ErrorApp {
    fn advance(
        &mut self,
        _host: &mut dyn AdvanceHost,
        _metadata: &Metadata,
        _deposit: Option<&Deposit>,
        _payload: &[u8],
    ) -> anyhow::Result<()> {
        bail!("input not accepted")
    }

    fn inspect(&mut self, _host: &mut dyn InspectHost, _payload: &[u8]) -> anyhow::Result<()> {
        bail!("input not accepted")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use dapp_runtime::testing::Harness;
    use dapp_runtime::{InputError, H160};

    #[test]
    fn test_rejects() {
        let mut harness = Harness::new(ErrorApp);

        let result = harness.advance(&H160::repeat_byte(0xfa), b"");
        assert!(matches!(
            result.result,
            Err(InputError::Rejected(ref error)) if error.to_string() == "input not accepted"
        ));

        let result = harness.inspect(b"");
        assert!(result.result.is_err());
    }
}
