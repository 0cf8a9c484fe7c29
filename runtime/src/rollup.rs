// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use crate::error::TransportError;
use crate::input::{FinishStatus, Input};
use crate::output::{Notice, Report, Voucher};

/// Rollup server as seen by the runtime.
///
/// Every error is a transport fault and ends the run.
#[allow(async_fn_in_trait)]
pub trait Rollup {
    /// Reports the outcome of the previous input and asks for the next one.
    ///
    /// `None` means no input is ready yet and the call should be retried
    /// with the same status.
    async fn finish(&mut self, status: FinishStatus) -> Result<Option<Input>, TransportError>;

    /// Returns the index the server assigned to the voucher.
    async fn send_voucher(&mut self, voucher: &Voucher) -> Result<u64, TransportError>;

    /// Returns the index the server assigned to the notice.
    async fn send_notice(&mut self, notice: &Notice) -> Result<u64, TransportError>;

    async fn send_report(&mut self, report: &Report) -> Result<(), TransportError>;
}
