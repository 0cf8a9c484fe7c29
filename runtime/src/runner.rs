// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! The accept/reject loop against the rollup server.

use std::future::Future;

use tracing::{debug, info};

use crate::application::Application;
use crate::dispatch::Dispatcher;
use crate::error::TransportError;
use crate::input::{FinishStatus, Input};
use crate::output::Output;
use crate::rollup::Rollup;

pub struct Runner<R, A> {
    rollup: R,
    dispatcher: Dispatcher<A>,
    status: FinishStatus,
}

impl<R: Rollup, A: Application> Runner<R, A> {
    pub fn new(rollup: R, dispatcher: Dispatcher<A>) -> Self {
        Self {
            rollup,
            dispatcher,
            status: FinishStatus::Accept,
        }
    }

    /// Status reported on the next call to finish.
    pub fn status(&self) -> FinishStatus {
        self.status
    }

    pub fn dispatcher(&self) -> &Dispatcher<A> {
        &self.dispatcher
    }

    pub fn rollup(&self) -> &R {
        &self.rollup
    }

    async fn next_input(&mut self) -> Result<Input, TransportError> {
        loop {
            if let Some(input) = self.rollup.finish(self.status).await? {
                return Ok(input);
            }
        }
    }

    /// Fetches one input, dispatches it and flushes its outputs.
    pub async fn step(&mut self) -> Result<FinishStatus, TransportError> {
        let input = self.next_input().await?;
        let status = match self.dispatcher.handle(&input) {
            Ok(()) => FinishStatus::Accept,
            Err(_) => FinishStatus::Reject,
        };
        self.flush(status).await?;
        self.status = status;
        Ok(status)
    }

    /// Vouchers and notices of a rejected input are dropped. Reports are
    /// always sent.
    async fn flush(&mut self, status: FinishStatus) -> Result<(), TransportError> {
        for output in self.dispatcher.take_outputs() {
            match output {
                Output::Report(report) => self.rollup.send_report(&report).await?,
                Output::Voucher(voucher) if status == FinishStatus::Accept => {
                    self.rollup.send_voucher(&voucher).await?;
                }
                Output::Notice(notice) if status == FinishStatus::Accept => {
                    self.rollup.send_notice(&notice).await?;
                }
                dropped => debug!(?dropped, "Output of rejected input dropped"),
            }
        }
        Ok(())
    }

    /// Processes inputs until the transport fails or `shutdown` resolves.
    ///
    /// Shutdown is checked first, so an input in flight is abandoned
    /// before its status is reported.
    pub async fn run<S>(&mut self, shutdown: S) -> Result<(), TransportError>
    where
        S: Future<Output = ()>,
    {
        info!("Starting rollup runtime");
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!("Rollup runtime terminated");
                    return Ok(());
                }
                status = self.step() => {
                    let status = status?;
                    debug!(?status, "Input finished");
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::address_book::AddressBook;
    use crate::config::ProtocolFlags;
    use crate::deposit::Deposit;
    use crate::host::{AdvanceHost, InspectHost};
    use crate::input::Metadata;
    use crate::output::{Notice, Report, Voucher};
    use crate::testing::{advance_input, MockRollup};
    use dapp_encoding::encode_native_deposit;
    use dapp_ledger::Asset;
    use pretty_assertions::assert_eq;
    use primitive_types::{H160, U256};

    const ALICE: H160 = H160([0xa1; 20]);

    /// Echoes every payload as a voucher, a notice and a report; rejects
    /// after emitting them when the payload is `reject`.
    struct Echo;

    impl Application for Echo {
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
            anyhow::ensure!(payload != b"reject", "rejected on request");
            Ok(())
        }

        fn inspect(&mut self, host: &mut dyn InspectHost, payload: &[u8]) -> anyhow::Result<()> {
            host.report(payload);
            Ok(())
        }
    }

    fn runner(inputs: Vec<Option<Input>>) -> Runner<MockRollup, Echo> {
        let dispatcher = Dispatcher::new(Echo, AddressBook::default(), ProtocolFlags::default());
        Runner::new(MockRollup::new(inputs), dispatcher)
    }

    #[tokio::test]
    async fn test_retry_keeps_status() {
        let mut runner = runner(vec![
            Some(advance_input(ALICE, b"reject")),
            None,
            None,
            Some(advance_input(ALICE, b"ok")),
        ]);

        assert_eq!(runner.step().await.unwrap(), FinishStatus::Reject);
        assert_eq!(runner.step().await.unwrap(), FinishStatus::Accept);
        assert_eq!(
            runner.rollup().finished,
            vec![
                FinishStatus::Accept,
                FinishStatus::Reject,
                FinishStatus::Reject,
                FinishStatus::Reject,
            ]
        );
        assert_eq!(runner.status(), FinishStatus::Accept);
    }

    #[tokio::test]
    async fn test_outputs_of_rejected_input() {
        let mut runner = runner(vec![
            Some(advance_input(ALICE, b"reject")),
            Some(advance_input(ALICE, b"ok")),
        ]);
        runner.step().await.unwrap();
        runner.step().await.unwrap();

        assert_eq!(
            runner.rollup().sent,
            vec![
                Output::Report(Report {
                    payload: b"reject".to_vec()
                }),
                Output::Voucher(Voucher {
                    destination: ALICE,
                    value: None,
                    payload: b"ok".to_vec()
                }),
                Output::Notice(Notice {
                    payload: b"ok".to_vec()
                }),
                Output::Report(Report {
                    payload: b"ok".to_vec()
                }),
            ]
        );
    }

    #[tokio::test]
    async fn test_rejection_keeps_earlier_deposit() {
        let portal = AddressBook::default().ether_portal;
        let deposit = encode_native_deposit(&ALICE, &U256::from(100), b"");
        let mut runner = runner(vec![
            Some(advance_input(portal, &deposit)),
            Some(advance_input(ALICE, b"reject")),
        ]);

        assert_eq!(runner.step().await.unwrap(), FinishStatus::Accept);
        assert_eq!(runner.step().await.unwrap(), FinishStatus::Reject);
        assert_eq!(
            runner
                .dispatcher()
                .environment()
                .balance_of(&Asset::Native, &ALICE),
            U256::from(100)
        );
    }

    #[tokio::test]
    async fn test_transport_fault_ends_run() {
        let mut runner = runner(vec![Some(advance_input(ALICE, b"ok"))]);
        let error = runner.run(std::future::pending()).await.unwrap_err();
        assert!(matches!(error, TransportError::Status { status: 503, .. }));
        assert_eq!(runner.rollup().finished.len(), 2);
    }

    #[tokio::test]
    async fn test_shutdown() {
        let mut runner = runner(vec![Some(advance_input(ALICE, b"ok"))]);
        runner.run(std::future::ready(())).await.unwrap();
        assert!(runner.rollup().finished.is_empty());
    }
}
