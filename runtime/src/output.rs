// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Outputs emitted while an input is processed.
//!
//! Outputs are buffered in emission order and flushed to the rollup
//! server once the input is finished. Vouchers and notices are numbered
//! from zero within each input.

use primitive_types::{H160, U256};

/// Call executed on the origin chain once the epoch is settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voucher {
    pub destination: H160,
    /// Native coins sent along with the call
    pub value: Option<U256>,
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Voucher(Voucher),
    Notice(Notice),
    Report(Report),
}

#[derive(Debug, Default)]
pub struct Outputs {
    entries: Vec<Output>,
    vouchers: usize,
    notices: usize,
}

impl Outputs {
    /// Buffers a voucher and returns its index.
    pub fn push_voucher(&mut self, voucher: Voucher) -> usize {
        let index = self.vouchers;
        self.vouchers += 1;
        self.entries.push(Output::Voucher(voucher));
        index
    }

    /// Buffers a notice and returns its index.
    pub fn push_notice(&mut self, notice: Notice) -> usize {
        let index = self.notices;
        self.notices += 1;
        self.entries.push(Output::Notice(notice));
        index
    }

    pub fn push_report(&mut self, report: Report) {
        self.entries.push(Output::Report(report));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Output> {
        self.entries.iter()
    }

    /// Empties the buffer and restarts numbering.
    pub fn take(&mut self) -> Vec<Output> {
        self.vouchers = 0;
        self.notices = 0;
        std::mem::take(&mut self.entries)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_indices_are_per_kind_and_reset() {
        let mut outputs = Outputs::default();
        let voucher = Voucher {
            destination: H160::zero(),
            value: None,
            payload: vec![],
        };
        assert_eq!(outputs.push_voucher(voucher.clone()), 0);
        assert_eq!(outputs.push_notice(Notice { payload: vec![] }), 0);
        outputs.push_report(Report { payload: vec![] });
        assert_eq!(outputs.push_voucher(voucher.clone()), 1);

        let taken = outputs.take();
        assert_eq!(taken.len(), 4);
        assert!(matches!(taken[2], Output::Report(_)));
        assert!(outputs.is_empty());
        assert_eq!(outputs.push_voucher(voucher), 0);
    }
}
