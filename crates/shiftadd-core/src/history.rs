//! Append-only per-item stage logs.
//!
//! Every [`PipelineItem`](crate::item::PipelineItem) owns one
//! [`ItemHistory`]: a seed record written at creation plus exactly one
//! record per executed stage. The log is append-only and only the item
//! itself appends, so `records().len() == stage_index + 1` holds by
//! construction.

use crate::word::{BinaryWord, OPERAND_BITS};

/// Width sums are rendered at in history records: double the operand
/// width, enough for any partial product of two 8-bit operands.
pub const RECORD_BITS: usize = 2 * OPERAND_BITS;

/// One per-stage snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StageRecord {
    /// Scheduler clock when the stage ran (submission clock for the seed).
    pub timestamp: u64,
    /// Running sum after the stage, grouped at [`RECORD_BITS`].
    pub sum: String,
    /// Multiplier bit the stage examined (`'0'` for the seed).
    pub bit: char,
}

/// The full record of one item's trip through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ItemHistory {
    multiplicand: BinaryWord,
    multiplier: BinaryWord,
    records: Vec<StageRecord>,
}

impl ItemHistory {
    /// Start a history for the given operands, seeded with the zero sum.
    #[must_use]
    pub fn new(multiplicand: BinaryWord, multiplier: BinaryWord, created_at: u64) -> Self {
        let seed = StageRecord {
            timestamp: created_at,
            sum: BinaryWord::zero(OPERAND_BITS).grouped(RECORD_BITS),
            bit: '0',
        };
        Self {
            multiplicand,
            multiplier,
            records: vec![seed],
        }
    }

    /// Append the record for one executed stage.
    pub(crate) fn push(&mut self, timestamp: u64, sum: &BinaryWord, bit: char) {
        self.records.push(StageRecord {
            timestamp,
            sum: sum.grouped(RECORD_BITS),
            bit,
        });
    }

    /// The multiplicand this history belongs to.
    #[inline]
    #[must_use]
    pub const fn multiplicand(&self) -> &BinaryWord {
        &self.multiplicand
    }

    /// The multiplier this history belongs to.
    #[inline]
    #[must_use]
    pub const fn multiplier(&self) -> &BinaryWord {
        &self.multiplier
    }

    /// All records, seed first, in stage order.
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[StageRecord] {
        &self.records
    }

    /// The most recent record.
    #[must_use]
    pub fn latest(&self) -> &StageRecord {
        // Seeded at construction; the log is never empty.
        self.records.last().expect("history holds at least the seed record")
    }
}
