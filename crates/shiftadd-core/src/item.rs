//! One multiplicand/multiplier pair in flight.

use tracing::trace;

use crate::history::ItemHistory;
use crate::stage::{STAGE_COUNT, StageKind, bit_index};
use crate::word::{BinaryWord, OPERAND_BITS};

/// A pair advancing through the fixed stage schedule.
///
/// The operands are fixed at construction. The running sum is replaced by
/// [`BinaryWord::plus`] on multiply-add stages and widened in place by
/// [`BinaryWord::shift_left_one`] on shift stages. Once the stage index
/// reaches [`STAGE_COUNT`] the item latches done and is never advanced
/// again.
#[derive(Debug, Clone)]
pub struct PipelineItem {
    multiplicand: BinaryWord,
    multiplier: BinaryWord,
    running_sum: BinaryWord,
    stage_index: usize,
    done: bool,
    history: ItemHistory,
}

impl PipelineItem {
    /// Wrap a pair, seeding its history at the submission clock.
    #[must_use]
    pub fn new(multiplicand: BinaryWord, multiplier: BinaryWord, created_at: u64) -> Self {
        Self {
            multiplicand,
            multiplier,
            running_sum: BinaryWord::zero(OPERAND_BITS),
            stage_index: 0,
            done: false,
            history: ItemHistory::new(multiplicand, multiplier, created_at),
        }
    }

    /// The multiplier bit the current stage examines.
    ///
    /// Bits are read from the most significant end of the multiplier's
    /// operand-width string; each bit is examined by two consecutive
    /// stages (its shift stage, then its multiply-add stage).
    #[must_use]
    pub fn current_bit(&self) -> char {
        let bits = self.multiplier.bits_at_width();
        bits.as_bytes()[bit_index(self.stage_index)] as char
    }

    /// Execute one stage at clock `now` and record it.
    ///
    /// Callers must not advance a finished item; the scheduler skips
    /// done items, and the stage index stays pinned at [`STAGE_COUNT`].
    pub fn advance_one_stage(&mut self, now: u64) {
        debug_assert!(!self.done, "finished items are never advanced");
        let bit = self.current_bit();
        match StageKind::of_index(self.stage_index) {
            StageKind::Shift => self.running_sum.shift_left_one(),
            StageKind::MultiplyAdd => {
                if bit == '1' {
                    self.running_sum = self.running_sum.plus(&self.multiplicand);
                }
            }
        }
        self.history.push(now, &self.running_sum, bit);
        self.stage_index += 1;
        if self.stage_index >= STAGE_COUNT {
            self.done = true;
        }
        trace!(
            stage = self.stage_index,
            bit = %bit,
            sum = self.running_sum.decimal(),
            done = self.done,
            "stage executed"
        );
    }

    /// Whether the terminal stage count has been reached.
    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.done
    }

    /// Stages executed so far.
    #[inline]
    #[must_use]
    pub const fn stage_index(&self) -> usize {
        self.stage_index
    }

    /// The accumulated partial (or final) product.
    #[inline]
    #[must_use]
    pub const fn running_sum(&self) -> &BinaryWord {
        &self.running_sum
    }

    /// The per-stage log, seed record included.
    #[inline]
    #[must_use]
    pub const fn history(&self) -> &ItemHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_all_stages(item: &mut PipelineItem) {
        let mut now = 0;
        while !item.is_finished() {
            item.advance_one_stage(now);
            now += 1;
        }
    }

    #[test]
    fn sixteen_stages_multiply() {
        let mut item = PipelineItem::new(BinaryWord::operand(3), BinaryWord::operand(5), 0);
        run_all_stages(&mut item);
        assert_eq!(item.running_sum().decimal(), 15);
        assert_eq!(item.stage_index(), STAGE_COUNT);
        assert_eq!(item.history().records().len(), STAGE_COUNT + 1);
    }

    #[test]
    fn current_bit_reads_msb_first() {
        let item = PipelineItem::new(BinaryWord::operand(1), BinaryWord::operand(0b1000_0001), 0);
        assert_eq!(item.current_bit(), '1');
        let mut item = item;
        item.advance_one_stage(0);
        item.advance_one_stage(1);
        // Stages 2 and 3 examine bit 1 of "10000001".
        assert_eq!(item.current_bit(), '0');
    }

    #[test]
    fn bit_matches_multiplier_string_at_every_stage() {
        let multiplier = BinaryWord::operand(0b1011_0010);
        let bits = multiplier.bits_at_width();
        let mut item = PipelineItem::new(BinaryWord::operand(7), multiplier, 0);
        for stage in 0..STAGE_COUNT {
            let expected = bits.as_bytes()[stage / 2] as char;
            assert_eq!(item.current_bit(), expected);
            item.advance_one_stage(stage as u64);
        }
    }

    #[test]
    fn zero_multiplicand_only_widens_the_sum() {
        let mut item = PipelineItem::new(BinaryWord::operand(0), BinaryWord::operand(200), 0);
        run_all_stages(&mut item);
        assert_eq!(item.running_sum().decimal(), 0);
        // Eight shift stages widened the zero from 8 to 16 bits.
        assert_eq!(item.running_sum().width(), 2 * OPERAND_BITS);
        for record in item.history().records() {
            assert_eq!(BinaryWord::parse_grouped(&record.sum), Ok(0));
        }
    }

    #[test]
    fn done_latches() {
        let mut item = PipelineItem::new(BinaryWord::operand(2), BinaryWord::operand(2), 0);
        run_all_stages(&mut item);
        assert!(item.is_finished());
        assert!(item.is_finished());
        assert_eq!(item.stage_index(), STAGE_COUNT);
    }
}
