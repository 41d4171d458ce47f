//! The discrete-time pipeline scheduler.
//!
//! Owns every in-flight [`PipelineItem`], advances all of them one stage
//! per tick, and accumulates the global clock. There is no real
//! parallelism: a tick is one synchronous pass over the items in
//! submission order, and items never observe each other, so the order is
//! visible only in history bookkeeping.

use tracing::debug;

use crate::history::ItemHistory;
use crate::item::PipelineItem;
use crate::stage::STAGE_COUNT;
use crate::word::BinaryWord;

/// Drives submitted pairs through the stage schedule on a shared clock.
#[derive(Debug)]
pub struct PipelineScheduler {
    clock: u64,
    tick_duration: u64,
    items: Vec<PipelineItem>,
}

impl PipelineScheduler {
    /// Create a scheduler with the given clock step per tick.
    ///
    /// Operands and durations are validated by the caller; a duration of
    /// 0 is clamped to 1.
    #[must_use]
    pub fn new(tick_duration: u64) -> Self {
        Self {
            clock: 0,
            tick_duration: tick_duration.max(1),
            items: Vec::new(),
        }
    }

    /// Submit a pair and immediately run one tick.
    ///
    /// The new item's history is seeded at the submission clock, then
    /// every item — including the one just submitted — advances one
    /// stage. Later submissions therefore start their stage 0 on the
    /// same pass that moves older items along.
    pub fn submit(&mut self, multiplicand: BinaryWord, multiplier: BinaryWord) {
        debug!(
            multiplicand = multiplicand.decimal(),
            multiplier = multiplier.decimal(),
            clock = self.clock,
            "pair submitted"
        );
        self.items
            .push(PipelineItem::new(multiplicand, multiplier, self.clock));
        self.tick();
    }

    /// Advance every unfinished item one stage, then step the clock.
    ///
    /// Stages executed during this tick are stamped with the clock value
    /// at entry; the clock moves after the pass.
    pub fn tick(&mut self) {
        let now = self.clock;
        for item in self.items.iter_mut().filter(|item| !item.is_finished()) {
            item.advance_one_stage(now);
        }
        self.clock += self.tick_duration;
        debug!(clock = self.clock, "tick complete");
    }

    /// Tick until every item is finished.
    ///
    /// Each unfinished item needs at most [`STAGE_COUNT`] further stages,
    /// so the loop is bounded.
    pub fn run_to_completion(&mut self) {
        for _ in 0..STAGE_COUNT {
            if self.is_complete() {
                break;
            }
            self.tick();
        }
        debug_assert!(self.is_complete());
    }

    /// Whether every submitted item has finished.
    ///
    /// Vacuously true when nothing has been submitted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.items.iter().all(PipelineItem::is_finished)
    }

    /// Decimal products of all finished items, in submission order.
    #[must_use]
    pub fn collect_results(&self) -> Vec<u64> {
        self.items
            .iter()
            .filter(|item| item.is_finished())
            .map(|item| item.running_sum().decimal())
            .collect()
    }

    /// Every item's full history, in submission order.
    #[must_use]
    pub fn collect_histories(&self) -> Vec<&ItemHistory> {
        self.items.iter().map(PipelineItem::history).collect()
    }

    /// The global clock.
    #[inline]
    #[must_use]
    pub const fn elapsed(&self) -> u64 {
        self.clock
    }

    /// The clock step per tick.
    #[inline]
    #[must_use]
    pub const fn tick_duration(&self) -> u64 {
        self.tick_duration
    }

    /// Number of submitted items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been submitted.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
