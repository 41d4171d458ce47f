//! The per-item stage machine.
//!
//! Each multiplier bit is processed by two consecutive stages: a shift
//! stage that doubles the running sum, then a multiply-add stage that
//! conditionally adds the multiplicand. This is the Horner form of the
//! shift-and-add schedule, consuming bits from the most significant end:
//! `sum = 2 * sum + bit * multiplicand`.
//!
//! The alternation is an explicit two-state machine rather than an
//! index-parity convention, so the transition itself is testable.

use crate::word::OPERAND_BITS;

/// Total stages per item: two per multiplier bit.
pub const STAGE_COUNT: usize = 2 * OPERAND_BITS;

/// What one stage does to the running sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    /// Double the running sum (widening by one bit).
    Shift,
    /// Add the multiplicand iff the current multiplier bit is 1.
    MultiplyAdd,
}

impl StageKind {
    /// The kind of the stage at `index`.
    ///
    /// Stage 0 shifts; the two kinds alternate from there.
    #[inline]
    #[must_use]
    pub const fn of_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Shift
        } else {
            Self::MultiplyAdd
        }
    }

    /// The stage that follows this one.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Shift => Self::MultiplyAdd,
            Self::MultiplyAdd => Self::Shift,
        }
    }

    /// Display label for table headers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shift => "Shift",
            Self::MultiplyAdd => "Multiply-add",
        }
    }
}

/// Index of the multiplier bit a stage examines, counting from the most
/// significant end of the operand-width bit string.
#[inline]
#[must_use]
pub const fn bit_index(stage_index: usize) -> usize {
    stage_index / 2
}
