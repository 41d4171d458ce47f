//! Growable fixed-width binary values.
//!
//! [`BinaryWord`] is the number representation the whole pipeline runs on:
//! a non-negative value paired with a declared bit width used for padded
//! rendering. Arithmetic never shrinks the width — addition returns a new
//! word wide enough for the sum, and the one-bit shift widens in place.

/// Bit width of every user-supplied operand.
pub const OPERAND_BITS: usize = 8;

/// Number of binary digits per display group.
const GROUP_BITS: usize = 4;

/// Delimiter between display groups.
const GROUP_SEPARATOR: char = '-';

/// A non-negative binary value with a declared rendering width.
///
/// The width is a display/bookkeeping property, not a storage bound:
/// growth operations may push the value past the width it was created
/// with, and [`BinaryWord::bits`] pads to whichever of the requested
/// width and the natural bit length is larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BinaryWord {
    value: u64,
    width: usize,
}

/// Number of binary digits needed to write `value`.
///
/// Zero renders as a single `0` digit, so its natural length is 1.
#[inline]
#[must_use]
pub const fn bit_length(value: u64) -> usize {
    match value {
        0 => 1,
        v => (u64::BITS - v.leading_zeros()) as usize,
    }
}

impl BinaryWord {
    /// Create a word with an explicit width.
    ///
    /// A width of 0 is clamped to 1.
    #[inline]
    #[must_use]
    pub const fn new(value: u64, width: usize) -> Self {
        Self {
            value,
            width: if width == 0 { 1 } else { width },
        }
    }

    /// The zero word at the given width.
    #[inline]
    #[must_use]
    pub const fn zero(width: usize) -> Self {
        Self::new(0, width)
    }

    /// An operand at the standard input width.
    #[inline]
    #[must_use]
    pub const fn operand(value: u64) -> Self {
        Self::new(value, OPERAND_BITS)
    }

    /// The numeric value.
    #[inline]
    #[must_use]
    pub const fn decimal(&self) -> u64 {
        self.value
    }

    /// The declared width in bits.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether the value fits in the declared width.
    ///
    /// Checked once at input-validation time; growth operations are
    /// allowed to exceed the original width afterwards.
    #[inline]
    #[must_use]
    pub const fn fits_width(&self) -> bool {
        bit_length(self.value) <= self.width
    }

    /// Binary digit string, left-zero-padded to
    /// `max(min_width, natural bit length)`.
    #[must_use]
    pub fn bits(&self, min_width: usize) -> String {
        let natural = bit_length(self.value);
        let padded = min_width.max(natural);
        let mut out = String::with_capacity(padded);
        for i in (0..padded).rev() {
            let digit = self.value.checked_shr(i as u32).map_or(0, |v| v & 1);
            out.push(if digit == 1 { '1' } else { '0' });
        }
        out
    }

    /// [`bits`](Self::bits) at the declared width.
    #[inline]
    #[must_use]
    pub fn bits_at_width(&self) -> String {
        self.bits(self.width)
    }

    /// Padded digit string split into 4-digit groups joined with `-`.
    ///
    /// Groups align to the least-significant end, so when the padded
    /// length is not a multiple of 4 the leading group is the short one.
    /// Callers in this system pad to 8 or 16 bits, where every group is
    /// full.
    #[must_use]
    pub fn grouped(&self, min_width: usize) -> String {
        let digits = self.bits(min_width);
        let mut out = String::with_capacity(digits.len() + digits.len() / GROUP_BITS);
        let lead = digits.len() % GROUP_BITS;
        let (head, tail) = digits.split_at(lead);
        if !head.is_empty() {
            out.push_str(head);
        }
        for (i, chunk) in tail.as_bytes().chunks(GROUP_BITS).enumerate() {
            if !out.is_empty() || i > 0 {
                out.push(GROUP_SEPARATOR);
            }
            // Chunks of ASCII digits, always valid UTF-8.
            out.push_str(std::str::from_utf8(chunk).unwrap_or_default());
        }
        out
    }

    /// Decode a string previously produced by [`grouped`](Self::grouped).
    ///
    /// Strips group delimiters and parses the remaining digits as binary.
    pub fn parse_grouped(s: &str) -> Result<u64, ParseGroupedError> {
        let digits: String = s.chars().filter(|&c| c != GROUP_SEPARATOR).collect();
        if digits.is_empty() {
            return Err(ParseGroupedError::Empty);
        }
        u64::from_str_radix(&digits, 2).map_err(|_| ParseGroupedError::InvalidDigit)
    }

    /// Width-growing addition.
    ///
    /// Returns a new word whose width is the larger of both operands'
    /// widths and the sum's natural length. Widths never shrink.
    #[must_use]
    pub fn plus(&self, other: &BinaryWord) -> BinaryWord {
        let sum = self.value + other.value;
        let width = bit_length(sum).max(self.width).max(other.width);
        BinaryWord::new(sum, width)
    }

    /// One-bit left shift, in place.
    ///
    /// Widens by one and doubles the value; appending a `0` digit to the
    /// padded rendering and reparsing gives the same result.
    pub fn shift_left_one(&mut self) {
        self.width += 1;
        self.value <<= 1;
    }
}

/// Failure decoding a grouped digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseGroupedError {
    /// Nothing left after stripping delimiters.
    Empty,
    /// A character other than `0`, `1`, or the delimiter.
    InvalidDigit,
}

impl std::fmt::Display for ParseGroupedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "grouped string contains no digits"),
            Self::InvalidDigit => write!(f, "grouped string contains a non-binary digit"),
        }
    }
}

impl std::error::Error for ParseGroupedError {}
