//! Operand-list and duration validation.
//!
//! Everything here runs before anything touches the scheduler; the
//! engine itself assumes pre-validated operands and raises no domain
//! errors of its own.

use shiftadd_core::{BinaryWord, OPERAND_BITS};
use thiserror::Error;

/// A validation failure in user-supplied input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Operand list length does not match the declared pair count.
    #[error("expected {expected} operands, got {actual}")]
    InvalidCount { expected: usize, actual: usize },

    /// An element is empty or not a non-negative integer.
    #[error("operand list contains an invalid element: {element:?}")]
    InvalidElement { element: String },

    /// An operand needs more bits than the fixed operand width.
    #[error("operand {value} does not fit in {width} bits")]
    Overflow { value: u64, width: usize },

    /// Tick duration is not a positive integer.
    #[error("time per tick must be a positive integer, got {value}")]
    InvalidDuration { value: i64 },
}

pub type Result<T> = std::result::Result<T, InputError>;

/// Parse a comma-separated decimal operand list.
///
/// Whitespace anywhere in the list is ignored. Each element must be a
/// non-negative integer representable in [`OPERAND_BITS`] bits, and the
/// element count must match `expected` exactly.
pub fn parse_operands(list: &str, expected: usize) -> Result<Vec<BinaryWord>> {
    let compact: String = list.chars().filter(|c| !c.is_whitespace()).collect();
    let elements: Vec<&str> = compact.split(',').collect();
    if elements.len() != expected {
        return Err(InputError::InvalidCount {
            expected,
            actual: elements.len(),
        });
    }

    let mut operands = Vec::with_capacity(elements.len());
    for element in elements {
        let value: u64 = element.parse().map_err(|_| InputError::InvalidElement {
            element: element.to_owned(),
        })?;
        let word = BinaryWord::operand(value);
        if !word.fits_width() {
            return Err(InputError::Overflow {
                value,
                width: OPERAND_BITS,
            });
        }
        operands.push(word);
    }
    Ok(operands)
}

/// Validate the tick duration.
pub fn parse_duration(value: i64) -> Result<u64> {
    if value < 1 {
        return Err(InputError::InvalidDuration { value });
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_list() {
        let operands = parse_operands("3,5,200", 3).unwrap();
        let values: Vec<u64> = operands.iter().map(BinaryWord::decimal).collect();
        assert_eq!(values, vec![3, 5, 200]);
        assert!(operands.iter().all(|w| w.width() == OPERAND_BITS));
    }

    #[test]
    fn whitespace_is_ignored() {
        let operands = parse_operands(" 3 , 5 ,\t200 ", 3).unwrap();
        let values: Vec<u64> = operands.iter().map(BinaryWord::decimal).collect();
        assert_eq!(values, vec![3, 5, 200]);
    }

    #[test]
    fn count_mismatch_is_rejected() {
        assert_eq!(
            parse_operands("1,2,3", 2),
            Err(InputError::InvalidCount {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn empty_and_garbage_elements_are_rejected() {
        assert!(matches!(
            parse_operands("1,,3", 3),
            Err(InputError::InvalidElement { .. })
        ));
        assert!(matches!(
            parse_operands("1,x,3", 3),
            Err(InputError::InvalidElement { .. })
        ));
    }

    #[test]
    fn negative_numbers_are_rejected() {
        assert!(matches!(
            parse_operands("1,-2,3", 3),
            Err(InputError::InvalidElement { .. })
        ));
    }

    #[test]
    fn nine_bit_operands_overflow() {
        assert_eq!(parse_operands("255", 1).map(|v| v.len()), Ok(1));
        assert_eq!(
            parse_operands("256", 1),
            Err(InputError::Overflow {
                value: 256,
                width: OPERAND_BITS
            })
        );
    }

    #[test]
    fn duration_must_be_positive() {
        assert_eq!(parse_duration(1), Ok(1));
        assert_eq!(parse_duration(250), Ok(250));
        assert_eq!(
            parse_duration(0),
            Err(InputError::InvalidDuration { value: 0 })
        );
        assert_eq!(
            parse_duration(-4),
            Err(InputError::InvalidDuration { value: -4 })
        );
    }
}
