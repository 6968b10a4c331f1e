//! Errors from the non-panicking encoder entry points.

use num_bigint::BigInt;

/// A value that has no numeral of the requested family.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    /// Natural-number numerals have no negation case.
    #[error("cannot encode negative value {value} as a natural numeral")]
    Negative { value: BigInt },
    /// `pos_num` starts at one.
    #[error("pos_num numerals are strictly positive, got {value}")]
    NonPositive { value: BigInt },
}
