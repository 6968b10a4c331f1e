//! Numeral families behind one interface.
//!
//! The binary `zero`/`one`/`bit0`/`bit1` family and the legacy
//! `pos_num`/`num` family are independent encodings of the naturals. Each is
//! a [`NumeralCodec`] so callers can hold either, and one family can change
//! without touching the other.

use num_bigint::BigInt;
use numkern_ir::Expr;

use crate::{is_num, to_num, to_num_core, to_num_core_expr, try_to_nat_expr, NumeralError};

/// Conversion between integers and one family of numeral trees.
pub trait NumeralCodec {
    /// Short family name for diagnostics.
    fn family(&self) -> &'static str;

    /// Decode `e`; `None` if it is not a numeral of this family.
    fn decode(&self, e: &Expr) -> Option<BigInt>;

    /// Encode a non-negative `n`.
    fn encode(&self, n: &BigInt) -> Result<Expr, NumeralError>;

    /// True iff `e` is a numeral of this family.
    fn recognizes(&self, e: &Expr) -> bool {
        self.decode(e).is_some()
    }
}

/// `zero`/`one`/`bit0`/`bit1` numerals over `nat`.
#[derive(Copy, Clone, Debug, Default)]
pub struct BinaryCodec;

impl NumeralCodec for BinaryCodec {
    fn family(&self) -> &'static str {
        "binary"
    }

    fn decode(&self, e: &Expr) -> Option<BigInt> {
        to_num(e)
    }

    fn encode(&self, n: &BigInt) -> Result<Expr, NumeralError> {
        try_to_nat_expr(n)
    }

    fn recognizes(&self, e: &Expr) -> bool {
        is_num(e)
    }
}

/// `num.zero` / `num.pos` over `pos_num`.
#[derive(Copy, Clone, Debug, Default)]
pub struct LegacyNumCodec;

impl NumeralCodec for LegacyNumCodec {
    fn family(&self) -> &'static str {
        "pos_num"
    }

    fn decode(&self, e: &Expr) -> Option<BigInt> {
        to_num_core(e)
    }

    fn encode(&self, n: &BigInt) -> Result<Expr, NumeralError> {
        to_num_core_expr(n)
    }
}

/// Every built-in family, binary first.
pub static CODECS: [&(dyn NumeralCodec + Sync); 2] = [&BinaryCodec, &LegacyNumCodec];

/// Decode `e` with the first family that accepts it.
pub fn decode_any(e: &Expr) -> Option<(&'static str, BigInt)> {
    CODECS
        .iter()
        .find_map(|codec| codec.decode(e).map(|n| (codec.family(), n)))
}
