//! Numeral decoding.
//!
//! Each decoder descends the digit chain with a loop, recording one binary
//! digit per `bit0`/`bit1` node (least significant first, since the outermost
//! digit is the lowest), and assembles the integer once the leaf is reached.
//! A tree that is not a numeral of the decoder's family yields `None`.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use numkern_ir::{numeral_names, Expr, NumeralName};

use crate::matcher::{is_const_app, is_constant};
use crate::predicates::{is_bit1, is_digit, is_neg, is_one, is_zero, Position};

/// Assemble `leaf` (0 or 1) under `digits`, least significant digit first.
fn assemble(digits: &[bool], leaf: bool) -> BigInt {
    let mut le: Vec<u8> = digits.iter().map(|&d| u8::from(d)).collect();
    le.push(u8::from(leaf));
    // Base-2 digits are always valid, so the radix conversion cannot fail.
    BigUint::from_radix_le(&le, 2).map_or_else(BigInt::zero, BigInt::from)
}

/// Decode a modern-family numeral.
///
/// `neg` is not stripped; see [`to_signed_num`].
pub fn to_num(e: &Expr) -> Option<BigInt> {
    to_num_at(e, Position::Outer)
}

/// [`to_num`] for a node at `pos`.
pub fn to_num_at(e: &Expr, pos: Position) -> Option<BigInt> {
    let mut digits = Vec::new();
    let mut cur = e;
    let mut pos = pos;
    loop {
        if is_zero(cur) {
            if pos == Position::Inner {
                tracing::debug!(depth = digits.len(), "rejecting zero below a binary digit");
                return None;
            }
            return Some(BigInt::zero());
        }
        if is_one(cur) {
            return Some(assemble(&digits, true));
        }
        let inner = is_digit(cur)?;
        digits.push(is_bit1(cur).is_some());
        cur = inner;
        pos = Position::Inner;
    }
}

/// Decode a numeral, accepting one outer `neg`.
pub fn to_signed_num(e: &Expr) -> Option<BigInt> {
    if let Some(n) = to_num(e) {
        return Some(n);
    }
    is_neg(e).and_then(to_num).map(|n| -n)
}

/// Decode a legacy `pos_num` (strictly positive).
pub fn to_pos_num(e: &Expr) -> Option<BigInt> {
    let names = numeral_names();
    let pos_one = names.get(NumeralName::PosOne);
    let pos_bit0 = names.get(NumeralName::PosBit0);
    let pos_bit1 = names.get(NumeralName::PosBit1);

    let mut digits = Vec::new();
    let mut cur = e;
    loop {
        if is_constant(cur, pos_one) {
            return Some(assemble(&digits, true));
        }
        if is_const_app(cur, pos_bit0, 1) {
            digits.push(false);
        } else if is_const_app(cur, pos_bit1, 1) {
            digits.push(true);
        } else {
            return None;
        }
        cur = cur.app_arg()?;
    }
}

/// Decode a legacy `num`: `num.zero` or `num.pos p`.
pub fn to_num_core(e: &Expr) -> Option<BigInt> {
    let names = numeral_names();
    if is_constant(e, names.get(NumeralName::NumZero)) {
        Some(BigInt::zero())
    } else if is_const_app(e, names.get(NumeralName::NumPos), 1) {
        e.app_arg().and_then(to_pos_num)
    } else {
        None
    }
}
