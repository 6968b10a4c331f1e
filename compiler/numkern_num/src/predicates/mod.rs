//! Numeral recognizers.
//!
//! A modern-family numeral is `zero`, `one`, or a chain of `bit0`/`bit1`
//! digits ending in `one`, optionally wrapped once in `neg`. Each constructor
//! is matched at its full arity (type and instance arguments included); the
//! carried sub-numeral is always the last argument.
//!
//! `zero` is only a numeral at the root. Below a digit it would be a redundant
//! leading zero, and the tree is rejected rather than normalized. The
//! [`Position`] tag threads that rule through the descent.

use numkern_ir::{numeral_names, Expr, Name, NumeralName};

use crate::matcher::{is_constant, is_numeral_app, numeral_app_arg};

/// Where a node sits in the numeral being examined.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Position {
    /// The root of the numeral.
    Outer,
    /// Below at least one `bit0`/`bit1` digit.
    Inner,
}

/// `zero α inst` or the bare `nat.zero`.
pub fn is_zero(e: &Expr) -> bool {
    is_numeral_app(e, NumeralName::Zero)
        || is_constant(e, numeral_names().get(NumeralName::NatZero))
}

/// `one α inst` or `nat.succ z` where `z` satisfies [`is_zero`].
pub fn is_one(e: &Expr) -> bool {
    if is_numeral_app(e, NumeralName::One) {
        return true;
    }
    numeral_app_arg(e, NumeralName::NatSucc).is_some_and(is_zero)
}

/// The digit argument of `bit0 α inst x`.
pub fn is_bit0(e: &Expr) -> Option<&Expr> {
    numeral_app_arg(e, NumeralName::Bit0)
}

/// The digit argument of `bit1 α inst₁ inst₂ x`.
pub fn is_bit1(e: &Expr) -> Option<&Expr> {
    numeral_app_arg(e, NumeralName::Bit1)
}

/// The operand of `neg α inst x`.
pub fn is_neg(e: &Expr) -> Option<&Expr> {
    numeral_app_arg(e, NumeralName::Neg)
}

/// The sub-numeral under a `bit0` or `bit1` digit.
#[inline]
pub(crate) fn is_digit(e: &Expr) -> Option<&Expr> {
    is_bit0(e).or_else(|| is_bit1(e))
}

/// True iff `e` is a canonical non-negative numeral.
pub fn is_num(e: &Expr) -> bool {
    is_num_at(e, Position::Outer)
}

/// [`is_num`] for a node at `pos`.
pub fn is_num_at(e: &Expr, pos: Position) -> bool {
    let mut cur = e;
    let mut pos = pos;
    loop {
        if is_zero(cur) {
            if pos == Position::Inner {
                tracing::trace!("zero below a binary digit; not canonical");
            }
            return pos == Position::Outer;
        }
        if is_one(cur) {
            return true;
        }
        match is_digit(cur) {
            Some(inner) => {
                cur = inner;
                pos = Position::Inner;
            }
            None => return false,
        }
    }
}

/// A numeral, or `neg` applied to one.
pub fn is_signed_num(e: &Expr) -> bool {
    if is_num(e) {
        return true;
    }
    is_neg(e).is_some_and(is_num)
}

/// Names whose constants are numeral leaves, directly or as instance
/// projections. Unfolding a term headed by one of these may expose a numeral.
pub fn is_num_leaf_constant(name: Name) -> bool {
    matches!(
        numeral_names().lookup(name),
        Some(
            NumeralName::Zero
                | NumeralName::One
                | NumeralName::HasZeroZero
                | NumeralName::HasOneOne
        )
    )
}

/// Heads of modern-family numeral nodes other than `neg`.
pub fn is_numeral_const_name(name: Name) -> bool {
    matches!(
        numeral_names().lookup(name),
        Some(NumeralName::Zero | NumeralName::One | NumeralName::Bit0 | NumeralName::Bit1)
    )
}
