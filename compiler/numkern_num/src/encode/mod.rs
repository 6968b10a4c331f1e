//! Numeral encoding.
//!
//! [`to_nat_expr`] produces the unique canonical `nat` numeral for a
//! non-negative integer: `zero` for 0, otherwise the digits of `n` below its
//! leading one as a `bit0`/`bit1` chain around `one`. No `zero` ever appears
//! below the root.
//!
//! The tree is built inside out from the `one` leaf, most significant digit
//! first, so construction is a loop over the bit length of `n`.

use std::sync::OnceLock;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use numkern_ir::{numeral_names, Expr, NumeralName};

use crate::NumeralError;

/// Constants shared by every encoded `nat` numeral.
struct NatConstants {
    nat: Expr,
    has_zero: Expr,
    has_one: Expr,
    has_add: Expr,
    zero: Expr,
    one: Expr,
    bit0: Expr,
    bit1: Expr,
    pos_one: Expr,
    pos_bit0: Expr,
    pos_bit1: Expr,
    num_zero: Expr,
    num_pos: Expr,
}

fn nat_constants() -> &'static NatConstants {
    static CONSTANTS: OnceLock<NatConstants> = OnceLock::new();
    CONSTANTS.get_or_init(|| {
        let names = numeral_names();
        let k = |n: NumeralName| Expr::constant(names.get(n));
        NatConstants {
            nat: k(NumeralName::Nat),
            has_zero: k(NumeralName::NatHasZero),
            has_one: k(NumeralName::NatHasOne),
            has_add: k(NumeralName::NatHasAdd),
            zero: k(NumeralName::Zero),
            one: k(NumeralName::One),
            bit0: k(NumeralName::Bit0),
            bit1: k(NumeralName::Bit1),
            pos_one: k(NumeralName::PosOne),
            pos_bit0: k(NumeralName::PosBit0),
            pos_bit1: k(NumeralName::PosBit1),
            num_zero: k(NumeralName::NumZero),
            num_pos: k(NumeralName::NumPos),
        }
    })
}

/// `zero nat nat.has_zero`
pub fn mk_nat_zero() -> Expr {
    let k = nat_constants();
    Expr::app(k.zero.clone(), [k.nat.clone(), k.has_zero.clone()])
}

/// `one nat nat.has_one`
pub fn mk_nat_one() -> Expr {
    let k = nat_constants();
    Expr::app(k.one.clone(), [k.nat.clone(), k.has_one.clone()])
}

/// `bit0 nat nat.has_add e`
pub fn mk_nat_bit0(e: Expr) -> Expr {
    let k = nat_constants();
    Expr::app(k.bit0.clone(), [k.nat.clone(), k.has_add.clone(), e])
}

/// `bit1 nat nat.has_one nat.has_add e`
pub fn mk_nat_bit1(e: Expr) -> Expr {
    let k = nat_constants();
    Expr::app(
        k.bit1.clone(),
        [k.nat.clone(), k.has_one.clone(), k.has_add.clone(), e],
    )
}

/// Wrap `leaf` in the digits of `n` below its leading one.
///
/// `digit` sees bit `i` of `n` for `i` from the second most significant bit
/// down to 0, each time wrapping the tree built so far.
fn wrap_digits(n: &BigInt, leaf: Expr, digit: impl Fn(bool, Expr) -> Expr) -> Expr {
    let top = n.bits().saturating_sub(1);
    (0..top).rev().fold(leaf, |acc, i| digit(n.bit(i), acc))
}

/// Canonical numeral for `n`.
///
/// # Panics
/// Panics if `n` is negative. Use [`try_to_nat_expr`] for untrusted input.
pub fn to_nat_expr(n: &BigInt) -> Expr {
    assert!(!n.is_negative(), "to_nat_expr: negative value {n}");
    if n.is_zero() {
        mk_nat_zero()
    } else {
        to_nat_expr_core(n)
    }
}

/// Canonical numeral for a strictly positive `n`; never produces `zero`.
///
/// # Panics
/// Panics if `n` is not positive.
pub fn to_nat_expr_core(n: &BigInt) -> Expr {
    assert!(n.is_positive(), "to_nat_expr_core: non-positive value {n}");
    wrap_digits(n, mk_nat_one(), |bit, inner| {
        if bit {
            mk_nat_bit1(inner)
        } else {
            mk_nat_bit0(inner)
        }
    })
}

/// [`to_nat_expr`] reporting negative input as an error.
pub fn try_to_nat_expr(n: &BigInt) -> Result<Expr, NumeralError> {
    if n.is_negative() {
        tracing::debug!(value = %n, "refusing to encode negative natural numeral");
        return Err(NumeralError::Negative { value: n.clone() });
    }
    Ok(to_nat_expr(n))
}

/// Legacy `pos_num` for a strictly positive `n`.
pub fn to_pos_num_expr(n: &BigInt) -> Result<Expr, NumeralError> {
    if !n.is_positive() {
        tracing::debug!(value = %n, "refusing to encode non-positive pos_num");
        return Err(NumeralError::NonPositive { value: n.clone() });
    }
    let k = nat_constants();
    Ok(wrap_digits(n, k.pos_one.clone(), |bit, inner| {
        let head = if bit { &k.pos_bit1 } else { &k.pos_bit0 };
        Expr::app1(head.clone(), inner)
    }))
}

/// Legacy `num`: `num.zero` for 0, otherwise `num.pos` of the `pos_num`.
pub fn to_num_core_expr(n: &BigInt) -> Result<Expr, NumeralError> {
    if n.is_negative() {
        tracing::debug!(value = %n, "refusing to encode negative num");
        return Err(NumeralError::Negative { value: n.clone() });
    }
    let k = nat_constants();
    if n.is_zero() {
        return Ok(k.num_zero.clone());
    }
    let pos = to_pos_num_expr(n)?;
    Ok(Expr::app1(k.num_pos.clone(), pos))
}
