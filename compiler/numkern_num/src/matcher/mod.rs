//! Shallow structural probes on application spines.

use numkern_ir::{numeral_names, Expr, Name, NumeralName};

/// True iff `e` is the constant `name` applied to exactly `nargs` arguments.
///
/// With `nargs == 0` this accepts the bare constant.
#[inline]
pub fn is_const_app(e: &Expr, name: Name, nargs: usize) -> bool {
    e.app_fn().is_constant_named(name) && e.app_num_args() == nargs
}

/// True iff `e` is the bare constant `name`.
#[inline]
pub fn is_constant(e: &Expr, name: Name) -> bool {
    e.is_constant_named(name)
}

/// `is_const_app` against a registry entry at its expected arity.
#[inline]
pub(crate) fn is_numeral_app(e: &Expr, n: NumeralName) -> bool {
    is_const_app(e, numeral_names().get(n), n.arity())
}

/// Last argument of `e` when it is `n` at its expected arity.
#[inline]
pub(crate) fn numeral_app_arg(e: &Expr, n: NumeralName) -> Option<&Expr> {
    if is_numeral_app(e, n) {
        e.app_arg()
    } else {
        None
    }
}

#[cfg(test)]
mod tests;
