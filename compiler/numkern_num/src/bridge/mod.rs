//! Delta-unfolding of numeral-shaped applications.
//!
//! Terms such as `zero α inst` have the outer shape of a numeral but may
//! stand for something else once the instance is unfolded. This is the only
//! place the numeral code calls back into the surrounding kernel.

use numkern_ir::Expr;

use crate::predicates::{is_bit0, is_bit1, is_one, is_zero};

/// The kernel operation that unfolds a definition at the head of an
/// application by one level.
pub trait UnfoldEnv {
    /// The unfolded term, or `None` if the head cannot be unfolded.
    fn unfold_app(&self, e: &Expr) -> Option<Expr>;
}

impl<F> UnfoldEnv for F
where
    F: Fn(&Expr) -> Option<Expr>,
{
    fn unfold_app(&self, e: &Expr) -> Option<Expr> {
        self(e)
    }
}

/// Unfold `e` through `env` if its outer node is `zero`, `one`, `bit0` or
/// `bit1`. The environment is not consulted for any other shape.
pub fn unfold_num_app<E>(env: &E, e: &Expr) -> Option<Expr>
where
    E: UnfoldEnv + ?Sized,
{
    if is_zero(e) || is_one(e) || is_bit0(e).is_some() || is_bit1(e).is_some() {
        tracing::trace!(args = e.app_num_args(), "unfolding numeral-shaped application");
        env.unfold_app(e)
    } else {
        None
    }
}
