//! Stack growth for deep structural recursion.
//!
//! Numeral trees are as deep as the bit length of the integer they encode,
//! so a numeral read from an untrusted source can be arbitrarily deep. The
//! numeral codec itself walks chains with loops, but tree teardown, structural
//! equality, hashing and printing still recurse. Those paths wrap each level in
//! [`ensure_sufficient_stack`], which grows the native stack on demand.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: direct call.
//!
//! # Usage
//!
//! ```text
//! fn depth(e: &Expr) -> usize {
//!     ensure_sufficient_stack(|| match e.kind() {
//!         ExprKind::Const(_) => 1,
//!         ExprKind::App { args, .. } => 1 + args.iter().map(depth).max().unwrap_or(0),
//!     })
//! }
//! ```

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const STACK_SEGMENT: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
///
/// Call this at the top of every recursive step whose depth is controlled by
/// input data rather than by the program.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
