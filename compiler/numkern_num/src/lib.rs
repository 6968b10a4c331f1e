//! Binary numerals in kernel expressions.
//!
//! Converts between `num_bigint::BigInt` and the numeral trees the kernel
//! uses for natural-number literals:
//!
//! ```text
//! 0  ↦ zero nat nat.has_zero
//! 1  ↦ one nat nat.has_one
//! 2n ↦ bit0 nat nat.has_add ⟦n⟧         (n ≥ 1)
//! 2n+1 ↦ bit1 nat nat.has_one nat.has_add ⟦n⟧   (n ≥ 1)
//! ```
//!
//! # Layers
//!
//! 1. **Matcher** (`matcher`): head constant + exact arity probes
//! 2. **Predicates** (`predicates`): `is_zero`, `is_one`, digit and `neg`
//!    probes, and the canonical-form check `is_num`
//! 3. **Decoder** (`decode`): tree → integer, for the binary family and the
//!    legacy `pos_num`/`num` family
//! 4. **Encoder** (`encode`): integer → canonical tree
//! 5. **Bridge** (`bridge`): delegates to the kernel's unfold operation for
//!    numeral-shaped terms
//!
//! Every operation is a pure function of an immutable tree. Chains are walked
//! with loops, so numeral depth never turns into native stack depth.
//!
//! # Tracing
//!
//! Events are emitted through `tracing`. Call [`init_tracing`] from a binary
//! or test harness and set `RUST_LOG=numkern_num=trace` to see them.

mod bridge;
mod codec;
mod decode;
mod encode;
mod errors;
mod matcher;
mod predicates;
#[cfg(test)]
mod test_helpers;

use std::sync::Once;

pub use bridge::{unfold_num_app, UnfoldEnv};
pub use codec::{decode_any, BinaryCodec, LegacyNumCodec, NumeralCodec, CODECS};
pub use decode::{to_num, to_num_at, to_num_core, to_pos_num, to_signed_num};
pub use encode::{
    mk_nat_bit0, mk_nat_bit1, mk_nat_one, mk_nat_zero, to_nat_expr, to_nat_expr_core,
    to_num_core_expr, to_pos_num_expr, try_to_nat_expr,
};
pub use errors::NumeralError;
pub use matcher::{is_const_app, is_constant};
pub use predicates::{
    is_bit0, is_bit1, is_neg, is_num, is_num_at, is_num_leaf_constant, is_numeral_const_name,
    is_one, is_signed_num, is_zero, Position,
};

/// Build the numeral name registry now rather than on first use.
pub fn initialize() {
    let _ = numkern_ir::numeral_names();
}

/// Counterpart of [`initialize`]. The registry lives for the whole process,
/// so there is nothing to release.
pub fn finalize() {}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
