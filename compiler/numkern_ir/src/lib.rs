//! Kernel expression IR for numeral processing.
//!
//! - [`Name`] and [`StringInterner`]: interned constant identifiers
//! - [`Expr`]: immutable, shared expression trees (constant | application)
//! - [`NumeralNames`]: the process-wide registry of numeral constructor names
//!
//! # Design
//!
//! - **Intern names**: constant comparisons are 32-bit compares.
//! - **Never mutate**: trees are `Arc`-shared and safe to read from any thread.
//! - **Stack-safe recursion**: deep trees drop, compare, hash and print without
//!   overflowing the native stack.

mod expr;
mod interner;
mod name;
mod registry;

pub use expr::{Expr, ExprArgs, ExprDisplay, ExprKind};
pub use interner::{global_interner, InternError, StringInterner, StringLookup};
pub use name::Name;
pub use registry::{numeral_names, NumeralName, NumeralNames};
