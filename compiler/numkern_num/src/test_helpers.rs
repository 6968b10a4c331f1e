//! Hand-built numeral trees and a recording environment for unit tests.
//!
//! The builders construct trees directly from constants rather than through
//! the encoder, so recognizer and decoder tests do not depend on it.

use std::cell::{Cell, RefCell};

use numkern_ir::Expr;

use crate::UnfoldEnv;

pub(crate) fn c(name: &str) -> Expr {
    Expr::named(name)
}

pub(crate) fn zero() -> Expr {
    Expr::app(c("zero"), [c("nat"), c("nat.has_zero")])
}

pub(crate) fn one() -> Expr {
    Expr::app(c("one"), [c("nat"), c("nat.has_one")])
}

pub(crate) fn bit0(x: Expr) -> Expr {
    Expr::app(c("bit0"), [c("nat"), c("nat.has_add"), x])
}

pub(crate) fn bit1(x: Expr) -> Expr {
    Expr::app(c("bit1"), [c("nat"), c("nat.has_one"), c("nat.has_add"), x])
}

pub(crate) fn neg(x: Expr) -> Expr {
    Expr::app(c("neg"), [c("int"), c("int.has_neg"), x])
}

pub(crate) fn nat_zero() -> Expr {
    c("nat.zero")
}

pub(crate) fn succ(x: Expr) -> Expr {
    Expr::app1(c("nat.succ"), x)
}

pub(crate) fn pos_one() -> Expr {
    c("pos_num.one")
}

pub(crate) fn pos_bit0(x: Expr) -> Expr {
    Expr::app1(c("pos_num.bit0"), x)
}

pub(crate) fn pos_bit1(x: Expr) -> Expr {
    Expr::app1(c("pos_num.bit1"), x)
}

pub(crate) fn num_zero() -> Expr {
    c("num.zero")
}

pub(crate) fn num_pos(x: Expr) -> Expr {
    Expr::app1(c("num.pos"), x)
}

/// Environment that answers every unfold request from a fixed table and
/// records how often it was asked.
pub(crate) struct MockUnfoldEnv {
    table: Vec<(Expr, Expr)>,
    calls: Cell<usize>,
    seen: RefCell<Vec<Expr>>,
}

impl MockUnfoldEnv {
    pub(crate) fn new() -> Self {
        MockUnfoldEnv {
            table: Vec::new(),
            calls: Cell::new(0),
            seen: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn with(mut self, from: Expr, to: Expr) -> Self {
        self.table.push((from, to));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    pub(crate) fn seen(&self) -> Vec<Expr> {
        self.seen.borrow().clone()
    }
}

impl UnfoldEnv for MockUnfoldEnv {
    fn unfold_app(&self, e: &Expr) -> Option<Expr> {
        self.calls.set(self.calls.get() + 1);
        self.seen.borrow_mut().push(e.clone());
        self.table
            .iter()
            .find(|(from, _)| from == e)
            .map(|(_, to)| to.clone())
    }
}
