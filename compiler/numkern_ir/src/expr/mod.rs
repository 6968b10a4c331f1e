//! Immutable kernel expressions.
//!
//! An [`Expr`] is a reference-counted handle to an [`ExprKind`] node: either a
//! named constant or an application of a function to a non-empty argument
//! list. Nodes are never mutated after construction, so sub-trees are shared
//! freely between threads.
//!
//! # Application spine
//!
//! [`Expr::app`] flattens nested applications, so `app(app(f, [a]), [b])` and
//! `app(f, [a, b])` build the same node. The function position of an `App`
//! is therefore never itself an `App`, and the curried view (`app_fn`,
//! `app_num_args`, `app_arg`) reads directly off a single node.
//!
//! # Deep trees
//!
//! Numerals nest one level per binary digit. Teardown, equality, hashing and
//! printing recurse through [`ensure_sufficient_stack`] so a tree with
//! hundreds of thousands of levels is handled without a native stack overflow.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use numkern_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

use crate::{global_interner, Name, StringLookup};

/// Argument list of an application node.
pub type ExprArgs = SmallVec<[Expr; 4]>;

/// Shape of an expression node.
pub enum ExprKind {
    /// Reference to a named constant.
    Const(Name),
    /// `func args[0] .. args[n-1]`, with `args` non-empty and `func` not an `App`.
    App { func: Expr, args: ExprArgs },
}

/// Shared, immutable expression tree.
#[derive(Clone)]
pub struct Expr(Arc<ExprKind>);

impl Expr {
    /// A bare constant.
    pub fn constant(name: Name) -> Self {
        Expr(Arc::new(ExprKind::Const(name)))
    }

    /// A bare constant whose name is interned in the global interner.
    pub fn named(name: &str) -> Self {
        Self::constant(global_interner().intern(name))
    }

    /// Apply `func` to `args`.
    ///
    /// Applying to no arguments returns `func` unchanged. Applying an
    /// application extends its argument list.
    pub fn app(func: Expr, args: impl IntoIterator<Item = Expr>) -> Self {
        let mut args = args.into_iter().peekable();
        if args.peek().is_none() {
            return func;
        }
        if let ExprKind::App {
            func: head,
            args: prefix,
        } = func.kind()
        {
            let mut all: ExprArgs = prefix.clone();
            all.extend(args);
            return Expr(Arc::new(ExprKind::App {
                func: head.clone(),
                args: all,
            }));
        }
        Expr(Arc::new(ExprKind::App {
            func,
            args: args.collect(),
        }))
    }

    /// Apply `func` to a single argument.
    pub fn app1(func: Expr, arg: Expr) -> Self {
        Self::app(func, [arg])
    }

    #[inline]
    pub fn kind(&self) -> &ExprKind {
        &self.0
    }

    /// True if both handles point at the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &Expr) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    #[inline]
    pub fn is_const(&self) -> bool {
        matches!(self.kind(), ExprKind::Const(_))
    }

    #[inline]
    pub fn is_app(&self) -> bool {
        matches!(self.kind(), ExprKind::App { .. })
    }

    /// Name of a bare constant.
    pub fn const_name(&self) -> Option<Name> {
        match self.kind() {
            ExprKind::Const(name) => Some(*name),
            ExprKind::App { .. } => None,
        }
    }

    /// True if `self` is exactly the constant `name`, with no arguments.
    pub fn is_constant_named(&self, name: Name) -> bool {
        self.const_name() == Some(name)
    }

    /// Head of the application spine; `self` when not an application.
    pub fn app_fn(&self) -> &Expr {
        match self.kind() {
            ExprKind::App { func, .. } => func,
            ExprKind::Const(_) => self,
        }
    }

    /// Total number of arguments on the application spine.
    pub fn app_num_args(&self) -> usize {
        match self.kind() {
            ExprKind::App { args, .. } => args.len(),
            ExprKind::Const(_) => 0,
        }
    }

    /// Arguments on the application spine, in order.
    pub fn app_args(&self) -> &[Expr] {
        match self.kind() {
            ExprKind::App { args, .. } => args,
            ExprKind::Const(_) => &[],
        }
    }

    /// Last (innermost-applied) argument.
    pub fn app_arg(&self) -> Option<&Expr> {
        self.app_args().last()
    }

    /// Argument at `idx` on the spine.
    pub fn app_arg_at(&self, idx: usize) -> Option<&Expr> {
        self.app_args().get(idx)
    }

    /// True if the constant `name` occurs anywhere in the tree.
    ///
    /// Walks with an explicit worklist, so depth is not limited by the stack.
    pub fn mentions(&self, name: Name) -> bool {
        let mut work: Vec<&Expr> = vec![self];
        while let Some(e) = work.pop() {
            match e.kind() {
                ExprKind::Const(n) => {
                    if *n == name {
                        return true;
                    }
                }
                ExprKind::App { func, args } => {
                    work.push(func);
                    work.extend(args.iter());
                }
            }
        }
        false
    }

    /// Render with names resolved through `names`.
    pub fn display<'a, L: StringLookup>(&'a self, names: &'a L) -> ExprDisplay<'a, L> {
        ExprDisplay { expr: self, names }
    }
}

impl Drop for ExprKind {
    fn drop(&mut self) {
        if let ExprKind::App { args, .. } = self {
            let args = std::mem::take(args);
            ensure_sufficient_stack(move || drop(args));
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        ensure_sufficient_stack(|| match (self.kind(), other.kind()) {
            (ExprKind::Const(a), ExprKind::Const(b)) => a == b,
            (
                ExprKind::App {
                    func: f1,
                    args: a1,
                },
                ExprKind::App {
                    func: f2,
                    args: a2,
                },
            ) => a1.len() == a2.len() && f1 == f2 && a1.iter().zip(a2.iter()).all(|(x, y)| x == y),
            _ => false,
        })
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ensure_sufficient_stack(|| match self.kind() {
            ExprKind::Const(name) => {
                0u8.hash(state);
                name.hash(state);
            }
            ExprKind::App { func, args } => {
                1u8.hash(state);
                func.hash(state);
                args.len().hash(state);
                for arg in args {
                    arg.hash(state);
                }
            }
        });
    }
}

/// Printer returned by [`Expr::display`].
///
/// Constants print as their name, applications as `(f a b)`.
pub struct ExprDisplay<'a, L> {
    expr: &'a Expr,
    names: &'a L,
}

impl<L: StringLookup> ExprDisplay<'_, L> {
    fn write(&self, e: &Expr, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match e.kind() {
            ExprKind::Const(name) => f.write_str(self.names.lookup(*name)),
            ExprKind::App { func, args } => {
                f.write_str("(")?;
                self.write(func, f)?;
                for arg in args {
                    f.write_str(" ")?;
                    self.write(arg, f)?;
                }
                f.write_str(")")
            }
        })
    }
}

impl<L: StringLookup> fmt::Display for ExprDisplay<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(self.expr, f)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(global_interner()), f)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({self})")
    }
}
