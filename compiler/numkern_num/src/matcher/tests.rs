use super::*;
use numkern_ir::global_interner;

fn c(name: &str) -> Expr {
    Expr::named(name)
}

#[test]
fn test_exact_arity_required() {
    let zero = global_interner().intern("zero");
    let e = Expr::app(c("zero"), [c("nat"), c("nat.has_zero")]);

    assert!(is_const_app(&e, zero, 2));
    assert!(!is_const_app(&e, zero, 1));
    assert!(!is_const_app(&e, zero, 3));
}

#[test]
fn test_one_argument_zero_is_not_two() {
    let zero = global_interner().intern("zero");
    let e = Expr::app1(c("zero"), c("nat"));
    assert!(!is_const_app(&e, zero, 2));
}

#[test]
fn test_head_must_match() {
    let one = global_interner().intern("one");
    let e = Expr::app(c("zero"), [c("nat"), c("nat.has_zero")]);
    assert!(!is_const_app(&e, one, 2));
}

#[test]
fn test_curried_construction_counts_all_arguments() {
    let bit0 = global_interner().intern("bit0");
    let partial = Expr::app(c("bit0"), [c("nat"), c("nat.has_add")]);
    let full = Expr::app1(partial.clone(), c("one"));

    assert!(!is_const_app(&partial, bit0, 3));
    assert!(is_const_app(&full, bit0, 3));
}

#[test]
fn test_bare_constant() {
    let nat_zero = global_interner().intern("nat.zero");
    let e = c("nat.zero");

    assert!(is_const_app(&e, nat_zero, 0));
    assert!(is_constant(&e, nat_zero));
    assert!(!is_constant(&Expr::app1(c("nat.zero"), c("nat")), nat_zero));
}

#[test]
fn test_numeral_app_arg() {
    let e = Expr::app(c("neg"), [c("int"), c("int.has_neg"), c("x")]);
    assert_eq!(numeral_app_arg(&e, NumeralName::Neg), Some(&c("x")));
    assert_eq!(numeral_app_arg(&e, NumeralName::Bit0), None);
}
