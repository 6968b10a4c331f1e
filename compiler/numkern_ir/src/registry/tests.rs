use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_all_is_in_index_order() {
    for (i, n) in NumeralName::ALL.iter().enumerate() {
        assert_eq!(n.index(), i);
    }
}

#[test]
fn test_constant_strings_are_distinct() {
    let mut seen = rustc_hash::FxHashSet::default();
    for n in NumeralName::ALL {
        assert!(seen.insert(n.as_str()), "duplicate name {}", n.as_str());
    }
}

#[test]
fn test_numeral_node_arities() {
    assert_eq!(NumeralName::Zero.arity(), 2);
    assert_eq!(NumeralName::One.arity(), 2);
    assert_eq!(NumeralName::Bit0.arity(), 3);
    assert_eq!(NumeralName::Bit1.arity(), 4);
    assert_eq!(NumeralName::Neg.arity(), 3);
    assert_eq!(NumeralName::NatSucc.arity(), 1);
    assert_eq!(NumeralName::PosBit1.arity(), 1);
    assert_eq!(NumeralName::NumPos.arity(), 1);
    assert_eq!(NumeralName::NumZero.arity(), 0);
    assert_eq!(NumeralName::PosOne.arity(), 0);
}

#[test]
fn test_private_registry_round_trips() {
    let interner = StringInterner::new();
    let names = NumeralNames::new(&interner);
    for n in NumeralName::ALL {
        let name = names.get(n);
        assert_eq!(interner.lookup(name), n.as_str());
        assert_eq!(names.lookup(name), Some(n));
    }
    assert_eq!(names.lookup(interner.intern("int.add")), None);
}

#[test]
fn test_global_registry_uses_global_interner() {
    let names = numeral_names();
    assert_eq!(names.get(NumeralName::Bit1), global_interner().intern("bit1"));
    assert!(std::ptr::eq(names, numeral_names()));
}
