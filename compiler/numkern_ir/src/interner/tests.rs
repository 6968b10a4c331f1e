use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_and_lookup() {
    let interner = StringInterner::new();

    let bit0 = interner.intern("bit0");
    let bit1 = interner.intern("bit1");
    let bit0_again = interner.intern("bit0");

    assert_eq!(bit0, bit0_again);
    assert_ne!(bit0, bit1);
    assert_eq!(interner.lookup(bit0), "bit0");
    assert_eq!(interner.lookup(bit1), "bit1");
}

#[test]
fn test_empty_string() {
    let interner = StringInterner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_len_counts_distinct_strings() {
    let interner = StringInterner::new();
    interner.intern("nat.zero");
    interner.intern("nat.succ");
    interner.intern("nat.zero");
    assert_eq!(interner.len(), 3);
    assert!(!interner.is_empty());
}

#[test]
fn test_dotted_names_with_common_prefix() {
    let interner = StringInterner::new();
    let zero = interner.intern("nat.has_zero");
    let one = interner.intern("nat.has_one");
    let add = interner.intern("nat.has_add");

    assert_ne!(zero, one);
    assert_ne!(one, add);
    assert_eq!(interner.lookup(add), "nat.has_add");
}

#[test]
fn test_string_lookup_trait() {
    fn via_trait<L: StringLookup>(l: &L, name: Name) -> String {
        l.lookup(name).to_owned()
    }

    let interner = StringInterner::new();
    let name = interner.intern("pos_num.one");
    assert_eq!(via_trait(&interner, name), "pos_num.one");
}

#[test]
fn test_global_interner_is_shared() {
    let a = global_interner().intern("shared_between_callers");
    let b = global_interner().intern("shared_between_callers");
    assert_eq!(a, b);
}

#[test]
fn test_concurrent_interning_agrees() {
    let interner = StringInterner::new();
    let names: Vec<Name> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| interner.intern("num.pos")))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(names.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_intern_error_message() {
    let err = InternError::ShardOverflow {
        shard_idx: 3,
        count: 10,
    };
    assert_eq!(
        err.to_string(),
        format!(
            "interner shard 3 exceeded capacity: 10 strings, max is {}",
            Name::MAX_LOCAL
        )
    );
}
