use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_name_layout() {
    let name = Name::new(9, 4242);
    assert_eq!(name.shard(), 9);
    assert_eq!(name.local(), 4242);
    assert_eq!(name.raw(), (9 << 28) | 4242);
}

#[test]
fn test_name_default_is_empty() {
    assert_eq!(Name::default(), Name::EMPTY);
    assert_eq!(Name::EMPTY.shard(), 0);
    assert_eq!(Name::EMPTY.local(), 0);
}

#[test]
fn test_name_debug() {
    assert_eq!(format!("{:?}", Name::new(3, 17)), "Name(3:17)");
}

#[test]
fn test_name_ord_follows_raw() {
    assert!(Name::new(0, 1) < Name::new(0, 2));
    assert!(Name::new(0, Name::MAX_LOCAL) < Name::new(1, 0));
}
