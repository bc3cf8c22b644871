use super::*;

#[test]
fn test_standard_ids() {
    let ids = StandardIds;
    assert!(ids.is_valid("x"));
    assert!(ids.is_valid("_tmp$1"));
    assert!(ids.is_valid("émigré"));
    assert!(!ids.is_valid(""));
    assert!(!ids.is_valid("1x"));
    assert!(!ids.is_valid("a-b"));
}

#[test]
fn test_dashed_ids_reject_trailing_dash() {
    let ids = DashedIds;
    assert!(ids.is_valid("left-child"));
    assert!(ids.is_valid("a--b"));
    assert!(!ids.is_valid("a-"));
    assert!(!ids.is_valid("-a"));
    assert!(ids.is_id_part('-'));
    assert!(!ids.is_id_end('-'));
}
