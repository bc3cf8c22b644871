use super::*;

const ALL: [ErrorCode; 13] = [
    ErrorCode::E0001,
    ErrorCode::E0002,
    ErrorCode::E0003,
    ErrorCode::E1001,
    ErrorCode::E1002,
    ErrorCode::E1003,
    ErrorCode::E1004,
    ErrorCode::E1005,
    ErrorCode::E1006,
    ErrorCode::E2001,
    ErrorCode::E3001,
    ErrorCode::E3002,
    ErrorCode::E3003,
];

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2001.as_str(), "E2001");
}

#[test]
fn test_from_str_round_trips() {
    for code in ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(code));
    }
    assert!("E9999".parse::<ErrorCode>().is_err());
}

#[test]
fn test_phase_predicates_partition_codes() {
    for code in ALL {
        let phases = [
            code.is_scan_error(),
            code.is_parse_error(),
            code.is_tree_error(),
            code.is_config_error(),
        ];
        assert_eq!(phases.iter().filter(|p| **p).count(), 1, "{code}");
    }
    assert!(ErrorCode::E0002.is_scan_error());
    assert!(ErrorCode::E1005.is_parse_error());
    assert!(ErrorCode::E2001.is_tree_error());
    assert!(ErrorCode::E3001.is_config_error());
}
