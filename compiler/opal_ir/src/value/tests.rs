use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_ints() {
    assert_eq!(Constant::parse(Sort::Int, "42"), Ok(Constant::Int(42)));
    assert_eq!(
        Constant::parse(Sort::Int, "99999999999999999999"),
        Err(ConstantError::IntOutOfRange("99999999999999999999".into()))
    );
    assert!(matches!(
        Constant::parse(Sort::Int, "4x"),
        Err(ConstantError::Malformed { sort: Sort::Int, .. })
    ));
}

#[test]
fn test_parse_reals() {
    assert_eq!(Constant::parse(Sort::Real, "1.5"), Ok(Constant::Real(1.5)));
    assert_eq!(Constant::parse(Sort::Real, ".25"), Ok(Constant::Real(0.25)));
    assert!(Constant::parse(Sort::Real, "1.2.3").is_err());
}

#[test]
fn test_parse_bools() {
    assert_eq!(Constant::parse(Sort::Bool, "true"), Ok(Constant::Bool(true)));
    assert_eq!(Constant::parse(Sort::Bool, "false"), Ok(Constant::Bool(false)));
    assert!(Constant::parse(Sort::Bool, "yes").is_err());
}

#[test]
fn test_parse_strings_with_escapes() {
    assert_eq!(
        Constant::parse(Sort::String, r#""a\"b\\c\nd""#),
        Ok(Constant::String("a\"b\\c\nd".into()))
    );
    assert!(Constant::parse(Sort::String, "\"open").is_err());
    assert!(Constant::parse(Sort::String, "\"trailing\\\"").is_err());
}

#[test]
fn test_display_scans_back() {
    let cases = [
        Constant::Int(7),
        Constant::Real(2.0),
        Constant::Real(0.125),
        Constant::Bool(false),
        Constant::String("say \"hi\"\n".into()),
    ];
    for constant in cases {
        let lexeme = constant.to_string();
        assert_eq!(Constant::parse(constant.sort(), &lexeme), Ok(constant));
    }
}

#[test]
fn test_real_equality_by_bits() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(Constant::Real(1.5));
    set.insert(Constant::Real(1.5));
    set.insert(Constant::Int(1));
    assert_eq!(set.len(), 2);
    assert_ne!(Constant::Real(0.0), Constant::Real(-0.0));
}

#[test]
fn test_qual_name_display() {
    let name = QualName::new(vec!["pkg".into(), "sub".into(), "name".into()]);
    assert_eq!(name.to_string(), "pkg.sub.name");
    assert_eq!(name.last(), Some("name"));
    assert!(!name.is_simple());

    let prefixed = QualName::simple("x").with_prefix("node");
    assert_eq!(prefixed.to_string(), "node:x");
    assert_eq!(prefixed.prefix(), Some("node"));
    assert!(QualName::simple("x").is_simple());
}
