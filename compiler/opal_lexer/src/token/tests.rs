use super::*;
use opal_ir::OpKind;

#[test]
fn test_family_keeps_one_type_per_class() {
    let minus = Op::new("-", OpKind::Add);
    let negate = Op::new("-", OpKind::Unary);

    let mut family = TokenFamily::new();
    assert!(family.insert(TokenType::InfixOp(minus)));
    assert!(family.insert(TokenType::PrefixOp(negate)));
    assert!(!family.insert(TokenType::InfixOp(Op::new("-", OpKind::Mult))));

    assert_eq!(family.types().len(), 2);
    assert_eq!(family.op(TokenClass::InfixOp), Some(minus));
    assert_eq!(family.op(TokenClass::PrefixOp), Some(negate));
    assert!(!family.has(TokenClass::Name));
}

#[test]
fn test_family_sort() {
    let family = TokenFamily::single(TokenType::Const(Sort::Bool));
    assert_eq!(family.sort(), Some(Sort::Bool));
    assert_eq!(TokenFamily::single(TokenType::Name).sort(), None);
}

#[test]
fn test_op_classification_by_placement() {
    let call = Op::new("max", OpKind::Call);
    assert_eq!(TokenType::for_op(call), Some(TokenType::PrefixOp(call)));
    assert_eq!(TokenType::for_op(Op::atom()), None);
    assert_eq!(
        TokenClass::for_placement(opal_ir::Placement::Postfix),
        Some(TokenClass::PostfixOp)
    );
}

#[test]
fn test_token_is_copy_and_queries_family() {
    let family = TokenFamily::single(TokenType::End);
    let token = Token::new(&family, Span::point(3));
    let copy = token;
    assert!(copy.is_end());
    assert_eq!(token.span(), Span::point(3));
}
