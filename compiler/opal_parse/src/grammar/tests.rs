use opal_diagnostic::ErrorCode;
use opal_ir::{Op, OpKind, Span};
use opal_lexer::{TokenFamily, TokenType};

use super::*;

fn infix(symbol: &'static str, kind: OpKind) -> (Op, TokenFamily) {
    let op = Op::new(symbol, kind);
    (op, TokenFamily::single(TokenType::InfixOp(op)))
}

#[test]
fn test_tighter_operator_is_admitted() {
    let (op, family) = infix("*", OpKind::Mult);
    let token = Token::new(&family, Span::new(0, 1));
    assert_eq!(admits(OpKind::Add, op, token).ok(), Some(true));
    assert_eq!(admits(OpKind::None, op, token).ok(), Some(true));
}

#[test]
fn test_looser_operator_ends_expression() {
    let (op, family) = infix("+", OpKind::Add);
    let token = Token::new(&family, Span::new(0, 1));
    assert_eq!(admits(OpKind::Mult, op, token).ok(), Some(false));
}

#[test]
fn test_equal_kind_follows_direction() {
    let (minus, family) = infix("-", OpKind::Add);
    let token = Token::new(&family, Span::new(0, 1));
    assert_eq!(admits(OpKind::Add, minus, token).ok(), Some(false));

    let (implies, family) = infix("=>", OpKind::Implies);
    let token = Token::new(&family, Span::new(0, 2));
    assert_eq!(admits(OpKind::Implies, implies, token).ok(), Some(true));

    let (equal, family) = infix("==", OpKind::Equal);
    let token = Token::new(&family, Span::new(4, 6));
    let err = admits(OpKind::Equal, equal, token).err().map(|e| e.errors().codes());
    assert_eq!(err, Some(vec![ErrorCode::E1003]));
}

#[test]
fn test_trailing_op_prefers_infix() {
    let minus = Op::new("-", OpKind::Add);
    let mut family = TokenFamily::single(TokenType::PrefixOp(Op::new("-", OpKind::Unary)));
    assert_eq!(trailing_op(Token::new(&family, Span::DUMMY)), None);
    family.insert(TokenType::InfixOp(minus));
    assert_eq!(trailing_op(Token::new(&family, Span::DUMMY)), Some(minus));

    let prime = Op::new("'", OpKind::Postfix);
    let family = TokenFamily::single(TokenType::PostfixOp(prime));
    assert_eq!(trailing_op(Token::new(&family, Span::DUMMY)), Some(prime));
}
