use opal_diagnostic::unexpected_token;
use opal_ir::{Arity, Op, OpKind, Span};
use pretty_assertions::assert_eq;

use crate::{Tree, TreeBuilder};

fn leaf(name: &'static str) -> Tree<&'static str> {
    TreeBuilder::atom(name).fix()
}

fn node(op: Op, children: Vec<Tree<&'static str>>) -> Tree<&'static str> {
    let mut builder = TreeBuilder::new(op);
    for child in children {
        builder.push(child);
    }
    builder.fix()
}

#[test]
fn test_flat_infix_is_bracketed() {
    let product = node(
        Op::new("*", OpKind::Mult),
        vec![node(Op::new("+", OpKind::Add), vec![leaf("a"), leaf("b")]), leaf("c")],
    );
    assert_eq!(product.to_flat_string(), "((a + b) * c)");
    assert_eq!(product.to_string(), "((a + b) * c)");
}

#[test]
fn test_flat_prefix_is_bracketed() {
    let neg = node(Op::new("-", OpKind::Unary), vec![leaf("a")]);
    assert_eq!(neg.to_flat_string(), "(-a)");

    let double = node(Op::new("-", OpKind::Unary), vec![neg]);
    assert_eq!(double.to_flat_string(), "(-(-a))");

    let not = node(Op::new("not", OpKind::Not), vec![leaf("a")]);
    assert_eq!(not.to_flat_string(), "(not a)");

    let grouped = node(
        Op::new("!", OpKind::Not),
        vec![node(Op::new("&", OpKind::And), vec![leaf("a"), leaf("b")])],
    );
    assert_eq!(grouped.to_flat_string(), "(!(a & b))");
}

#[test]
fn test_flat_postfix_and_call() {
    let prime = node(Op::new("'", OpKind::Postfix), vec![leaf("x")]);
    assert_eq!(prime.to_flat_string(), "(x')");

    let call = node(Op::call("max", Arity::Variable), vec![leaf("a"), prime, leaf("b")]);
    assert_eq!(call.to_flat_string(), "max(a, (x'), b)");

    let empty = node(Op::call("max", Arity::Variable), vec![]);
    assert_eq!(empty.to_flat_string(), "max()");
}

#[test]
fn test_flat_error_placeholder() {
    let tree: Tree<&str> = TreeBuilder::error(unexpected_token("", Span::point(0)).into()).fix();
    assert_eq!(tree.to_flat_string(), "?");
}

#[test]
fn test_tree_string_indents_children() {
    let sum = node(
        Op::new("+", OpKind::Add),
        vec![leaf("a"), node(Op::new("*", OpKind::Mult), vec![leaf("b"), leaf("c")])],
    );
    assert_eq!(sum.to_tree_string(), "+\n  a\n  *\n    b\n    c\n");
}

#[test]
fn test_tree_string_lists_errors_where_they_arise() {
    let mut bad = TreeBuilder::atom("b");
    bad.add_error(unexpected_token(")", Span::new(2, 3)));
    let sum = node(Op::new("+", OpKind::Add), vec![leaf("a"), bad.fix()]);
    assert_eq!(
        sum.to_tree_string(),
        "+\n  a\n  b\n    ! [E1001] unexpected token ')' (at 2..3)\n"
    );
}
