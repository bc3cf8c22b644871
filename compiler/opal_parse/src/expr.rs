//! Expression atoms: qualified identifiers and typed constants.
//!
//! [`ExprAtoms`] is the stock [`AtomParser`]: names become
//! [`ExprAtom::Id`], literals become [`ExprAtom::Const`].
//! [`standard_ops`] is an operator table for boolean and arithmetic
//! expressions over those atoms.

use std::fmt;

use opal_diagnostic::{invalid_literal, FormatException};
use opal_ir::{Arity, Constant, Op, OpKind, QualName, Sort, Span};
use opal_lexer::StandardIds;

use crate::{AtomInput, AtomParser, Parser, ParserConfig};

/// Payload of an expression leaf.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExprAtom {
    Id(QualName),
    Const(Constant),
}

impl ExprAtom {
    pub fn as_id(&self) -> Option<&QualName> {
        match self {
            ExprAtom::Id(name) => Some(name),
            ExprAtom::Const(_) => None,
        }
    }

    pub fn as_const(&self) -> Option<&Constant> {
        match self {
            ExprAtom::Const(value) => Some(value),
            ExprAtom::Id(_) => None,
        }
    }
}

impl fmt::Display for ExprAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprAtom::Id(name) => write!(f, "{name}"),
            ExprAtom::Const(value) => write!(f, "{value}"),
        }
    }
}

/// Atom hooks producing [`ExprAtom`]s.
#[derive(Copy, Clone, Debug, Default)]
pub struct ExprAtoms;

impl AtomParser for ExprAtoms {
    type Atom = ExprAtom;

    fn parse_name(&self, input: &mut AtomInput<'_, '_>) -> Result<ExprAtom, FormatException> {
        input.qualified_name().map(ExprAtom::Id)
    }

    fn parse_const(&self, sort: Sort, lexeme: &str, span: Span) -> Result<ExprAtom, FormatException> {
        Constant::parse(sort, lexeme)
            .map(ExprAtom::Const)
            .map_err(|err| invalid_literal(&err, lexeme, span).into())
    }
}

static STANDARD_OPS: [Op; 26] = [
    Op::atom(),
    Op::new("=>", OpKind::Implies),
    Op::new("|", OpKind::Or),
    Op::new("or", OpKind::Or),
    Op::new("&", OpKind::And),
    Op::new("and", OpKind::And),
    Op::new("!", OpKind::Not),
    Op::new("not", OpKind::Not),
    Op::new("==", OpKind::Equal),
    Op::new("!=", OpKind::Equal),
    Op::new("<", OpKind::Compare),
    Op::new("<=", OpKind::Compare),
    Op::new(">", OpKind::Compare),
    Op::new(">=", OpKind::Compare),
    Op::new("+", OpKind::Add),
    Op::new("-", OpKind::Add),
    Op::new("*", OpKind::Mult),
    Op::new("/", OpKind::Mult),
    Op::new("%", OpKind::Mult),
    Op::new("-", OpKind::Unary),
    Op::new("+", OpKind::Unary),
    Op::new("'", OpKind::Postfix),
    Op::call("max", Arity::Variable),
    Op::call("min", Arity::Variable),
    Op::call("pow", Arity::Fixed(2)),
    Op::call("abs", Arity::Fixed(1)),
];

/// Operators for boolean and arithmetic expressions, loosest first:
///
/// | kind      | symbols                  |
/// |-----------|--------------------------|
/// | implies   | `=>` (right-assoc)       |
/// | or        | `\|` `or`                |
/// | and       | `&` `and`                |
/// | not       | `!` `not` (prefix)       |
/// | equal     | `==` `!=` (non-assoc)    |
/// | compare   | `<` `<=` `>` `>=`        |
/// | add       | `+` `-`                  |
/// | mult      | `*` `/` `%`              |
/// | unary     | `-` `+` (prefix)         |
/// | postfix   | `'`                      |
/// | call      | `max` `min` `pow/2` `abs/1` |
pub fn standard_ops() -> &'static [Op] {
    &STANDARD_OPS
}

/// An expression parser over [`standard_ops`] with standard identifiers.
pub fn parser(config: ParserConfig) -> Result<Parser<ExprAtoms>, FormatException> {
    Parser::new(standard_ops(), ExprAtoms, StandardIds, config)
}
