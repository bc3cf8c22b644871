//! Primary expressions: atoms, prefix operators, calls and brackets.

use opal_diagnostic::{call_arity_mismatch, unexpected_token, FormatException};
use opal_ir::{Op, OpKind, Span};
use opal_lexer::{Token, TokenClass};
use opal_tree::{Tree, TreeBuilder};

use super::ParseState;
use crate::{AtomInput, AtomParser};

impl<H: AtomParser> ParseState<'_, H> {
    pub(super) fn parse_primary(&mut self) -> Result<Tree<H::Atom>, FormatException> {
        let token = self.scanner.peek()?;
        if let Some(op) = token.op(TokenClass::PrefixOp) {
            return self.parse_prefix(op);
        }
        if token.has(TokenClass::LPar) {
            return self.parse_bracketed();
        }
        if token.has(TokenClass::Name) {
            return self.parse_name();
        }
        if let Some(sort) = token.family().sort() {
            let token = self.scanner.advance()?;
            let lexeme = self.scanner.lexeme(token);
            let atom = self.atoms.parse_const(sort, lexeme, token.span())?;
            return Ok(self.finish(TreeBuilder::atom(atom), token.span().start));
        }
        Err(unexpected_token(self.scanner.lexeme(token), token.span()).into())
    }

    /// A prefix or call operator, unless the token starts a qualified name
    /// (`not.x` with `not` declared as an operator).
    fn parse_prefix(&mut self, op: Op) -> Result<Tree<H::Atom>, FormatException> {
        let token = self.scanner.advance()?;
        if self.config.qualified_ids
            && token.has(TokenClass::Name)
            && (self.scanner.check(TokenClass::Dot)? || self.scanner.check(TokenClass::Colon)?)
        {
            self.scanner.rollback();
            return self.parse_name();
        }
        if op.is_call() {
            return self.parse_call(op, token);
        }
        let mut node = TreeBuilder::new(op);
        node.push(self.parse_expr(op.kind())?);
        Ok(self.finish(node, token.span().start))
    }

    /// `op '(' (EXPR (',' EXPR)*)? ')'`, after `op` has been consumed.
    fn parse_call(&mut self, op: Op, token: Token<'_>) -> Result<Tree<H::Atom>, FormatException> {
        self.scanner.expect(TokenClass::LPar)?;
        let mut node = TreeBuilder::new(op);
        if self.scanner.eat(TokenClass::RPar)?.is_none() {
            loop {
                node.push(self.parse_expr(OpKind::None)?);
                if self.scanner.eat(TokenClass::Comma)?.is_none() {
                    break;
                }
            }
            self.scanner.expect(TokenClass::RPar)?;
        }

        let start = token.span().start;
        let found = node.children().len();
        if let Some(expected) = op.arity().fixed() {
            if expected != found {
                let span = Span::new(start, self.scanner.last_end());
                node.add_error(call_arity_mismatch(op.symbol(), expected, found, span));
            }
        }
        Ok(self.finish(node, start))
    }

    /// `'(' EXPR ')'`; the brackets leave no node of their own.
    fn parse_bracketed(&mut self) -> Result<Tree<H::Atom>, FormatException> {
        self.scanner.advance()?;
        let inner = self.parse_expr(OpKind::None)?;
        self.scanner.expect(TokenClass::RPar)?;
        Ok(inner)
    }

    fn parse_name(&mut self) -> Result<Tree<H::Atom>, FormatException> {
        let start = self.scanner.peek()?.span().start;
        let mut input = AtomInput::new(&mut self.scanner, self.config.qualified_ids);
        let atom = self.atoms.parse_name(&mut input)?;
        Ok(self.finish(TreeBuilder::atom(atom), start))
    }
}
