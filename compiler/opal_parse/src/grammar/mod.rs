//! Precedence climbing.
//!
//! `parse_expr(context)` parses one primary expression and then keeps
//! absorbing infix and postfix operators that bind more tightly than
//! `context`:
//!
//! - a looser operator ends the expression (the caller takes it);
//! - an operator of the same kind continues only if it is
//!   right-associative, stops if left-associative, and is an error if it
//!   is non-associative;
//! - a tighter operator is consumed and, if infix, its right operand is
//!   parsed with the operator's own kind as context.
//!
//! - `mod.rs`: state, depth guard, infix/postfix loop
//! - `primary.rs`: atoms, prefix operators, calls, brackets

mod primary;

use std::cmp::Ordering;
use std::sync::Arc;

use opal_diagnostic::{nested_too_deeply, non_associative, FormatException};
use opal_ir::{Direction, Op, OpKind, Placement, Span};
use opal_lexer::{Scanner, Token, TokenClass};
use opal_stack::{ensure_sufficient_stack, DepthLimit};
use opal_tree::{Tree, TreeBuilder};
use tracing::trace;

use crate::{AtomParser, ParserConfig};

/// State of a single `parse` call.
pub(crate) struct ParseState<'a, H: AtomParser> {
    pub(crate) scanner: Scanner<'a>,
    pub(crate) atoms: &'a H,
    pub(crate) config: &'a ParserConfig,
    pub(crate) depth: &'a DepthLimit,
    pub(crate) source: Arc<str>,
}

impl<H: AtomParser> ParseState<'_, H> {
    /// Parse an expression whose operators all bind tighter than `context`.
    ///
    /// Each call enters one nesting level; past the configured limit the
    /// parse fails instead of recursing further.
    pub(crate) fn parse_expr(&mut self, context: OpKind) -> Result<Tree<H::Atom>, FormatException> {
        let depth = self.depth;
        let Some(_level) = depth.enter() else {
            let at = Span::point(self.scanner.last_end());
            return Err(nested_too_deeply(depth.max(), at).into());
        };
        ensure_sufficient_stack(|| self.parse_expr_inner(context))
    }

    fn parse_expr_inner(&mut self, context: OpKind) -> Result<Tree<H::Atom>, FormatException> {
        let start = self.scanner.peek()?.span().start;
        let mut result = self.parse_primary()?;

        loop {
            let token = self.scanner.peek()?;
            let Some(op) = trailing_op(token) else {
                break;
            };
            if !admits(context, op, token)? {
                break;
            }
            self.scanner.advance()?;
            trace!(op = op.symbol(), ?context, "consumed operator");

            let mut node = TreeBuilder::new(op);
            node.push(result);
            if op.placement() == Placement::Infix {
                node.push(self.parse_expr(op.kind())?);
            }
            result = self.finish(node, start);
        }

        Ok(result)
    }

    /// Record the node's span from `start` to the last consumed token, then
    /// fix it.
    fn finish(&self, mut node: TreeBuilder<H::Atom>, start: u32) -> Tree<H::Atom> {
        node.set_span(Span::new(start, self.scanner.last_end()));
        node.set_source(Arc::clone(&self.source));
        node.fix()
    }
}

/// The infix or postfix operator `token` can stand for, if any.
fn trailing_op(token: Token<'_>) -> Option<Op> {
    token
        .op(TokenClass::InfixOp)
        .or_else(|| token.op(TokenClass::PostfixOp))
}

/// Check whether `op` may extend an expression parsed under `context`.
fn admits(context: OpKind, op: Op, token: Token<'_>) -> Result<bool, FormatException> {
    match op.kind().cmp(&context) {
        Ordering::Greater => Ok(true),
        Ordering::Less => Ok(false),
        Ordering::Equal => match op.direction() {
            Direction::Right => Ok(true),
            Direction::Left => Ok(false),
            Direction::Neither => Err(non_associative(op.symbol(), token.span()).into()),
        },
    }
}

#[cfg(test)]
mod tests;
