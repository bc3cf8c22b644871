//! Operator-precedence expression parser.
//!
//! A [`Parser`] is built once from an operator table, an [`AtomParser`]
//! supplying the two atom hooks, an [`IdValidator`] and a [`ParserConfig`].
//! It parses text into fixed [`Tree`]s of the form
//!
//! ```text
//! EXPR ::= ID | LITERAL | CALL-OP '(' (EXPR (',' EXPR)*)? ')'
//!        | PREFIX-OP EXPR | EXPR INFIX-OP EXPR | EXPR POSTFIX-OP | '(' EXPR ')'
//! ID   ::= (NAME ':')? NAME ('.' NAME)*
//! ```
//!
//! Precedence and associativity come from each operator's [`OpKind`].
//! [`Parser::parse`] never fails: scan and parse errors end up in the
//! returned tree's error set.
//!
//! The [`expr`] module provides a ready-made atom extension and a standard
//! operator table.

mod atoms;
mod config;
pub mod expr;
mod grammar;

use std::sync::Arc;

use opal_diagnostic::{unparsed_suffix, FormatException};
use opal_ir::{Op, OpKind, Span};
use opal_lexer::{Scanner, SymbolTable};
use opal_stack::DepthLimit;
use tracing::debug;

pub use atoms::{AtomInput, AtomParser};
pub use config::ParserConfig;
pub use opal_lexer::IdValidator;
pub use opal_tree::{Tree, TreeBuilder};

/// A parser for one operator table. Immutable once built and reusable
/// across any number of [`parse`](Self::parse) calls.
#[derive(Debug)]
pub struct Parser<H: AtomParser> {
    table: SymbolTable,
    atoms: H,
    config: ParserConfig,
}

impl<H: AtomParser> Parser<H> {
    /// Build a parser, validating the operator table.
    #[tracing::instrument(level = "debug", skip_all, fields(ops = ops.len()))]
    pub fn new(
        ops: &[Op],
        atoms: H,
        validator: impl IdValidator + 'static,
        config: ParserConfig,
    ) -> Result<Self, FormatException> {
        let table = SymbolTable::new(ops, Box::new(validator))?;
        Ok(Parser {
            table,
            atoms,
            config,
        })
    }

    /// Parse `text` into a fixed tree.
    ///
    /// If scanning or parsing fails, the result is a single node carrying
    /// the errors. Input left over after a complete expression is reported
    /// on the root as an unparsed suffix.
    #[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
    pub fn parse(&self, text: &str) -> Tree<H::Atom> {
        let source: Arc<str> = Arc::from(text);
        let depth = DepthLimit::new(self.config.max_depth);
        let mut state = grammar::ParseState {
            scanner: Scanner::new(&self.table, text),
            atoms: &self.atoms,
            config: &self.config,
            depth: &depth,
            source: Arc::clone(&source),
        };
        match parse_root(&mut state) {
            Ok(tree) => tree,
            Err(err) => {
                debug!(errors = err.errors().len(), "parse failed");
                TreeBuilder::error(err.into_errors())
                    .with_span(Span::from_range_saturating(0..text.len()))
                    .with_source(source)
                    .fix()
            }
        }
    }

    /// Check whether `text` parses without errors.
    pub fn accepts(&self, text: &str) -> bool {
        !self.parse(text).has_errors()
    }

    /// Text that parses back to `tree`: the recorded source fragment, or
    /// the bracketed rendering for trees built by hand.
    pub fn to_parsable_string(&self, tree: &Tree<H::Atom>) -> String {
        tree.parse_string()
            .map_or_else(|| tree.to_flat_string(), str::to_owned)
    }

    pub fn description(&self) -> Option<&str> {
        self.config.description.as_deref()
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn atoms(&self) -> &H {
        &self.atoms
    }

    /// The operators this parser was built from, in no particular order.
    pub fn ops(&self) -> impl Iterator<Item = Op> + '_ {
        self.table.ops()
    }
}

/// A complete expression followed by end of input.
fn parse_root<H: AtomParser>(
    state: &mut grammar::ParseState<'_, H>,
) -> Result<Tree<H::Atom>, FormatException> {
    let tree = state.parse_expr(OpKind::None)?;
    let next = state.scanner.peek()?;
    if next.is_end() {
        return Ok(tree);
    }
    let text = state.scanner.text();
    let start = next.span().start;
    let suffix = Span::from_range_saturating(start as usize..text.trim_end().len());
    let mut root = tree.thaw();
    root.add_error(unparsed_suffix(
        suffix.slice(text).unwrap_or_default(),
        suffix,
    ));
    Ok(root.fix())
}
