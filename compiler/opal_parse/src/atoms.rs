//! Hooks that turn name and literal tokens into atom payloads.

use std::fmt;

use opal_diagnostic::FormatException;
use opal_ir::{QualName, Sort, Span};
use opal_lexer::{Scanner, TokenClass};

/// Recognizes atoms for a [`Parser`](crate::Parser).
///
/// The parser calls [`parse_name`](Self::parse_name) when the next token can
/// be read as a name and [`parse_const`](Self::parse_const) for literal
/// tokens. Everything else (operators, brackets, calls) is handled by the
/// parser itself.
pub trait AtomParser {
    /// Payload stored in atom nodes.
    type Atom: Clone + fmt::Debug + fmt::Display + PartialEq;

    /// Consume an identifier from `input`. The next token is a name.
    fn parse_name(&self, input: &mut AtomInput<'_, '_>) -> Result<Self::Atom, FormatException>;

    /// Convert a literal of the given sort. `lexeme` is the literal exactly
    /// as written, quotes included.
    fn parse_const(&self, sort: Sort, lexeme: &str, span: Span) -> Result<Self::Atom, FormatException>;
}

/// The scanner as seen by [`AtomParser::parse_name`].
pub struct AtomInput<'s, 't> {
    scanner: &'s mut Scanner<'t>,
    qualified_ids: bool,
}

impl<'s, 't> AtomInput<'s, 't> {
    pub(crate) fn new(scanner: &'s mut Scanner<'t>, qualified_ids: bool) -> Self {
        AtomInput {
            scanner,
            qualified_ids,
        }
    }

    /// Whether `prefix:a.b` identifiers are enabled.
    pub fn qualified_ids(&self) -> bool {
        self.qualified_ids
    }

    pub fn scanner(&mut self) -> &mut Scanner<'t> {
        self.scanner
    }

    /// Consume one name token and return its text.
    pub fn name(&mut self) -> Result<&'t str, FormatException> {
        let token = self.scanner.expect(TokenClass::Name)?;
        Ok(self.scanner.lexeme(token))
    }

    /// Consume `(NAME ':')? NAME ('.' NAME)*`, or a single name when
    /// qualified identifiers are disabled.
    pub fn qualified_name(&mut self) -> Result<QualName, FormatException> {
        let first = self.name()?;
        if !self.qualified_ids {
            return Ok(QualName::simple(first));
        }
        let (prefix, first) = if self.scanner.eat(TokenClass::Colon)?.is_some() {
            (Some(first), self.name()?)
        } else {
            (None, first)
        };
        let mut segments = vec![first.to_owned()];
        while self.scanner.eat(TokenClass::Dot)?.is_some() {
            segments.push(self.name()?.to_owned());
        }
        let name = QualName::new(segments);
        Ok(match prefix {
            Some(prefix) => name.with_prefix(prefix),
            None => name,
        })
    }
}
