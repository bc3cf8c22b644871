//! On-demand scanner with one token of lookahead and one of rollback.
//!
//! Tokens are produced lazily from the source text as the parser asks for
//! them. Scan failures are returned as `Err(FormatException)` and are meant
//! to be propagated with `?` up to the parser's entry point.

use opal_diagnostic::{expected_token, unrecognized_char, unterminated_string, FormatException};
use opal_ir::{Sort, Span};
use smallvec::SmallVec;
use tracing::trace;

use crate::symbol_table::SymbolTable;
use crate::token::{Token, TokenClass, TokenFamily};

/// Scanner over a single input string.
pub struct Scanner<'t> {
    table: &'t SymbolTable,
    text: &'t str,
    /// Byte offset of the next unscanned character.
    pos: usize,
    /// Scanned but unconsumed tokens; the last element comes out first.
    pending: SmallVec<[Token<'t>; 2]>,
    /// Last consumed token, with the value of `last_end` before it.
    previous: Option<(Token<'t>, u32)>,
    last_end: u32,
}

impl<'t> Scanner<'t> {
    pub fn new(table: &'t SymbolTable, text: &'t str) -> Self {
        Scanner {
            table,
            text,
            pos: 0,
            pending: SmallVec::new(),
            previous: None,
            last_end: 0,
        }
    }

    pub fn text(&self) -> &'t str {
        self.text
    }

    pub fn table(&self) -> &'t SymbolTable {
        self.table
    }

    /// The next token, without consuming it.
    pub fn peek(&mut self) -> Result<Token<'t>, FormatException> {
        if let Some(token) = self.pending.last() {
            return Ok(*token);
        }
        let token = self.scan()?;
        self.pending.push(token);
        Ok(token)
    }

    /// Consume and return the next token.
    pub fn advance(&mut self) -> Result<Token<'t>, FormatException> {
        let token = self.peek()?;
        self.pending.pop();
        self.previous = Some((token, self.last_end));
        self.last_end = token.span().end;
        Ok(token)
    }

    /// Undo the most recent [`advance`](Self::advance).
    ///
    /// Only one level is kept: returns `false` if there is nothing to undo.
    pub fn rollback(&mut self) -> bool {
        let Some((token, last_end)) = self.previous.take() else {
            return false;
        };
        self.pending.push(token);
        self.last_end = last_end;
        true
    }

    /// Check whether the next token can be read as `class`.
    pub fn check(&mut self, class: TokenClass) -> Result<bool, FormatException> {
        Ok(self.peek()?.has(class))
    }

    /// Consume the next token if it can be read as `class`.
    pub fn eat(&mut self, class: TokenClass) -> Result<Option<Token<'t>>, FormatException> {
        if self.check(class)? {
            self.advance().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Consume a token of `class` or fail with an "expected" error.
    pub fn expect(&mut self, class: TokenClass) -> Result<Token<'t>, FormatException> {
        let token = self.peek()?;
        if token.has(class) {
            return self.advance();
        }
        let expected = class.to_string();
        Err(expected_token(&expected, self.lexeme(token), token.span()).into())
    }

    /// Check whether all input has been consumed.
    pub fn is_at_end(&mut self) -> Result<bool, FormatException> {
        Ok(self.peek()?.is_end())
    }

    /// Source text of `token`; empty for the end token.
    pub fn lexeme(&self, token: Token<'_>) -> &'t str {
        token.span().slice(self.text).unwrap_or_default()
    }

    /// End offset of the last consumed token (0 before the first).
    pub fn last_end(&self) -> u32 {
        self.last_end
    }

    /// Scan one token starting at `self.pos`.
    fn scan(&mut self) -> Result<Token<'t>, FormatException> {
        self.skip_whitespace();
        let start = self.pos;
        let rest = &self.text[start..];
        let mut chars = rest.chars();
        let Some(first) = chars.next() else {
            return Ok(Token::new(self.table.end_family(), span(start, start)));
        };
        let starts_number =
            first.is_ascii_digit() || (first == '.' && chars.next().is_some_and(|c| c.is_ascii_digit()));

        let scanned = if starts_number {
            Some(self.number(start))
        } else if self.table.validator().is_id_start(first) {
            self.identifier(start)
        } else if first == '"' {
            Some(self.string(start)?)
        } else {
            None
        };
        let token = match scanned {
            Some(token) => token,
            None => self.symbol(start, first)?,
        };
        trace!(lexeme = self.lexeme(token), span = %token.span(), "scanned token");
        Ok(token)
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.text[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Integer or real literal. A `.` continues the literal only when a
    /// digit follows it.
    fn number(&mut self, start: usize) -> Token<'t> {
        let bytes = self.text.as_bytes();
        let mut end = eat_digits(bytes, start);
        let mut sort = Sort::Int;
        if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
            sort = Sort::Real;
            end = eat_digits(bytes, end + 1);
        }
        self.pos = end;
        Token::new(self.table.const_family(sort), span(start, end))
    }

    /// Identifier, keyword operator, or boolean literal.
    ///
    /// Returns `None` when the run trims down to nothing, leaving the
    /// character to the symbol trie.
    fn identifier(&mut self, start: usize) -> Option<Token<'t>> {
        let validator = self.table.validator();
        let rest = &self.text[start..];
        let mut end = rest
            .char_indices()
            .skip(1)
            .find(|(_, c)| !(validator.is_id_part(*c) || validator.is_id_end(*c)))
            .map_or(rest.len(), |(offset, _)| offset);
        while let Some(last) = rest[..end].chars().next_back() {
            if validator.is_id_end(last) {
                break;
            }
            end -= last.len_utf8();
        }
        if end == 0 {
            return None;
        }

        let mut lexeme = &rest[..end];
        let family = match self.table.family(lexeme) {
            Some(family) => family,
            None if validator.is_valid(lexeme) => self.table.name_family(),
            None => {
                // Fall back to the longest prefix that is an identifier.
                let boundary = lexeme
                    .char_indices()
                    .map(|(offset, c)| offset + c.len_utf8())
                    .rev()
                    .find(|&len| validator.is_valid(&lexeme[..len]))?;
                lexeme = &lexeme[..boundary];
                self.family_of_word(lexeme)
            }
        };
        self.pos = start + lexeme.len();
        Some(Token::new(family, span(start, self.pos)))
    }

    fn family_of_word(&self, lexeme: &str) -> &'t TokenFamily {
        self.table
            .family(lexeme)
            .unwrap_or_else(|| self.table.name_family())
    }

    /// Double-quoted literal; a backslash escapes the following character.
    fn string(&mut self, start: usize) -> Result<Token<'t>, FormatException> {
        let mut escaped = false;
        for (offset, c) in self.text[start..].char_indices().skip(1) {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => {
                    self.pos = start + offset + 1;
                    return Ok(Token::new(
                        self.table.const_family(Sort::String),
                        span(start, self.pos),
                    ));
                }
                _ => {}
            }
        }
        Err(unterminated_string(span(start, self.text.len())).into())
    }

    /// Longest operator symbol or punctuation at `start`.
    fn symbol(&mut self, start: usize, first: char) -> Result<Token<'t>, FormatException> {
        match self.table.longest_match(&self.text[start..]) {
            Some((len, family)) => {
                self.pos = start + len;
                Ok(Token::new(family, span(start, self.pos)))
            }
            None => Err(unrecognized_char(first, span(start, start + first.len_utf8())).into()),
        }
    }
}

fn eat_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

fn span(start: usize, end: usize) -> Span {
    Span::from_range_saturating(start..end)
}
