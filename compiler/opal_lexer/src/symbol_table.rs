//! Operator symbol trie and token family table.
//!
//! Built once from an operator table. Afterwards it is read-only and can be
//! shared between any number of scanners (and threads).

use opal_diagnostic::{ErrorCode, ErrorSet, FormatError, FormatException};
use opal_ir::{Op, Sort};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::token::{TokenClass, TokenFamily, TokenType};
use crate::validator::IdValidator;

/// Punctuation shared by every operator table.
const PUNCTUATION: [(&str, TokenType); 5] = [
    ("(", TokenType::LPar),
    (")", TokenType::RPar),
    (",", TokenType::Comma),
    (".", TokenType::Dot),
    (":", TokenType::Colon),
];

/// Lexemes that always scan as boolean literals.
const BOOLEANS: [&str; 2] = ["true", "false"];

#[derive(Debug, Default)]
struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    /// Index into `SymbolTable::families` when a symbol ends here.
    family: Option<usize>,
}

/// Token families for every fixed lexeme, plus a trie over them for
/// longest-match scanning.
#[derive(Debug)]
pub struct SymbolTable {
    families: Vec<TokenFamily>,
    by_lexeme: FxHashMap<&'static str, usize>,
    trie: TrieNode,
    validator: Box<dyn IdValidator>,
    name: TokenFamily,
    int: TokenFamily,
    real: TokenFamily,
    string: TokenFamily,
    boolean: TokenFamily,
    end: TokenFamily,
}

impl SymbolTable {
    /// Build the table for `ops`, validating the operator declarations.
    ///
    /// Every inconsistency is collected; the error carries all of them.
    #[tracing::instrument(level = "debug", skip_all, fields(ops = ops.len()))]
    pub fn new(ops: &[Op], validator: Box<dyn IdValidator>) -> Result<Self, FormatException> {
        let mut table = SymbolTable {
            families: Vec::new(),
            by_lexeme: FxHashMap::default(),
            trie: TrieNode::default(),
            validator,
            name: TokenFamily::single(TokenType::Name),
            int: TokenFamily::single(TokenType::Const(Sort::Int)),
            real: TokenFamily::single(TokenType::Const(Sort::Real)),
            string: TokenFamily::single(TokenType::Const(Sort::String)),
            boolean: TokenFamily::single(TokenType::Const(Sort::Bool)),
            end: TokenFamily::single(TokenType::End),
        };
        let mut errors = ErrorSet::new();

        for (symbol, ty) in PUNCTUATION {
            table.family_mut(symbol).insert(ty);
        }
        for op in ops {
            if let Err(error) = table.declare(*op) {
                errors.add(error);
            }
        }
        for word in BOOLEANS {
            table.family_mut(word).insert(TokenType::Const(Sort::Bool));
        }
        // Word-like symbols double as identifiers, unless they are literals.
        let words: Vec<(&'static str, usize)> = table
            .by_lexeme
            .iter()
            .map(|(lexeme, index)| (*lexeme, *index))
            .collect();
        for (lexeme, index) in words {
            let family = &mut table.families[index];
            if !family.has(TokenClass::Const) && table.validator.is_valid(lexeme) {
                family.insert(TokenType::Name);
            }
        }
        for (lexeme, index) in &table.by_lexeme {
            let mut node = &mut table.trie;
            for c in lexeme.chars() {
                node = node.children.entry(c).or_default();
            }
            node.family = Some(*index);
        }

        errors.into_result()?;
        debug!(families = table.families.len(), "symbol table built");
        Ok(table)
    }

    /// Register one operator declaration.
    fn declare(&mut self, op: Op) -> Result<(), FormatError> {
        let symbol = op.symbol();
        if op.kind().is_sentinel() {
            return Err(FormatError::new(
                ErrorCode::E3003,
                format!("operator '{symbol}' uses the sentinel kind {:?}", op.kind()),
            )
            .with_text(symbol));
        }
        if op.is_atom() {
            if symbol.is_empty() {
                return Ok(());
            }
            return Err(FormatError::new(
                ErrorCode::E3002,
                format!("atom operator must not have a symbol, found '{symbol}'"),
            )
            .with_text(symbol));
        }
        self.check_symbol(symbol)?;
        if !op.is_call() && op.arity() != op.kind().arity() {
            return Err(FormatError::new(
                ErrorCode::E3003,
                format!(
                    "operator '{symbol}' declares arity {} but its kind has arity {}",
                    op.arity(),
                    op.kind().arity()
                ),
            )
            .with_text(symbol));
        }
        let Some(ty) = TokenType::for_op(op) else {
            return Ok(());
        };

        let family = self.family_mut(symbol);
        let clash = match ty.class() {
            TokenClass::InfixOp => family.has(TokenClass::PostfixOp),
            TokenClass::PostfixOp => family.has(TokenClass::InfixOp),
            _ => false,
        };
        let punctuation = PUNCTUATION.iter().any(|(p, _)| *p == symbol);
        if clash || punctuation || !family.insert(ty) {
            return Err(FormatError::new(
                ErrorCode::E3001,
                format!("symbol '{symbol}' is declared more than once in the same position"),
            )
            .with_text(symbol));
        }
        Ok(())
    }

    fn check_symbol(&self, symbol: &str) -> Result<(), FormatError> {
        let malformed = |reason: &str| {
            Err(
                FormatError::new(ErrorCode::E3002, format!("operator symbol '{symbol}' {reason}"))
                    .with_text(symbol),
            )
        };
        let Some(first) = symbol.chars().next() else {
            return malformed("is empty");
        };
        if symbol.chars().any(|c| c.is_whitespace() || c == '"') {
            return malformed("contains whitespace or a quote");
        }
        if first.is_ascii_digit() {
            return malformed("starts with a digit");
        }
        if self.validator.is_id_start(first) && !self.validator.is_valid(symbol) {
            return malformed("starts like an identifier but is not one");
        }
        Ok(())
    }

    fn family_mut(&mut self, lexeme: &'static str) -> &mut TokenFamily {
        let families = &mut self.families;
        let index = *self.by_lexeme.entry(lexeme).or_insert_with(|| {
            families.push(TokenFamily::new());
            families.len() - 1
        });
        &mut self.families[index]
    }

    /// The family of a fixed lexeme (operator, punctuation, boolean).
    pub fn family(&self, lexeme: &str) -> Option<&TokenFamily> {
        self.by_lexeme.get(lexeme).map(|index| &self.families[*index])
    }

    /// Longest fixed lexeme that prefixes `text`: its byte length and family.
    pub fn longest_match(&self, text: &str) -> Option<(usize, &TokenFamily)> {
        let mut node = &self.trie;
        let mut best = None;
        for (offset, c) in text.char_indices() {
            let Some(child) = node.children.get(&c) else {
                break;
            };
            node = child;
            if let Some(index) = node.family {
                best = Some((offset + c.len_utf8(), &self.families[index]));
            }
        }
        best
    }

    pub fn validator(&self) -> &dyn IdValidator {
        self.validator.as_ref()
    }

    /// Family of a plain identifier.
    pub fn name_family(&self) -> &TokenFamily {
        &self.name
    }

    /// Family of a literal of the given sort.
    pub fn const_family(&self, sort: Sort) -> &TokenFamily {
        match sort {
            Sort::Int => &self.int,
            Sort::Real => &self.real,
            Sort::String => &self.string,
            Sort::Bool => &self.boolean,
        }
    }

    pub fn end_family(&self) -> &TokenFamily {
        &self.end
    }

    /// Every operator declared in the table, in no particular order.
    pub fn ops(&self) -> impl Iterator<Item = Op> + '_ {
        self.families
            .iter()
            .flat_map(|family| family.types().iter().filter_map(TokenType::op))
    }
}
