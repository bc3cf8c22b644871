//! Scanner for operator-table-driven expression languages.
//!
//! The lexer knows nothing about a particular language. It is configured
//! by an operator table (turned into a [`SymbolTable`] once) and an
//! [`IdValidator`] deciding which characters make up identifiers.
//!
//! # Token ambiguity
//!
//! One lexeme may be several things at once: `-` is both an infix and a
//! prefix operator, `not` is a prefix operator and a valid identifier,
//! `true` is a boolean literal. A scanned [`Token`] therefore carries a
//! [`TokenFamily`] listing every [`TokenType`] the lexeme can stand for;
//! the parser picks the one its grammar position allows.
//!
//! # Scanning order
//!
//! At each position (after whitespace):
//! 1. digits, or `.` followed by a digit: numeric literal
//! 2. identifier start: identifier, keyword operator, or boolean literal
//! 3. `"`: quoted string literal
//! 4. longest match in the operator symbol trie (includes punctuation)
//! 5. otherwise: unrecognized character

mod scanner;
mod symbol_table;
mod token;
mod validator;

pub use scanner::Scanner;
pub use symbol_table::SymbolTable;
pub use token::{Token, TokenClass, TokenFamily, TokenType};
pub use validator::{DashedIds, IdValidator, StandardIds};
