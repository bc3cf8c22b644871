//! Token model: classes, typed classifications, and families.

use std::fmt;

use opal_ir::{Op, Placement, Sort, Span};
use smallvec::SmallVec;

/// Syntactic class of a token, without payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenClass {
    /// Operator usable at the start of an expression (prefix or call).
    PrefixOp,
    /// Operator between two operands.
    InfixOp,
    /// Operator after its operand.
    PostfixOp,
    Name,
    /// Literal of some sort.
    Const,
    LPar,
    RPar,
    Comma,
    /// Qualifier separator in `a.b.c`.
    Dot,
    /// Namespace separator in `prefix:name`.
    Colon,
    End,
}

impl TokenClass {
    /// Operator class for an operator of the given placement, if any.
    pub fn for_placement(placement: Placement) -> Option<TokenClass> {
        match placement {
            Placement::Prefix | Placement::Call => Some(TokenClass::PrefixOp),
            Placement::Infix => Some(TokenClass::InfixOp),
            Placement::Postfix => Some(TokenClass::PostfixOp),
            Placement::Atom => None,
        }
    }
}

/// One classification of a lexeme: a class plus its payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenType {
    PrefixOp(Op),
    InfixOp(Op),
    PostfixOp(Op),
    Name,
    Const(Sort),
    LPar,
    RPar,
    Comma,
    Dot,
    Colon,
    End,
}

impl TokenType {
    /// Classification of `op` as an operator token.
    pub fn for_op(op: Op) -> Option<TokenType> {
        match op.placement() {
            Placement::Prefix | Placement::Call => Some(TokenType::PrefixOp(op)),
            Placement::Infix => Some(TokenType::InfixOp(op)),
            Placement::Postfix => Some(TokenType::PostfixOp(op)),
            Placement::Atom => None,
        }
    }

    pub fn class(&self) -> TokenClass {
        match self {
            TokenType::PrefixOp(_) => TokenClass::PrefixOp,
            TokenType::InfixOp(_) => TokenClass::InfixOp,
            TokenType::PostfixOp(_) => TokenClass::PostfixOp,
            TokenType::Name => TokenClass::Name,
            TokenType::Const(_) => TokenClass::Const,
            TokenType::LPar => TokenClass::LPar,
            TokenType::RPar => TokenClass::RPar,
            TokenType::Comma => TokenClass::Comma,
            TokenType::Dot => TokenClass::Dot,
            TokenType::Colon => TokenClass::Colon,
            TokenType::End => TokenClass::End,
        }
    }

    /// The operator payload, for operator classes.
    pub fn op(&self) -> Option<Op> {
        match self {
            TokenType::PrefixOp(op) | TokenType::InfixOp(op) | TokenType::PostfixOp(op) => {
                Some(*op)
            }
            _ => None,
        }
    }
}

/// Every classification a single lexeme can have; at most one per class.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenFamily {
    types: SmallVec<[TokenType; 2]>,
}

impl TokenFamily {
    pub fn new() -> Self {
        Self::default()
    }

    /// Family with a single classification.
    pub fn single(ty: TokenType) -> Self {
        let mut family = Self::new();
        family.types.push(ty);
        family
    }

    /// Add a classification unless its class is already claimed.
    ///
    /// Returns `false` (and leaves the family unchanged) when the class is
    /// already present.
    pub fn insert(&mut self, ty: TokenType) -> bool {
        if self.has(ty.class()) {
            return false;
        }
        self.types.push(ty);
        true
    }

    pub fn get(&self, class: TokenClass) -> Option<&TokenType> {
        self.types.iter().find(|ty| ty.class() == class)
    }

    pub fn has(&self, class: TokenClass) -> bool {
        self.get(class).is_some()
    }

    /// The operator carried under `class`, if any.
    pub fn op(&self, class: TokenClass) -> Option<Op> {
        self.get(class).and_then(TokenType::op)
    }

    /// The literal sort, if this family includes a constant.
    pub fn sort(&self) -> Option<Sort> {
        self.types.iter().find_map(|ty| match ty {
            TokenType::Const(sort) => Some(*sort),
            _ => None,
        })
    }

    pub fn types(&self) -> &[TokenType] {
        &self.types
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// A scanned lexeme: its family plus its location.
///
/// Tokens borrow their family from the [`SymbolTable`](crate::SymbolTable)
/// and are `Copy`, so lookahead and rollback cost nothing.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Token<'t> {
    family: &'t TokenFamily,
    span: Span,
}

impl<'t> Token<'t> {
    pub fn new(family: &'t TokenFamily, span: Span) -> Self {
        Token { family, span }
    }

    pub fn family(&self) -> &'t TokenFamily {
        self.family
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn has(&self, class: TokenClass) -> bool {
        self.family.has(class)
    }

    pub fn op(&self, class: TokenClass) -> Option<Op> {
        self.family.op(class)
    }

    pub fn is_end(&self) -> bool {
        self.family.has(TokenClass::End)
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenClass::PrefixOp => "prefix operator",
            TokenClass::InfixOp => "infix operator",
            TokenClass::PostfixOp => "postfix operator",
            TokenClass::Name => "name",
            TokenClass::Const => "literal",
            TokenClass::LPar => "(",
            TokenClass::RPar => ")",
            TokenClass::Comma => ",",
            TokenClass::Dot => ".",
            TokenClass::Colon => ":",
            TokenClass::End => "end of input",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests;
