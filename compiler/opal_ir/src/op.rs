//! Operator descriptors.
//!
//! [`OpKind`] is a total precedence scale, declared from loosest to tightest
//! binding and bounded by two sentinels that never appear in a tree. Each
//! kind owns one row of a static data table ([`KindInfo`]) fixing its
//! placement, associativity direction, and arity. [`Op`] pairs a symbol with
//! a kind; a parser is configured by a slice of `Op`s.

use std::fmt;

/// Where an operator stands relative to its operands.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Placement {
    /// Before its single operand: `-a`.
    Prefix,
    /// Between two operands: `a + b`.
    Infix,
    /// After its single operand: `a'`.
    Postfix,
    /// Prefix-placed with a parenthesised argument list: `max(a, b)`.
    Call,
    /// No operands; the node is a leaf.
    Atom,
}

impl Placement {
    /// Operators recognised at the start of an expression.
    pub fn is_prefix_placed(self) -> bool {
        matches!(self, Placement::Prefix | Placement::Call)
    }
}

/// How operators of equal precedence group.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a => b => c` is `a => (b => c)`.
    Right,
    /// `a == b == c` is an error.
    Neither,
}

/// Number of operands an operator takes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Arity {
    Fixed(usize),
    /// Any number of arguments (call operators only).
    Variable,
}

impl Arity {
    /// Check whether `count` operands are acceptable.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Fixed(n) => n == count,
            Arity::Variable => true,
        }
    }

    /// The fixed operand count, if any.
    pub fn fixed(self) -> Option<usize> {
        match self {
            Arity::Fixed(n) => Some(n),
            Arity::Variable => None,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "{n}"),
            Arity::Variable => write!(f, "variable"),
        }
    }
}

/// Per-kind data: one row of the precedence table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct KindInfo {
    pub placement: Placement,
    pub direction: Direction,
    pub arity: Arity,
}

impl KindInfo {
    const fn new(placement: Placement, direction: Direction, arity: Arity) -> Self {
        KindInfo {
            placement,
            direction,
            arity,
        }
    }

    const fn prefix() -> Self {
        Self::new(Placement::Prefix, Direction::Right, Arity::Fixed(1))
    }

    const fn infix(direction: Direction) -> Self {
        Self::new(Placement::Infix, direction, Arity::Fixed(2))
    }
}

/// Operator kinds, declared from loosest to tightest binding.
///
/// The derived `Ord` follows binding strength: `a < b` means `a` binds
/// looser than `b`. [`OpKind::None`] and [`OpKind::Highest`] are sentinels
/// bounding the scale.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum OpKind {
    /// Sentinel below every real kind; the context of a top-level parse.
    None,
    Implies,
    Or,
    And,
    Not,
    Equal,
    Compare,
    Add,
    Mult,
    Unary,
    Postfix,
    Call,
    Atom,
    /// Sentinel above every real kind.
    Highest,
}

/// Kind table, indexed by discriminant. Must stay in declaration order.
const KINDS: [(OpKind, KindInfo); 14] = [
    (
        OpKind::None,
        KindInfo::new(Placement::Atom, Direction::Neither, Arity::Fixed(0)),
    ),
    (OpKind::Implies, KindInfo::infix(Direction::Right)),
    (OpKind::Or, KindInfo::infix(Direction::Left)),
    (OpKind::And, KindInfo::infix(Direction::Left)),
    (OpKind::Not, KindInfo::prefix()),
    (OpKind::Equal, KindInfo::infix(Direction::Neither)),
    (OpKind::Compare, KindInfo::infix(Direction::Neither)),
    (OpKind::Add, KindInfo::infix(Direction::Left)),
    (OpKind::Mult, KindInfo::infix(Direction::Left)),
    (OpKind::Unary, KindInfo::prefix()),
    (
        OpKind::Postfix,
        KindInfo::new(Placement::Postfix, Direction::Left, Arity::Fixed(1)),
    ),
    (
        OpKind::Call,
        KindInfo::new(Placement::Call, Direction::Neither, Arity::Variable),
    ),
    (
        OpKind::Atom,
        KindInfo::new(Placement::Atom, Direction::Neither, Arity::Fixed(0)),
    ),
    (
        OpKind::Highest,
        KindInfo::new(Placement::Atom, Direction::Neither, Arity::Fixed(0)),
    ),
];

impl OpKind {
    /// Every kind, loosest first, sentinels included.
    pub fn all() -> impl Iterator<Item = OpKind> {
        KINDS.iter().map(|(kind, _)| *kind)
    }

    /// This kind's row of the precedence table.
    #[inline]
    pub fn info(self) -> KindInfo {
        KINDS[self as usize].1
    }

    #[inline]
    pub fn placement(self) -> Placement {
        self.info().placement
    }

    #[inline]
    pub fn direction(self) -> Direction {
        self.info().direction
    }

    #[inline]
    pub fn arity(self) -> Arity {
        self.info().arity
    }

    /// Check whether this is one of the two scale-bounding sentinels.
    pub fn is_sentinel(self) -> bool {
        matches!(self, OpKind::None | OpKind::Highest)
    }

    /// The next strictly tighter kind; [`OpKind::Highest`] saturates.
    #[must_use]
    pub fn increase(self) -> OpKind {
        KINDS
            .get(self as usize + 1)
            .map_or(OpKind::Highest, |(kind, _)| *kind)
    }

    /// The next strictly looser kind; [`OpKind::None`] saturates.
    #[must_use]
    pub fn decrease(self) -> OpKind {
        match (self as usize).checked_sub(1) {
            Some(index) => KINDS[index].0,
            None => OpKind::None,
        }
    }
}

/// An operator declaration: symbol, precedence kind, and arity.
///
/// The symbol is empty only for the atom operator. Arity defaults to the
/// kind's arity; call operators may narrow it to a fixed count.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Op {
    symbol: &'static str,
    kind: OpKind,
    arity: Arity,
}

impl Op {
    /// Operator of the given kind, with the kind's own arity.
    pub const fn new(symbol: &'static str, kind: OpKind) -> Self {
        Op {
            symbol,
            kind,
            arity: KINDS[kind as usize].1.arity,
        }
    }

    /// The leaf operator carried by identifiers and literals.
    pub const fn atom() -> Self {
        Self::new("", OpKind::Atom)
    }

    /// Call operator with an explicit arity.
    pub const fn call(symbol: &'static str, arity: Arity) -> Self {
        Op {
            symbol,
            kind: OpKind::Call,
            arity,
        }
    }

    /// Same operator with a different arity. Only call operators accept
    /// an arity other than their kind's; symbol tables reject the rest.
    #[must_use]
    pub const fn with_arity(self, arity: Arity) -> Self {
        Op { arity, ..self }
    }

    #[inline]
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    #[inline]
    pub fn kind(&self) -> OpKind {
        self.kind
    }

    #[inline]
    pub fn arity(&self) -> Arity {
        self.arity
    }

    #[inline]
    pub fn placement(&self) -> Placement {
        self.kind.placement()
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.kind.direction()
    }

    pub fn is_atom(&self) -> bool {
        self.kind == OpKind::Atom
    }

    pub fn is_call(&self) -> bool {
        self.kind == OpKind::Call
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_atom() {
            write!(f, "atom")
        } else {
            write!(f, "{}", self.symbol)
        }
    }
}

#[cfg(test)]
mod tests;
