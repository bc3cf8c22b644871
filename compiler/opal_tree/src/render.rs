//! Text renderings of fixed trees.

use std::fmt::{self, Display, Write};

use opal_diagnostic::FormatError;
use opal_ir::Placement;
use opal_stack::ensure_sufficient_stack;

use crate::Tree;

/// Label for a node without an atom payload (an error placeholder).
const MISSING: &str = "?";

impl<A: Display> Tree<A> {
    /// Fully bracketed single-line form that parses back to an equal tree.
    ///
    /// Every prefix, infix and postfix application is wrapped in
    /// parentheses. Calls are written as `name(arg, ...)`.
    pub fn to_flat_string(&self) -> String {
        let mut out = String::new();
        self.write_flat(&mut out);
        out
    }

    fn write_flat(&self, out: &mut String) {
        ensure_sufficient_stack(|| {
            let symbol = self.op.symbol();
            match (self.op.placement(), self.children()) {
                (Placement::Atom, _) => match &self.atom {
                    Some(atom) => {
                        let _ = write!(out, "{atom}");
                    }
                    None => out.push_str(MISSING),
                },
                (Placement::Prefix, [operand]) => {
                    let operand = operand.to_flat_string();
                    out.push('(');
                    out.push_str(symbol);
                    if is_word(symbol) || needs_space(symbol, &operand) {
                        out.push(' ');
                    }
                    out.push_str(&operand);
                    out.push(')');
                }
                (Placement::Infix, [left, right]) => {
                    out.push('(');
                    left.write_flat(out);
                    let _ = write!(out, " {symbol} ");
                    right.write_flat(out);
                    out.push(')');
                }
                (Placement::Postfix, [operand]) => {
                    let operand = operand.to_flat_string();
                    out.push('(');
                    out.push_str(&operand);
                    if needs_space(&operand, symbol) {
                        out.push(' ');
                    }
                    out.push_str(symbol);
                    out.push(')');
                }
                // Calls, and nodes whose child count does not fit the operator.
                (_, children) => {
                    out.push_str(symbol);
                    out.push('(');
                    for (index, child) in children.iter().enumerate() {
                        if index > 0 {
                            out.push_str(", ");
                        }
                        child.write_flat(out);
                    }
                    out.push(')');
                }
            }
        });
    }

    /// Multi-line form: one node per line, children indented by two
    /// spaces, each error listed under the node where it arose.
    pub fn to_tree_string(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    fn write_tree(&self, out: &mut String, indent: usize) {
        ensure_sufficient_stack(|| {
            let pad = "  ".repeat(indent);
            match (&self.atom, self.op.is_atom()) {
                (Some(atom), _) => {
                    let _ = writeln!(out, "{pad}{atom}");
                }
                (None, true) => {
                    let _ = writeln!(out, "{pad}{MISSING}");
                }
                (None, false) => {
                    let _ = writeln!(out, "{pad}{}", self.op.symbol());
                }
            }
            for error in self.own_errors() {
                let _ = writeln!(out, "{pad}  ! {error}");
            }
            for child in self.children() {
                child.write_tree(out, indent + 1);
            }
        });
    }
}

impl<A> Tree<A> {
    /// Errors recorded on this node that no child carries.
    fn own_errors(&self) -> impl Iterator<Item = &FormatError> + '_ {
        self.errors
            .iter()
            .filter(|&error| !self.children().iter().any(|child| child.errors().contains(error)))
    }
}

impl<A: Display> Display for Tree<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_flat_string())
    }
}

fn is_word(symbol: &str) -> bool {
    symbol.ends_with(|c: char| c.is_alphanumeric() || c == '_')
}

/// Two fragments written back to back would scan as one token.
fn needs_space(before: &str, after: &str) -> bool {
    let (Some(last), Some(first)) = (before.chars().next_back(), after.chars().next()) else {
        return false;
    };
    let wordy = |c: char| c.is_alphanumeric() || c == '_';
    let bracket = |c: char| matches!(c, '(' | ')' | '"');
    if wordy(last) {
        return wordy(first);
    }
    !(wordy(first) || bracket(first) || bracket(last))
}

#[cfg(test)]
mod tests;
