use std::sync::Arc;

use opal_diagnostic::ErrorSet;
use opal_ir::{Op, Span};
use opal_stack::ensure_sufficient_stack;

use crate::TreeBuilder;

/// A fixed (immutable) tree node.
///
/// Equality compares operators, atom payloads and children; spans, source
/// text and errors are not part of a tree's value.
#[derive(Clone, Debug)]
pub struct Tree<A> {
    pub(crate) op: Op,
    pub(crate) atom: Option<A>,
    pub(crate) children: Arc<[Tree<A>]>,
    pub(crate) errors: ErrorSet,
    pub(crate) span: Span,
    pub(crate) source: Option<Arc<str>>,
}

impl<A> Tree<A> {
    pub fn op(&self) -> Op {
        self.op
    }

    /// Atom payload; `None` for operator nodes and error placeholders.
    pub fn atom(&self) -> Option<&A> {
        self.atom.as_ref()
    }

    pub fn children(&self) -> &[Tree<A>] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Tree<A>> {
        self.children.get(index)
    }

    /// Check whether this node or any descendant carries an error.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors of this node and all its descendants.
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// Source range this node was parsed from.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn source(&self) -> Option<&Arc<str>> {
        self.source.as_ref()
    }

    /// The text this node was parsed from, if the tree was parsed.
    pub fn parse_string(&self) -> Option<&str> {
        self.source
            .as_deref()
            .and_then(|source| self.span.slice(source))
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        ensure_sufficient_stack(|| {
            1 + self.children.iter().map(Tree::depth).max().unwrap_or(0)
        })
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        ensure_sufficient_stack(|| 1 + self.children.iter().map(Tree::size).sum::<usize>())
    }
}

impl<A: Clone> Tree<A> {
    /// Copy this node into a new builder with the same content.
    ///
    /// Children stay fixed and shared; only the top node becomes mutable.
    pub fn thaw(&self) -> TreeBuilder<A> {
        TreeBuilder {
            op: self.op,
            atom: self.atom.clone(),
            children: self.children.to_vec(),
            errors: self.errors.clone(),
            span: self.span,
            source: self.source.clone(),
        }
    }
}

impl<A: PartialEq> PartialEq for Tree<A> {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.atom == other.atom && self.children == other.children
    }
}

impl<A: Eq> Eq for Tree<A> {}
