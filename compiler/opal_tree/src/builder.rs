use std::sync::Arc;

use opal_diagnostic::{arity_mismatch, ErrorCode, ErrorSet, FormatError};
use opal_ir::{Op, Span};

use crate::Tree;

/// A tree node under construction.
#[derive(Clone, Debug)]
pub struct TreeBuilder<A> {
    pub(crate) op: Op,
    pub(crate) atom: Option<A>,
    pub(crate) children: Vec<Tree<A>>,
    pub(crate) errors: ErrorSet,
    pub(crate) span: Span,
    pub(crate) source: Option<Arc<str>>,
}

impl<A> TreeBuilder<A> {
    /// Empty node for `op`.
    pub fn new(op: Op) -> Self {
        TreeBuilder {
            op,
            atom: None,
            children: Vec::new(),
            errors: ErrorSet::new(),
            span: Span::DUMMY,
            source: None,
        }
    }

    /// Leaf node carrying an atom payload.
    pub fn atom(atom: A) -> Self {
        TreeBuilder {
            atom: Some(atom),
            ..Self::new(Op::atom())
        }
    }

    /// Leaf node with no payload carrying `errors`, standing in for input
    /// that could not be parsed.
    pub fn error(errors: ErrorSet) -> Self {
        TreeBuilder {
            errors,
            ..Self::new(Op::atom())
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: Arc<str>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn set_span(&mut self, span: Span) {
        self.span = span;
    }

    pub fn set_source(&mut self, source: Arc<str>) {
        self.source = Some(source);
    }

    /// Append a fixed child.
    pub fn push(&mut self, child: Tree<A>) {
        self.children.push(child);
    }

    pub fn add_error(&mut self, error: FormatError) {
        self.errors.add(error);
    }

    pub fn add_errors(&mut self, errors: &ErrorSet) {
        self.errors.add_all(errors);
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn children(&self) -> &[Tree<A>] {
        &self.children
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Freeze the node.
    ///
    /// Records an arity error when the child count does not fit the
    /// operator (unless a call arity error was already reported while
    /// parsing), then adds every child's errors to this node.
    pub fn fix(mut self) -> Tree<A> {
        let arity = self.op.arity();
        let count = self.children.len();
        if !arity.accepts(count) && !self.errors.has_code(ErrorCode::E1004) {
            self.errors
                .add(arity_mismatch(self.op.symbol(), arity, count, self.span));
        }
        for child in &self.children {
            self.errors.add_all(child.errors());
        }
        Tree {
            op: self.op,
            atom: self.atom,
            children: Arc::from(self.children),
            errors: self.errors,
            span: self.span,
            source: self.source,
        }
    }
}
