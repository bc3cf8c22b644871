//! Term trees produced by the opal parser.
//!
//! A tree goes through two phases:
//!
//! - [`TreeBuilder`]: mutable. Children, errors and the source span are
//!   accumulated while the parser works on the node.
//! - [`Tree`]: fixed. Produced by [`TreeBuilder::fix`], which validates the
//!   node's arity and unions the errors of every descendant into the node.
//!   A `Tree` has no mutating methods; [`Tree::thaw`] copies it back into a
//!   builder.
//!
//! Children of a fixed tree live in a shared slice, so cloning a tree (or
//! thawing one) never copies a subtree.

mod builder;
mod render;
mod tree;

pub use builder::TreeBuilder;
pub use tree::Tree;
