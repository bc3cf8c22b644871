//! Declarative operator-precedence expression parsing.
//!
//! Describe a language as a table of [`Op`]s, pick an [`AtomParser`] for its
//! identifiers and literals, and get a [`Parser`] that turns text into
//! fixed [`Tree`]s with structured errors attached:
//!
//! ```text
//! let parser = opal::expr::parser(ParserConfig::default())?;
//! let tree = parser.parse("a + pow(b, 2) * c");
//! assert!(!tree.has_errors());
//! assert_eq!(tree.to_flat_string(), "(a + (pow(b, 2) * c))");
//! ```
//!
//! Set `RUST_LOG=opal_parse=trace` and call [`init_tracing`] to watch the
//! scanner and the precedence loop at work.

use std::sync::Once;

pub use opal_diagnostic::{ErrorArg, ErrorCode, ErrorSet, FormatError, FormatException};
pub use opal_ir::{
    Arity, Constant, ConstantError, Direction, Op, OpKind, Placement, QualName, Sort, Span,
};
pub use opal_lexer::{DashedIds, IdValidator, StandardIds};
pub use opal_parse::expr;
pub use opal_parse::{AtomInput, AtomParser, Parser, ParserConfig};
pub use opal_tree::{Tree, TreeBuilder};

static TRACING_INIT: Once = Once::new();

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset or a global subscriber is already
/// installed. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            tracing::debug!("tracing initialized");
        }
    });
}
