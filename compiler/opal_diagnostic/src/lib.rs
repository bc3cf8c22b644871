//! Diagnostics for the opal parser.
//!
//! Failures are recorded, not thrown:
//! - [`FormatError`]: one error record (code, message, context objects)
//! - [`ErrorSet`]: insertion-ordered, deduplicated collection of records
//! - [`FormatException`]: the `std::error::Error` wrapper carrying an
//!   `ErrorSet`, used only where a `Result` crosses an API boundary
//!
//! Error codes group failures by phase (see [`ErrorCode`]), so callers can
//! tell a scan failure from a parse failure or an arity violation without
//! matching on message text.

mod error;
mod error_code;
mod error_set;

pub use error::{
    arity_mismatch, call_arity_mismatch, expected_token, invalid_literal, nested_too_deeply,
    non_associative, unexpected_token, unparsed_suffix, unrecognized_char, unterminated_string,
    ErrorArg, FormatError,
};
pub use error_code::ErrorCode;
pub use error_set::{ErrorSet, FormatException};
