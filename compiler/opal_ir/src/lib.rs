//! Opal IR - value types shared by every layer of the parser.
//!
//! - [`Span`]: byte ranges into the parsed text
//! - [`Op`], [`OpKind`]: the declarative operator table
//! - [`Sort`], [`Constant`], [`QualName`]: payloads carried by atoms
//!
//! Every type here is a plain value: `Clone`, `Eq`, `Hash`, `Debug`.
//! Types that contain floats store them as bits for `Hash` compatibility.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod op;
mod span;
mod value;

pub use op::{Arity, Direction, KindInfo, Op, OpKind, Placement};
pub use span::{Span, SpanError};
pub use value::{Constant, ConstantError, QualName, Sort};
