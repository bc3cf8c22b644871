//! Stack safety for recursive descent.
//!
//! Two complementary mechanisms keep deeply nested input from crashing the
//! process:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand
//!   (`stacker` on native targets, passthrough on wasm32).
//! - [`DepthLimit`] counts nesting levels and refuses to go deeper than a
//!   configured bound, so untrusted input cannot drive unbounded recursion.
//!
//! ```text
//! fn parse_operand(&mut self) -> Result<Tree, FormatException> {
//!     let _level = self.depth.enter().ok_or_else(too_deep)?;
//!     ensure_sufficient_stack(|| self.parse_operand_inner())
//! }
//! ```

use std::cell::Cell;

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone, additional stack space is
/// allocated before calling `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Counter bounding the nesting depth of a recursive computation.
///
/// Each [`enter`](Self::enter) hands out a [`DepthToken`] that releases its
/// level when dropped, so early returns through `?` keep the count exact.
#[derive(Debug)]
pub struct DepthLimit {
    max: usize,
    current: Cell<usize>,
}

impl DepthLimit {
    /// Create a limit allowing at most `max` simultaneously entered levels.
    pub fn new(max: usize) -> Self {
        DepthLimit {
            max,
            current: Cell::new(0),
        }
    }

    /// The configured maximum depth.
    pub fn max(&self) -> usize {
        self.max
    }

    /// The number of levels currently entered.
    pub fn current(&self) -> usize {
        self.current.get()
    }

    /// Enter one more level, or `None` if that would exceed the limit.
    #[must_use = "the level is released when the token is dropped"]
    pub fn enter(&self) -> Option<DepthToken<'_>> {
        let depth = self.current.get();
        if depth >= self.max {
            return None;
        }
        self.current.set(depth + 1);
        Some(DepthToken { limit: self })
    }
}

/// One entered nesting level; dropping it leaves the level.
#[derive(Debug)]
pub struct DepthToken<'a> {
    limit: &'a DepthLimit,
}

impl Drop for DepthToken<'_> {
    fn drop(&mut self) {
        let depth = self.limit.current.get();
        self.limit.current.set(depth.saturating_sub(1));
    }
}
