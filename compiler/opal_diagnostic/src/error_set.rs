//! Ordered, deduplicated error collections.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{ErrorCode, FormatError};

/// Insertion-ordered set of error records.
///
/// Adding a record equal to one already present is a no-op, so errors
/// aggregated from several subtrees are reported once.
#[derive(Clone, Debug, Default)]
pub struct ErrorSet {
    errors: Vec<FormatError>,
    seen: FxHashSet<FormatError>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record. Returns `false` if an equal record was already present.
    pub fn add(&mut self, error: FormatError) -> bool {
        if self.seen.contains(&error) {
            return false;
        }
        self.seen.insert(error.clone());
        self.errors.push(error);
        true
    }

    /// Add every record of `other`, keeping first-seen order.
    pub fn add_all(&mut self, other: &ErrorSet) {
        for error in &other.errors {
            self.add(error.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, error: &FormatError) -> bool {
        self.seen.contains(error)
    }

    /// Check whether any record carries `code`.
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code() == code)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FormatError> {
        self.errors.iter()
    }

    pub fn first(&self) -> Option<&FormatError> {
        self.errors.first()
    }

    /// Codes of all records, in insertion order.
    pub fn codes(&self) -> Vec<ErrorCode> {
        self.errors.iter().map(FormatError::code).collect()
    }

    /// `Ok(())` when empty, otherwise an exception carrying every record.
    pub fn into_result(self) -> Result<(), FormatException> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(FormatException::from(self))
        }
    }
}

impl PartialEq for ErrorSet {
    fn eq(&self, other: &Self) -> bool {
        self.errors == other.errors
    }
}

impl Eq for ErrorSet {}

impl Hash for ErrorSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.errors.hash(state);
    }
}

impl From<FormatError> for ErrorSet {
    fn from(error: FormatError) -> Self {
        let mut set = ErrorSet::new();
        set.add(error);
        set
    }
}

impl FromIterator<FormatError> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = FormatError>>(iter: I) -> Self {
        let mut set = ErrorSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<FormatError> for ErrorSet {
    fn extend<I: IntoIterator<Item = FormatError>>(&mut self, iter: I) {
        for error in iter {
            self.add(error);
        }
    }
}

impl IntoIterator for ErrorSet {
    type Item = FormatError;
    type IntoIter = std::vec::IntoIter<FormatError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = &'a FormatError;
    type IntoIter = std::slice::Iter<'a, FormatError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// One record per line.
impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Throwable form of an [`ErrorSet`].
///
/// Scanner and parser internals return `Result<_, FormatException>` and
/// propagate with `?`; the public parse entry point converts the exception
/// back into an error-bearing tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{errors}")]
pub struct FormatException {
    errors: ErrorSet,
}

impl FormatException {
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn into_errors(self) -> ErrorSet {
        self.errors
    }
}

impl From<ErrorSet> for FormatException {
    fn from(errors: ErrorSet) -> Self {
        FormatException { errors }
    }
}

impl From<FormatError> for FormatException {
    fn from(error: FormatError) -> Self {
        FormatException {
            errors: ErrorSet::from(error),
        }
    }
}
