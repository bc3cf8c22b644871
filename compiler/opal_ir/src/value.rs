//! Atom payloads: typed constants and qualified identifiers.

use std::fmt;
use std::hash::{Hash, Hasher};

/// The declared sort of a literal token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Sort {
    Bool,
    Int,
    Real,
    String,
}

impl Sort {
    pub fn name(self) -> &'static str {
        match self {
            Sort::Bool => "bool",
            Sort::Int => "int",
            Sort::Real => "real",
            Sort::String => "string",
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when a literal lexeme cannot be converted to a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstantError {
    /// Integer literal outside the `i64` range.
    IntOutOfRange(String),
    /// Lexeme does not denote a value of the sort.
    Malformed { sort: Sort, lexeme: String },
}

impl fmt::Display for ConstantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantError::IntOutOfRange(lexeme) => {
                write!(f, "integer literal `{lexeme}` is out of range")
            }
            ConstantError::Malformed { sort, lexeme } => {
                write!(f, "`{lexeme}` is not a valid {sort} literal")
            }
        }
    }
}

impl std::error::Error for ConstantError {}

/// A typed literal value.
///
/// Reals are compared and hashed by their bit pattern, so `Constant` can be
/// `Eq + Hash` and live inside tree equality and error contexts.
#[derive(Clone, Debug)]
pub enum Constant {
    Bool(bool),
    Int(i64),
    Real(f64),
    String(String),
}

impl Constant {
    pub fn sort(&self) -> Sort {
        match self {
            Constant::Bool(_) => Sort::Bool,
            Constant::Int(_) => Sort::Int,
            Constant::Real(_) => Sort::Real,
            Constant::String(_) => Sort::String,
        }
    }

    /// Convert a scanned lexeme of the given sort to its value.
    ///
    /// String lexemes include their surrounding quotes and may contain
    /// backslash escapes.
    pub fn parse(sort: Sort, lexeme: &str) -> Result<Constant, ConstantError> {
        let malformed = || ConstantError::Malformed {
            sort,
            lexeme: lexeme.to_owned(),
        };
        match sort {
            Sort::Bool => match lexeme {
                "true" => Ok(Constant::Bool(true)),
                "false" => Ok(Constant::Bool(false)),
                _ => Err(malformed()),
            },
            Sort::Int => {
                if lexeme.is_empty() || !lexeme.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(malformed());
                }
                lexeme
                    .parse::<i64>()
                    .map(Constant::Int)
                    .map_err(|_| ConstantError::IntOutOfRange(lexeme.to_owned()))
            }
            Sort::Real => lexeme
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(Constant::Real)
                .ok_or_else(malformed),
            Sort::String => unquote(lexeme).map(Constant::String).ok_or_else(malformed),
        }
    }
}

/// Strip surrounding double quotes and resolve backslash escapes.
fn unquote(lexeme: &str) -> Option<String> {
    let inner = lexeme.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            other => out.push(other),
        }
    }
    Some(out)
}

impl PartialEq for Constant {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Constant::Bool(a), Constant::Bool(b)) => a == b,
            (Constant::Int(a), Constant::Int(b)) => a == b,
            (Constant::Real(a), Constant::Real(b)) => a.to_bits() == b.to_bits(),
            (Constant::String(a), Constant::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Constant {}

impl Hash for Constant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Constant::Bool(b) => b.hash(state),
            Constant::Int(n) => n.hash(state),
            Constant::Real(r) => r.to_bits().hash(state),
            Constant::String(s) => s.hash(state),
        }
    }
}

/// Renders the constant as a lexeme that scans back to the same value.
impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Bool(b) => write!(f, "{b}"),
            Constant::Int(n) => write!(f, "{n}"),
            Constant::Real(r) if r.fract() == 0.0 => write!(f, "{r:.1}"),
            Constant::Real(r) => write!(f, "{r}"),
            Constant::String(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        '\r' => f.write_str("\\r")?,
                        _ => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")
            }
        }
    }
}

/// A possibly qualified identifier: `prefix:seg.seg.seg`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct QualName {
    prefix: Option<String>,
    segments: Vec<String>,
}

impl QualName {
    /// An unqualified single-segment name.
    pub fn simple(name: impl Into<String>) -> Self {
        QualName {
            prefix: None,
            segments: vec![name.into()],
        }
    }

    /// A dotted name; `segments` must be non-empty to be meaningful.
    pub fn new(segments: Vec<String>) -> Self {
        QualName {
            prefix: None,
            segments,
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final segment, i.e. the unqualified name.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Check for a single segment without prefix.
    pub fn is_simple(&self) -> bool {
        self.prefix.is_none() && self.segments.len() == 1
    }
}

impl fmt::Display for QualName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, "{prefix}:")?;
        }
        f.write_str(&self.segments.join("."))
    }
}

#[cfg(test)]
mod tests;
