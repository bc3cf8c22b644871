//! Error codes for all parser diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1001`) whose first digit names
//! the phase that detected the problem.

use std::fmt;

/// Error codes for parser diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Scan errors
/// - E1xxx: Parse errors
/// - E2xxx: Tree (arity) errors
/// - E3xxx: Operator table configuration errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scan Errors (E0xxx)
    /// Unterminated quoted literal
    E0001,
    /// Unrecognized character
    E0002,
    /// Literal value out of range or malformed
    E0003,

    // Parse Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected token missing
    E1002,
    /// Non-associative operator chained at the same level
    E1003,
    /// Call operator with the wrong number of arguments
    E1004,
    /// Unparsed input after a complete expression
    E1005,
    /// Expression nested too deeply
    E1006,

    // Tree Errors (E2xxx)
    /// Child count does not match operator arity
    E2001,

    // Configuration Errors (E3xxx)
    /// Symbol declared twice for the same placement
    E3001,
    /// Operator symbol malformed for its kind
    E3002,
    /// Operator arity inconsistent with its kind
    E3003,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
        }
    }

    /// Short description of the failure class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated quoted literal",
            ErrorCode::E0002 => "unrecognized character",
            ErrorCode::E0003 => "invalid literal",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected token missing",
            ErrorCode::E1003 => "non-associative operator",
            ErrorCode::E1004 => "call arity mismatch",
            ErrorCode::E1005 => "unparsed suffix",
            ErrorCode::E1006 => "expression nested too deeply",
            ErrorCode::E2001 => "arity mismatch",
            ErrorCode::E3001 => "duplicate operator",
            ErrorCode::E3002 => "malformed operator symbol",
            ErrorCode::E3003 => "inconsistent operator arity",
        }
    }

    pub fn is_scan_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parse_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_tree_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    pub fn is_config_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E0001" => Ok(ErrorCode::E0001),
            "E0002" => Ok(ErrorCode::E0002),
            "E0003" => Ok(ErrorCode::E0003),
            "E1001" => Ok(ErrorCode::E1001),
            "E1002" => Ok(ErrorCode::E1002),
            "E1003" => Ok(ErrorCode::E1003),
            "E1004" => Ok(ErrorCode::E1004),
            "E1005" => Ok(ErrorCode::E1005),
            "E1006" => Ok(ErrorCode::E1006),
            "E2001" => Ok(ErrorCode::E2001),
            "E3001" => Ok(ErrorCode::E3001),
            "E3002" => Ok(ErrorCode::E3002),
            "E3003" => Ok(ErrorCode::E3003),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests;
