//! Identifier character classes.

use std::fmt;

/// Decides which characters and strings form identifiers.
///
/// An identifier starts with an `is_id_start` character, continues with
/// `is_id_part` characters, and must end with an `is_id_end` character.
/// Characters that are valid inside an identifier but not at its end (such
/// as `-` in [`DashedIds`]) are trimmed off a scanned run and rescanned as
/// separate tokens.
pub trait IdValidator: fmt::Debug + Send + Sync {
    fn is_id_start(&self, c: char) -> bool;

    fn is_id_part(&self, c: char) -> bool;

    fn is_id_end(&self, c: char) -> bool {
        self.is_id_part(c)
    }

    /// Check a complete candidate identifier.
    fn is_valid(&self, text: &str) -> bool {
        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        self.is_id_start(first)
            && chars.all(|c| self.is_id_part(c))
            && text.chars().next_back().is_some_and(|c| self.is_id_end(c))
    }
}

/// Letter or underscore start; letters, digits, `_` and `$` after that.
#[derive(Copy, Clone, Debug, Default)]
pub struct StandardIds;

impl IdValidator for StandardIds {
    fn is_id_start(&self, c: char) -> bool {
        c.is_alphabetic() || c == '_'
    }

    fn is_id_part(&self, c: char) -> bool {
        c.is_alphanumeric() || c == '_' || c == '$'
    }
}

/// Like [`StandardIds`], but `-` may appear inside an identifier
/// (`left-child`), never at its end.
#[derive(Copy, Clone, Debug, Default)]
pub struct DashedIds;

impl IdValidator for DashedIds {
    fn is_id_start(&self, c: char) -> bool {
        StandardIds.is_id_start(c)
    }

    fn is_id_part(&self, c: char) -> bool {
        StandardIds.is_id_part(c) || c == '-'
    }

    fn is_id_end(&self, c: char) -> bool {
        StandardIds.is_id_part(c)
    }
}

#[cfg(test)]
mod tests;
