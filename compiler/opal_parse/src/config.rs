/// Parser settings that do not depend on the operator table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Accept `prefix:a.b.c` identifiers; otherwise names are single
    /// segments and `.`/`:` after a name is left unparsed.
    pub qualified_ids: bool,
    /// Maximum expression nesting before parsing gives up.
    pub max_depth: usize,
    /// Free-form description of the language, for display.
    pub description: Option<String>,
}

impl ParserConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 512;

    #[must_use]
    pub fn with_qualified_ids(mut self, enabled: bool) -> Self {
        self.qualified_ids = enabled;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            qualified_ids: true,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            description: None,
        }
    }
}
