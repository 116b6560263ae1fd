use crate::core::types::Connector;

/// Glyphs drawn for each connector state.
pub struct TreeChars {
    pub branch: &'static str,
    pub continuation: &'static str,
    pub last: &'static str,
    pub empty: &'static str,
    pub directory: &'static str,
    pub file: &'static str,
}

impl TreeChars {
    pub const fn glyph(&self, connector: Connector) -> &'static str {
        match connector {
            Connector::Branch => self.branch,
            Connector::Continue => self.continuation,
            Connector::Last => self.last,
            Connector::Empty => self.empty,
        }
    }

    pub const fn marker(&self, is_directory: bool) -> &'static str {
        if is_directory { self.directory } else { self.file }
    }
}

impl Default for TreeChars {
    fn default() -> Self {
        Self {
            branch: "|--",
            continuation: "|  ",
            last: "'--",
            empty: "   ",
            directory: "+",
            file: "-",
        }
    }
}
