//! Output formatting utilities for rendered trees.

pub mod formatter;
pub mod json;
pub mod styles;

/// Output format for tree display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented text lines (default)
    #[default]
    Tree,
    /// Machine-readable JSON format
    Json,
}
