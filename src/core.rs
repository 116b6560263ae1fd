//! Directory listing, tree traversal and exclude-list persistence.

pub mod excludes;
pub mod lister;
pub mod render;
pub mod types;
