//! Print directory hierarchies as indented trees.

pub mod cli;
pub mod core;
pub mod error;
pub mod output;
