//! JSON output formatting for rendered trees.

use crate::core::lister::DirectoryLister;
use crate::core::render::{self, RenderOptions, TreeVisitor};
use crate::core::types::{Connector, Entry};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// JSON representation of a visited entry and its visited children
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonNode {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<JsonNode>,
}

impl JsonNode {
    fn from_entry(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            path: entry.path.to_string_lossy().into_owned(),
            kind: if entry.is_directory {
                "directory".to_string()
            } else {
                "file".to_string()
            },
            children: Vec::new(),
        }
    }
}

/// Rebuilds the nesting of visited entries from their connector depth.
///
/// `stack[i]` is the open ancestor at depth `i`. Visits arrive pre-order, so
/// a line at depth `d` closes every open node deeper than `d - 1`.
#[derive(Debug, Default)]
pub struct JsonTreeBuilder {
    stack: Vec<JsonNode>,
    root: Option<JsonNode>,
}

impl JsonTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close every open node and return the root, or `None` if the root was
    /// excluded.
    pub fn finish(mut self) -> Option<JsonNode> {
        self.close_to(0);
        self.root
    }

    fn close_to(&mut self, depth: usize) {
        while self.stack.len() > depth {
            let Some(node) = self.stack.pop() else { break };
            match self.stack.last_mut() {
                Some(parent) => parent.children.push(node),
                None => self.root = Some(node),
            }
        }
    }
}

impl TreeVisitor for JsonTreeBuilder {
    fn visit(&mut self, entry: &Entry, connectors: &[Connector]) -> Result<()> {
        self.close_to(connectors.len());
        self.stack.push(JsonNode::from_entry(entry));
        Ok(())
    }
}

/// Build the JSON tree for `root` without printing it.
///
/// # Errors
///
/// Returns the first listing error encountered.
pub fn build_json<L>(
    root: &Entry,
    options: &RenderOptions,
    lister: &L,
) -> Result<Option<JsonNode>>
where
    L: DirectoryLister + ?Sized,
{
    let mut builder = JsonTreeBuilder::new();
    render::render(root, options, lister, &mut builder)?;
    Ok(builder.finish())
}

/// Print the tree for `root` as pretty JSON
///
/// # Errors
///
/// Returns the first listing error, or an error if JSON serialization fails.
pub fn print_json<L>(root: &Entry, options: &RenderOptions, lister: &L) -> Result<()>
where
    L: DirectoryLister + ?Sized,
{
    let tree = build_json(root, options, lister)?;
    let json = serde_json::to_string_pretty(&tree)?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Connector::{Branch, Continue, Last};
    use std::path::PathBuf;

    fn entry(name: &str, is_directory: bool) -> Entry {
        Entry::new(PathBuf::from(format!("/t/{name}")), name.to_string(), is_directory)
    }

    #[test]
    fn test_builder_nests_by_depth() {
        let mut builder = JsonTreeBuilder::new();
        builder.visit(&entry("t", true), &[]).unwrap();
        builder.visit(&entry("a", true), &[Branch]).unwrap();
        builder.visit(&entry("x", false), &[Continue, Last]).unwrap();
        builder.visit(&entry("b", false), &[Last]).unwrap();

        let root = builder.finish().unwrap();
        assert_eq!(root.name, "t");
        assert_eq!(root.kind, "directory");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].name, "a");
        assert_eq!(root.children[0].children.len(), 1);
        assert_eq!(root.children[0].children[0].name, "x");
        assert_eq!(root.children[0].children[0].kind, "file");
        assert_eq!(root.children[1].name, "b");
        assert!(root.children[1].children.is_empty());
    }

    #[test]
    fn test_builder_without_visits_is_none() {
        assert!(JsonTreeBuilder::new().finish().is_none());
    }

    #[test]
    fn test_serialization_omits_empty_children() {
        let mut builder = JsonTreeBuilder::new();
        builder.visit(&entry("t", true), &[]).unwrap();
        builder.visit(&entry("b", false), &[Last]).unwrap();

        let json = serde_json::to_value(builder.finish()).unwrap();
        assert_eq!(json["type"], "directory");
        assert_eq!(json["children"][0]["name"], "b");
        assert_eq!(json["children"][0]["path"], "/t/b");
        assert!(json["children"][0].get("children").is_none());
    }

    #[test]
    fn test_excluded_root_serializes_as_null() {
        let json = serde_json::to_string(&JsonTreeBuilder::new().finish()).unwrap();
        assert_eq!(json, "null");
    }
}
