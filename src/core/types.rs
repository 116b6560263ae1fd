use crate::core::lister::basename;
use crate::error::{Result, TreeError};
use std::fs;
use std::path::{Path, PathBuf};

/// A single filesystem node visited by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub is_directory: bool,
}

impl Entry {
    pub fn new(path: PathBuf, name: String, is_directory: bool) -> Self {
        Self {
            path,
            name,
            is_directory,
        }
    }

    /// Build the entry for the traversal root.
    ///
    /// Unlike children, the root follows symlinks when deciding whether it is
    /// a directory, so `treeview some-link/` renders the linked directory.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFound`] if nothing exists at `path`, or
    /// [`TreeError::Io`] if its metadata cannot be read.
    pub fn root(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TreeError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                TreeError::Io {
                    context: format!("Failed to read metadata for {}", path.display()),
                    source: e,
                }
            }
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            name: basename(&path.to_string_lossy()).to_string(),
            is_directory: metadata.is_dir(),
        })
    }
}

/// Connector state for one ancestor level of a rendered line.
///
/// `Branch` and `Last` are a line's own connector. Once the renderer descends
/// into that line's subtree they become `Continue` and `Empty` respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    Branch,
    Continue,
    Last,
    Empty,
}

impl Connector {
    /// Connector for the sibling at `index` among `count` siblings.
    pub const fn for_sibling(index: usize, count: usize) -> Self {
        if index + 1 == count {
            Self::Last
        } else {
            Self::Branch
        }
    }

    /// The form this connector takes on descendant lines.
    #[must_use]
    pub const fn pass_through(self) -> Self {
        match self {
            Self::Branch => Self::Continue,
            Self::Last => Self::Empty,
            other => other,
        }
    }
}

/// Derive the connector sequence for child `index` of `count` from its
/// parent's sequence. The parent's sequence is left untouched.
pub fn child_connectors(parent: &[Connector], index: usize, count: usize) -> Vec<Connector> {
    let mut connectors = Vec::with_capacity(parent.len() + 1);
    connectors.extend_from_slice(parent);
    if let Some(last) = connectors.last_mut() {
        *last = last.pass_through();
    }
    connectors.push(Connector::for_sibling(index, count));
    connectors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_through() {
        assert_eq!(Connector::Branch.pass_through(), Connector::Continue);
        assert_eq!(Connector::Last.pass_through(), Connector::Empty);
        assert_eq!(Connector::Continue.pass_through(), Connector::Continue);
        assert_eq!(Connector::Empty.pass_through(), Connector::Empty);
    }

    #[test]
    fn test_for_sibling() {
        assert_eq!(Connector::for_sibling(0, 3), Connector::Branch);
        assert_eq!(Connector::for_sibling(1, 3), Connector::Branch);
        assert_eq!(Connector::for_sibling(2, 3), Connector::Last);
        assert_eq!(Connector::for_sibling(0, 1), Connector::Last);
    }

    #[test]
    fn test_child_connectors_of_root() {
        assert_eq!(child_connectors(&[], 0, 2), vec![Connector::Branch]);
        assert_eq!(child_connectors(&[], 1, 2), vec![Connector::Last]);
    }

    #[test]
    fn test_child_connectors_converts_only_last_element() {
        let parent = [Connector::Continue, Connector::Empty, Connector::Branch];
        let child = child_connectors(&parent, 0, 1);

        assert_eq!(
            child,
            vec![
                Connector::Continue,
                Connector::Empty,
                Connector::Continue,
                Connector::Last,
            ]
        );
        // Parent sequence is not shared with the child.
        assert_eq!(parent[2], Connector::Branch);
    }

    #[test]
    fn test_child_connectors_after_last_sibling() {
        let child = child_connectors(&[Connector::Last], 0, 2);
        assert_eq!(child, vec![Connector::Empty, Connector::Branch]);
    }

    #[test]
    fn test_root_entry_for_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "").unwrap();

        let entry = Entry::root(&file).unwrap();
        assert_eq!(entry.name, "notes.txt");
        assert!(!entry.is_directory);
    }

    #[test]
    fn test_root_entry_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");

        let err = Entry::root(&missing).unwrap_err();
        assert!(matches!(err, TreeError::NotFound { .. }));
    }
}
