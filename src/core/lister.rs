use crate::core::types::Entry;
use crate::error::{Result, TreeError};
use log::{debug, trace};
use std::fs;
use std::path::Path;

/// Order in which [`FsLister`] returns the children of a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Sorted by name, byte-wise.
    #[default]
    Name,
    /// Whatever order the operating system returns.
    Native,
}

/// Source of directory children for the renderer.
///
/// Implementations list the immediate children of a single directory. The
/// renderer never sorts, so the returned order is the printed order.
pub trait DirectoryLister {
    /// List the direct children of `path`, skipping dotfiles unless
    /// `include_hidden` is set.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::List`] if the directory cannot be enumerated.
    fn list_children(&self, path: &Path, include_hidden: bool) -> Result<Vec<Entry>>;

    /// Return the name of this lister for logging purposes.
    fn name(&self) -> &'static str;
}

/// Lister backed by [`std::fs::read_dir`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister {
    order: SortOrder,
}

impl FsLister {
    pub const fn new(order: SortOrder) -> Self {
        Self { order }
    }
}

impl DirectoryLister for FsLister {
    fn list_children(&self, path: &Path, include_hidden: bool) -> Result<Vec<Entry>> {
        trace!("FsLister: reading {}", path.display());

        let list_error = |source| TreeError::List {
            path: path.to_path_buf(),
            source,
        };

        let mut children = Vec::new();
        for dir_entry in fs::read_dir(path).map_err(list_error)? {
            let dir_entry = dir_entry.map_err(list_error)?;
            let child_path = dir_entry.path();
            let name = basename(&child_path.to_string_lossy()).to_string();

            if !include_hidden && is_hidden(&name) {
                trace!("FsLister: skipping hidden {name}");
                continue;
            }

            // file_type() does not follow symlinks, so a linked directory is a leaf.
            let is_directory = dir_entry.file_type().map_err(list_error)?.is_dir();
            children.push(Entry::new(child_path, name, is_directory));
        }

        if self.order == SortOrder::Name {
            children.sort_by(|a, b| a.name.cmp(&b.name));
        }

        debug!(
            "FsLister: {} child(ren) in {}",
            children.len(),
            path.display()
        );
        Ok(children)
    }

    fn name(&self) -> &'static str {
        "FsLister"
    }
}

/// Whether `name` is a dotfile.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Final segment of a slash-separated path string.
///
/// One trailing slash is ignored, and the filesystem root `/` is its own name.
pub fn basename(path: &str) -> &str {
    if path == "/" {
        return path;
    }

    let trimmed = path.strip_suffix('/').unwrap_or(path);
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}
