use crate::core::lister::DirectoryLister;
use crate::core::types::{Connector, Entry, child_connectors};
use crate::error::Result;
use log::{debug, trace};
use std::collections::HashSet;

/// Traversal policy shared by every output format.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Deepest line to print; `0` means unlimited.
    pub max_depth: usize,
    pub include_hidden: bool,
    /// Bare names whose entries (and subtrees) are never visited.
    pub excludes: HashSet<String>,
}

impl RenderOptions {
    fn is_excluded(&self, entry: &Entry) -> bool {
        self.excludes.contains(&entry.name)
    }

    fn is_cut_off(&self, depth: usize) -> bool {
        self.max_depth > 0 && depth == self.max_depth
    }
}

/// Receives one call per printed line, depth-first and pre-order.
///
/// `connectors` holds one state per ancestor level; its length is the line's
/// depth and its last element (if any) is always `Branch` or `Last`.
pub trait TreeVisitor {
    /// # Errors
    ///
    /// Returns an error if the visitor cannot emit the line; this aborts the
    /// traversal.
    fn visit(&mut self, entry: &Entry, connectors: &[Connector]) -> Result<()>;
}

/// Walk the tree under `root`, handing every visible entry to `visitor`.
///
/// # Errors
///
/// The first listing failure anywhere in the tree aborts the whole walk and
/// is returned unchanged. Lines already visited are not retracted.
pub fn render<L, V>(
    root: &Entry,
    options: &RenderOptions,
    lister: &L,
    visitor: &mut V,
) -> Result<()>
where
    L: DirectoryLister + ?Sized,
    V: TreeVisitor + ?Sized,
{
    debug!(
        "render called for: {} (max_depth={}, include_hidden={}, excludes={}, lister={})",
        root.path.display(),
        options.max_depth,
        options.include_hidden,
        options.excludes.len(),
        lister.name()
    );

    Walk {
        options,
        lister,
        visitor,
    }
    .entry(root, &[])
}

struct Walk<'a, L: ?Sized, V: ?Sized> {
    options: &'a RenderOptions,
    lister: &'a L,
    visitor: &'a mut V,
}

impl<L, V> Walk<'_, L, V>
where
    L: DirectoryLister + ?Sized,
    V: TreeVisitor + ?Sized,
{
    fn entry(&mut self, entry: &Entry, connectors: &[Connector]) -> Result<()> {
        if self.options.is_excluded(entry) {
            debug!("Excluded: {}", entry.path.display());
            return Ok(());
        }

        self.visitor.visit(entry, connectors)?;

        if self.options.is_cut_off(connectors.len()) {
            if entry.is_directory {
                trace!("Depth limit reached at: {}", entry.path.display());
            }
            return Ok(());
        }

        if !entry.is_directory {
            return Ok(());
        }

        let children = self
            .lister
            .list_children(&entry.path, self.options.include_hidden)?;
        let count = children.len();

        for (index, child) in children.iter().enumerate() {
            let child_states = child_connectors(connectors, index, count);
            self.entry(child, &child_states)?;
        }

        Ok(())
    }
}
