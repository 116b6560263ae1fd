//! Persistent, per-user list of names that are never rendered.

use crate::error::{Result, TreeError};
use log::{debug, trace};
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "treeview";
const FILE_NAME: &str = "excludes";

/// Exclude list backed by a newline-delimited file.
#[derive(Debug, Clone)]
pub struct ExcludeList {
    path: PathBuf,
    names: BTreeSet<String>,
}

impl ExcludeList {
    /// Location of the per-user exclude list, `<config dir>/treeview/excludes`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NoConfigDir`] if the platform has no user
    /// configuration directory.
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
            .ok_or(TreeError::NoConfigDir)
    }

    /// Load the list stored at `path`. A missing file yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ExcludeLoad`] if the file exists but cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading exclude list from {}", path.display());

        let names = match fs::read_to_string(path) {
            Ok(content) => parse(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No exclude list at {}, starting empty", path.display());
                BTreeSet::new()
            }
            Err(e) => {
                return Err(TreeError::ExcludeLoad {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        trace!("Loaded {} excluded name(s)", names.len());
        Ok(Self {
            path: path.to_path_buf(),
            names,
        })
    }

    /// Write the list back to its file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ExcludeSave`] if the directory or file cannot be
    /// written.
    pub fn save(&self) -> Result<()> {
        debug!(
            "Saving {} excluded name(s) to {}",
            self.names.len(),
            self.path.display()
        );

        let save_error = |source| TreeError::ExcludeSave {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(save_error)?;
        }

        let mut content = String::new();
        for name in &self.names {
            content.push_str(name);
            content.push('\n');
        }
        fs::write(&self.path, content).map_err(save_error)
    }

    /// Add `name`, returning whether it was newly inserted.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidInput`] if `name` is empty or contains a
    /// path separator; entries are matched by bare name only.
    pub fn add(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TreeError::InvalidInput {
                message: "Exclude name must not be empty".to_string(),
            });
        }
        if name.contains('/') {
            return Err(TreeError::InvalidInput {
                message: format!("Exclude name '{name}' must be a bare name, not a path"),
            });
        }
        Ok(self.names.insert(name.to_string()))
    }

    /// Remove `name`, returning whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name.trim())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Lookup set for the renderer.
    pub fn to_set(&self) -> HashSet<String> {
        self.names.iter().cloned().collect()
    }
}

fn parse(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
