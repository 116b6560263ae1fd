pub mod args;

use crate::core::excludes::ExcludeList;
use crate::core::lister::FsLister;
use crate::core::render::RenderOptions;
use crate::core::types::Entry;
use crate::error::{Result, TreeError};
use crate::output::{OutputFormat, formatter, json};
use clap::CommandFactory;
use log::{debug, info};
use std::path::{Path, PathBuf};

pub struct Cli {
    args: args::Args,
}

impl Cli {
    pub fn new() -> Self {
        Cli {
            args: args::Args::parse(),
        }
    }

    pub fn with_args(args: args::Args) -> Self {
        Cli { args }
    }

    pub fn args(&self) -> &args::Args {
        &self.args
    }

    pub fn run(&self) -> Result<()> {
        if self.args.manages_excludes() {
            return self.manage_excludes(&self.exclude_path()?);
        }

        let Some(path) = &self.args.path else {
            debug!("No path given, printing help");
            return args::Args::command()
                .print_help()
                .map_err(|e| TreeError::Io {
                    context: "Failed to print help".to_string(),
                    source: e,
                });
        };

        let excludes = ExcludeList::load(&self.exclude_path()?)?;
        let root = Entry::root(path)?;
        debug!(
            "Rendering {} ({})",
            root.path.display(),
            if root.is_directory { "directory" } else { "file" }
        );

        let options = RenderOptions {
            max_depth: self.args.depth,
            include_hidden: self.args.all,
            excludes: excludes.to_set(),
        };
        let lister = FsLister::new(self.args.sort_order());

        match self.args.output_format() {
            OutputFormat::Tree => formatter::print_tree(&root, &options, &lister),
            OutputFormat::Json => json::print_json(&root, &options, &lister),
        }
    }

    fn exclude_path(&self) -> Result<PathBuf> {
        match &self.args.exclude_file {
            Some(path) => Ok(path.clone()),
            None => ExcludeList::default_path(),
        }
    }

    fn manage_excludes(&self, path: &Path) -> Result<()> {
        let mut excludes = ExcludeList::load(path)?;
        let mut changed = false;

        for name in &self.args.add_exclude {
            if excludes.add(name)? {
                info!("Added '{name}' to exclude list");
                changed = true;
            } else {
                debug!("'{name}' already excluded");
            }
        }

        for name in &self.args.remove_exclude {
            if excludes.remove(name) {
                info!("Removed '{name}' from exclude list");
                changed = true;
            } else {
                debug!("'{name}' was not excluded");
            }
        }

        if changed {
            excludes.save()?;
        }

        if self.args.list_excludes {
            formatter::print_excludes(excludes.names());
        }

        Ok(())
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}
