use crate::core::lister::SortOrder;
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "treeview")]
#[command(version, about, long_about = None, disable_version_flag = true)]
pub struct Args {
    /// Directory (or file) to display
    pub path: Option<PathBuf>,

    /// Descend at most this many levels (0 = unlimited)
    #[arg(short, long, value_name = "NUMBER", default_value_t = 0)]
    pub depth: usize,

    /// Show hidden files (dotfiles)
    #[arg(short, long)]
    pub all: bool,

    /// Keep the operating system's listing order instead of sorting by name
    #[arg(long)]
    pub unsorted: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Exclude list to use instead of the per-user default
    #[arg(long, value_name = "FILE")]
    pub exclude_file: Option<PathBuf>,

    /// Add a name to the persistent exclude list (repeatable)
    #[arg(long = "add-exclude", value_name = "NAME")]
    pub add_exclude: Vec<String>,

    /// Remove a name from the persistent exclude list (repeatable)
    #[arg(long = "remove-exclude", value_name = "NAME")]
    pub remove_exclude: Vec<String>,

    /// Print the persistent exclude list
    #[arg(long)]
    pub list_excludes: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Show the version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    pub version: Option<bool>,
}

impl Args {
    /// Parse command-line arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Get the output format based on flags.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Tree
        }
    }

    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        if self.unsorted {
            SortOrder::Native
        } else {
            SortOrder::Name
        }
    }

    /// Whether any exclude-list management flag was given.
    #[must_use]
    pub fn manages_excludes(&self) -> bool {
        self.list_excludes || !self.add_exclude.is_empty() || !self.remove_exclude.is_empty()
    }
}
