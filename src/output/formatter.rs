use crate::core::lister::DirectoryLister;
use crate::core::render::{self, RenderOptions, TreeVisitor};
use crate::core::types::{Connector, Entry};
use crate::error::{Result, TreeError};
use crate::output::styles::TreeChars;
use std::io::{self, Write};

/// Writes one text line per visited entry.
pub struct TextFormatter<W: Write> {
    out: W,
    chars: TreeChars,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            chars: TreeChars::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TreeVisitor for TextFormatter<W> {
    fn visit(&mut self, entry: &Entry, connectors: &[Connector]) -> Result<()> {
        let line = format_line(&self.chars, entry, connectors);
        writeln!(self.out, "{line}").map_err(|e| TreeError::Io {
            context: "Failed to write tree line".to_string(),
            source: e,
        })
    }
}

/// Build the text for a single entry: connector glyphs, then the
/// directory/file marker and the name.
pub fn format_line(chars: &TreeChars, entry: &Entry, connectors: &[Connector]) -> String {
    let mut line: String = connectors.iter().map(|c| chars.glyph(*c)).collect();
    if !line.is_empty() {
        line.push(' ');
    }
    line.push_str(chars.marker(entry.is_directory));
    line.push(' ');
    line.push_str(&entry.name);
    line
}

/// Render the tree under `root` to standard output.
///
/// # Errors
///
/// Returns the first listing error, or an IO error if stdout cannot be
/// written.
pub fn print_tree<L>(root: &Entry, options: &RenderOptions, lister: &L) -> Result<()>
where
    L: DirectoryLister + ?Sized,
{
    let mut formatter = TextFormatter::new(io::stdout().lock());
    let result = render::render(root, options, lister, &mut formatter);
    formatter.into_inner().flush().map_err(|e| TreeError::Io {
        context: "Failed to flush stdout".to_string(),
        source: e,
    })?;
    result
}

pub fn print_excludes<'a>(names: impl Iterator<Item = &'a str>) {
    for name in names {
        println!("{name}");
    }
}
