//! Writes a selected entry to the terminal.

use std::io::{self, Write};

use crate::assets::{AssetStore, Variant};
use crate::language::Language;
use crate::roster::Entry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_title: bool,
    /// `None` when the requested language isn't supported; the name is then
    /// empty
    pub language: Option<Language>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_title: true,
            language: Some(Language::English),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Art was written
    Drawn,
    /// Art couldn't be found; the error was reported on the output
    ArtMissing,
}

/// Write the title line (if enabled) and the entry's art, byte for byte.
///
/// A missing art file is reported on `out` and is not an error: only write
/// failures on `out` itself are returned.
pub fn render<W: Write>(
    out: &mut W,
    store: &dyn AssetStore,
    entry: &Entry,
    variant: Variant,
    options: &RenderOptions,
) -> io::Result<RenderOutcome> {
    if options.show_title {
        let name = entry.name(options.language);
        if variant.is_shiny() {
            writeln!(out, "{} (shiny)", name)?;
        } else {
            writeln!(out, "{}", name)?;
        }
    }

    match store.read_art(&entry.path, variant) {
        Ok(art) => {
            out.write_all(&art)?;
            Ok(RenderOutcome::Drawn)
        }
        Err(err) => {
            log::error!("art lookup failed for '{}' ({}): {}", entry.path, variant, err);
            writeln!(out, "Error reading file: {}", err)?;
            Ok(RenderOutcome::ArtMissing)
        }
    }
}
