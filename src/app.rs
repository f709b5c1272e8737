//! One run of the program: select an entry and draw it.

use std::io::Write;

use rand::Rng;

use crate::assets::{AssetStore, Variant};
use crate::error::{Error, Result};
use crate::generation::{Bounds, GenerationIndex};
use crate::language::Language;
use crate::render::{self, RenderOptions, RenderOutcome};
use crate::roster::Roster;
use crate::selector;

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    /// Range expression, e.g. "1-8", "3" or "1,4"
    pub generation: String,
    /// Force the shiny variant
    pub shiny: bool,
    pub show_title: bool,
    pub language: Option<Language>,
    /// Draw this entry instead of a random one
    pub name: Option<String>,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            generation: "1-8".to_string(),
            shiny: false,
            show_title: true,
            language: Some(Language::English),
            name: None,
        }
    }
}

/// What was drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub number: usize,
    pub identifier: String,
    pub variant: Variant,
    pub outcome: RenderOutcome,
}

/// Select an entry for `request` and render it to `out`.
pub fn run<W: Write>(
    request: &Request,
    roster: &Roster,
    index: &GenerationIndex,
    store: &dyn AssetStore,
    rng: &mut impl Rng,
    out: &mut W,
) -> Result<Selection> {
    let (number, entry) = match &request.name {
        Some(name) => roster
            .find(name)
            .ok_or_else(|| Error::UnknownName(name.clone()))?,
        None => {
            let bounds = selector::resolve(&request.generation, index, rng)?;
            let number = selector::pick(bounds, rng)
                .ok_or_else(|| Error::EmptyRange(request.generation.clone()))?;
            log::debug!("picked #{} from {}", number, bounds);
            let entry = roster.get(number).ok_or(Error::MissingEntry(number))?;
            (number, entry)
        }
    };

    let variant = selector::decide_variant(request.shiny, rng);
    if variant.is_shiny() && !request.shiny {
        log::info!("rolled a shiny {}", entry.path);
    }

    let options = RenderOptions {
        show_title: request.show_title,
        language: request.language,
    };
    let outcome = render::render(out, store, entry, variant, &options)?;

    Ok(Selection {
        number,
        identifier: entry.path.clone(),
        variant,
        outcome,
    })
}

/// Print every entry as `<number> <identifier> <name>`.
pub fn list<W: Write>(roster: &Roster, language: Option<Language>, out: &mut W) -> Result<()> {
    for (number, entry) in roster.iter() {
        writeln!(out, "{:>4} {} {}", number, entry.path, entry.name(language))?;
    }
    Ok(())
}

/// Numbers the index can pick that the roster has no entry for, if any.
pub fn uncovered(roster: &Roster, index: &GenerationIndex) -> Option<Bounds> {
    let full = index.full_range()?;
    let missing = Bounds::new(full.start.max(roster.len() + 1), full.end);
    (!missing.is_empty()).then_some(missing)
}
