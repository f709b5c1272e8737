//! Random selection of a roster number and variant.
//!
//! A range expression is one of:
//! - a single label: `"3"`
//! - a dash-separated pair: `"1-4"`, spanning the start of the first to the
//!   end of the second
//! - a comma-separated list: `"1,3,5"`, which collapses to ONE randomly
//!   chosen member before lookup; it never spans across members

use rand::Rng;

use crate::assets::Variant;
use crate::error::{Error, Result};
use crate::generation::{Bounds, GenerationIndex};

/// Chance of a shiny when one isn't forced.
pub const SHINY_RATE: f64 = 1.0 / 128.0;

/// Resolve a range expression into roster bounds.
///
/// The interval runs from the start label's first number to the end label's
/// last number. A backwards pair such as `"3-1"` is not rejected here and
/// yields an empty interval; see [`pick`].
pub fn resolve(expr: &str, index: &GenerationIndex, rng: &mut impl Rng) -> Result<Bounds> {
    let (start_label, end_label) = if expr.contains(',') {
        let labels: Vec<&str> = expr.split(',').collect();
        let label = labels[rng.gen_range(0..labels.len())];
        log::debug!("generation list '{}' collapsed to '{}'", expr, label);
        (label, label)
    } else if expr.contains('-') {
        // Anything after the second label is ignored
        let mut parts = expr.split('-');
        let start = parts.next().unwrap_or_default();
        let end = parts.next().unwrap_or_default();
        (start, end)
    } else {
        (expr, expr)
    };

    let start = index
        .bounds(start_label)
        .ok_or_else(|| Error::InvalidGeneration(expr.to_string()))?;
    let end = index
        .bounds(end_label)
        .ok_or_else(|| Error::InvalidGeneration(expr.to_string()))?;

    Ok(Bounds::new(start.start, end.end))
}

/// Uniform roster number within `bounds`, or `None` when the bounds are
/// backwards.
pub fn pick(bounds: Bounds, rng: &mut impl Rng) -> Option<usize> {
    if bounds.is_empty() {
        return None;
    }
    Some(rng.gen_range(bounds.start..=bounds.end))
}

/// Roll for a shiny. Forcing skips the draw entirely.
pub fn decide_variant(forced: bool, rng: &mut impl Rng) -> Variant {
    if forced {
        return Variant::Shiny;
    }
    let roll: f64 = rng.gen();
    if roll <= SHINY_RATE {
        Variant::Shiny
    } else {
        Variant::Regular
    }
}
