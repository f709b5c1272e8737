//! Generation labels and the table mapping them to roster numbers.
//!
//! Each generation covers a contiguous, inclusive run of roster numbers.
//! The standard table covers the full roster with no gaps or overlaps.

use std::collections::BTreeMap;

/// Inclusive range of 1-based roster numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub start: usize,
    pub end: usize,
}

impl Bounds {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A backwards range (end before start) holds no numbers.
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, number: usize) -> bool {
        self.start <= number && number <= self.end
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// A generation label as written on the command line ("1" through "8").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Generation {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
}

impl Generation {
    pub fn all() -> &'static [Self] {
        &[
            Self::I,
            Self::II,
            Self::III,
            Self::IV,
            Self::V,
            Self::VI,
            Self::VII,
            Self::VIII,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::I => "1",
            Self::II => "2",
            Self::III => "3",
            Self::IV => "4",
            Self::V => "5",
            Self::VI => "6",
            Self::VII => "7",
            Self::VIII => "8",
        }
    }

    /// Exact match only; " 1" is not a label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|g| g.label() == label)
    }

    /// Roster numbers of this generation in the standard numbering.
    pub fn standard_bounds(&self) -> Bounds {
        match self {
            Self::I => Bounds::new(1, 151),
            Self::II => Bounds::new(152, 251),
            Self::III => Bounds::new(252, 386),
            Self::IV => Bounds::new(387, 493),
            Self::V => Bounds::new(494, 649),
            Self::VI => Bounds::new(650, 721),
            Self::VII => Bounds::new(722, 809),
            Self::VIII => Bounds::new(810, 898),
        }
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Read-only lookup from generation label to roster bounds.
#[derive(Clone, Debug)]
pub struct GenerationIndex {
    table: BTreeMap<Generation, Bounds>,
}

impl GenerationIndex {
    /// The standard eight-generation table.
    pub fn standard() -> Self {
        Self::from_table(Generation::all().iter().map(|g| (*g, g.standard_bounds())))
    }

    /// Build an index from an explicit table. Generations missing from the
    /// table are unrecognized.
    pub fn from_table(table: impl IntoIterator<Item = (Generation, Bounds)>) -> Self {
        Self {
            table: table.into_iter().collect(),
        }
    }

    pub fn bounds(&self, label: &str) -> Option<Bounds> {
        Generation::from_label(label).and_then(|g| self.table.get(&g).copied())
    }

    pub fn get(&self, generation: Generation) -> Option<Bounds> {
        self.table.get(&generation).copied()
    }

    /// Lowest start to highest end across every generation in the table.
    pub fn full_range(&self) -> Option<Bounds> {
        let start = self.table.values().map(|b| b.start).min()?;
        let end = self.table.values().map(|b| b.end).max()?;
        Some(Bounds::new(start, end))
    }
}

impl Default for GenerationIndex {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_contiguous() {
        let index = GenerationIndex::standard();
        let mut expected_start = 1;
        for generation in Generation::all() {
            let bounds = index.get(*generation).unwrap();
            assert_eq!(bounds.start, expected_start, "gap before generation {}", generation);
            assert!(!bounds.is_empty());
            expected_start = bounds.end + 1;
        }
        assert_eq!(expected_start, 899);
        assert_eq!(index.full_range(), Some(Bounds::new(1, 898)));
    }

    #[test]
    fn test_bounds_lookup() {
        let index = GenerationIndex::standard();
        assert_eq!(index.bounds("1"), Some(Bounds::new(1, 151)));
        assert_eq!(index.bounds("8"), Some(Bounds::new(810, 898)));
        assert_eq!(index.bounds("9"), None);
        assert_eq!(index.bounds(""), None);
        assert_eq!(index.bounds(" 2"), None);
    }

    #[test]
    fn test_custom_table_hides_missing_generations() {
        let index = GenerationIndex::from_table([(Generation::I, Bounds::new(1, 3))]);
        assert_eq!(index.bounds("1"), Some(Bounds::new(1, 3)));
        assert_eq!(index.bounds("2"), None);
        assert_eq!(index.full_range(), Some(Bounds::new(1, 3)));
    }

    #[test]
    fn test_backwards_bounds_are_empty() {
        let bounds = Bounds::new(152, 151);
        assert!(bounds.is_empty());
        assert_eq!(bounds.len(), 0);
        assert!(!bounds.contains(151));
        assert_eq!(Bounds::new(1, 151).len(), 151);
    }
}
