//! Read-only asset lookup.
//!
//! Assets live under a single root:
//!
//! ```text
//! <root>/pokemon.json
//! <root>/colorscripts/regular/<identifier>
//! <root>/colorscripts/shiny/<identifier>
//! ```
//!
//! Identifiers are lowercased before lookup, so "Bulbasaur" and "bulbasaur"
//! resolve to the same file. The crate's own `assets/` directory is compiled
//! into the binary ([`EmbeddedStore`]); [`DirStore`] reads another root from
//! disk.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Roster file name at the asset root
pub const ROSTER_FILE: &str = "pokemon.json";
/// Directory holding the art, split by variant
pub const COLORSCRIPTS_DIR: &str = "colorscripts";
const REGULAR_SUBDIR: &str = "regular";
const SHINY_SUBDIR: &str = "shiny";

/// Palette an entry is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Regular,
    Shiny,
}

impl Variant {
    pub fn is_shiny(&self) -> bool {
        matches!(self, Variant::Shiny)
    }

    pub fn subdir(&self) -> &'static str {
        match self {
            Variant::Regular => REGULAR_SUBDIR,
            Variant::Shiny => SHINY_SUBDIR,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.subdir())
    }
}

/// Relative path of an entry's art for the given variant.
pub fn art_path(identifier: &str, variant: Variant) -> PathBuf {
    Path::new(COLORSCRIPTS_DIR)
        .join(variant.subdir())
        .join(identifier.to_lowercase())
}

/// Source of bundled assets, addressed by path relative to the asset root.
pub trait AssetStore {
    fn read(&self, relative: &Path) -> io::Result<Vec<u8>>;

    /// Raw bytes of the roster file. Failure here is fatal to the run.
    fn read_roster(&self) -> Result<Vec<u8>> {
        let path = Path::new(ROSTER_FILE);
        self.read(path).map_err(|source| Error::RosterRead {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Art payload for `identifier` in the given variant.
    fn read_art(&self, identifier: &str, variant: Variant) -> Result<Vec<u8>> {
        let path = art_path(identifier, variant);
        self.read(&path)
            .map_err(|source| Error::ArtNotFound { path, source })
    }
}

/// Assets stored in a directory on disk.
#[derive(Clone, Debug)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetStore for DirStore {
    fn read(&self, relative: &Path) -> io::Result<Vec<u8>> {
        let full = self.root.join(relative);
        log::trace!("reading asset {}", full.display());
        fs::read(&full).map_err(|e| io::Error::new(e.kind(), format!("{}: {}", full.display(), e)))
    }
}

mod bundle {
    include!(concat!(env!("OUT_DIR"), "/bundle.rs"));
}

/// Assets compiled into the binary from the crate's `assets/` directory.
#[derive(Clone, Debug)]
pub struct EmbeddedStore {
    files: HashMap<&'static str, &'static [u8]>,
}

impl EmbeddedStore {
    pub fn new() -> Self {
        Self::from_table(bundle::BUNDLE)
    }

    fn from_table(table: &'static [(&'static str, &'static [u8])]) -> Self {
        Self {
            files: table.iter().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Default for EmbeddedStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Bundle key for a relative path: components joined with '/'.
fn bundle_key(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

impl AssetStore for EmbeddedStore {
    fn read(&self, relative: &Path) -> io::Result<Vec<u8>> {
        let key = bundle_key(relative);
        self.files.get(key.as_str()).map(|bytes| bytes.to_vec()).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: not in embedded bundle", key),
            )
        })
    }
}

/// Assets held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, relative: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(relative.into(), bytes.into());
    }

    pub fn insert_roster(&mut self, bytes: impl Into<Vec<u8>>) {
        self.insert(ROSTER_FILE, bytes);
    }

    pub fn insert_art(&mut self, identifier: &str, variant: Variant, bytes: impl Into<Vec<u8>>) {
        self.insert(art_path(identifier, variant), bytes);
    }
}

impl AssetStore for MemoryStore {
    fn read(&self, relative: &Path) -> io::Result<Vec<u8>> {
        self.files.get(relative).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: file does not exist", relative.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_art_path_lowercases_identifier() {
        assert_eq!(
            art_path("Mr-Mime", Variant::Shiny),
            Path::new("colorscripts").join("shiny").join("mr-mime")
        );
        assert_eq!(
            art_path("bulbasaur", Variant::Regular),
            Path::new("colorscripts").join("regular").join("bulbasaur")
        );
    }

    #[test]
    fn test_memory_store_art_lookup() {
        let mut store = MemoryStore::new();
        store.insert_art("bulbasaur", Variant::Regular, b"green".to_vec());

        assert_eq!(store.read_art("BULBASAUR", Variant::Regular).unwrap(), b"green");

        let err = store.read_art("bulbasaur", Variant::Shiny).unwrap_err();
        assert!(matches!(err, Error::ArtNotFound { .. }));
    }

    #[test]
    fn test_missing_roster_is_fatal() {
        let store = MemoryStore::new();
        let err = store.read_roster().unwrap_err();
        assert!(matches!(err, Error::RosterRead { .. }));
    }

    #[test]
    fn test_embedded_store_lookup() {
        static TABLE: &[(&str, &[u8])] = &[
            ("pokemon.json", b"[]"),
            ("colorscripts/regular/mew", b"pink\n"),
        ];
        let store = EmbeddedStore::from_table(TABLE);
        assert_eq!(store.len(), 2);
        assert_eq!(store.read_roster().unwrap(), b"[]");
        assert_eq!(store.read_art("Mew", Variant::Regular).unwrap(), b"pink\n");

        let err = store.read_art("mew", Variant::Shiny).unwrap_err();
        assert!(err.to_string().contains("colorscripts/shiny/mew"));
    }

    #[test]
    fn test_embedded_bundle_holds_roster() {
        let store = EmbeddedStore::new();
        assert!(!store.is_empty());
        assert!(store.read_roster().is_ok());
    }

    #[test]
    fn test_dir_store_reads_relative_paths() {
        let root = std::env::temp_dir().join(format!("pokego-assets-{}", std::process::id()));
        let art_dir = root.join("colorscripts").join("shiny");
        fs::create_dir_all(&art_dir).unwrap();
        fs::write(art_dir.join("pikachu"), b"\x1b[33mpika\x1b[0m\n").unwrap();

        let store = DirStore::new(&root);
        assert_eq!(
            store.read_art("Pikachu", Variant::Shiny).unwrap(),
            b"\x1b[33mpika\x1b[0m\n"
        );
        let err = store.read_art("pikachu", Variant::Regular).unwrap_err();
        assert!(err.to_string().contains("regular"));

        fs::remove_dir_all(&root).unwrap();
    }
}
