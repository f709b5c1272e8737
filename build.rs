//! Embeds everything under `assets/` into the binary.
//!
//! Writes `OUT_DIR/bundle.rs`, a table of `(relative path, bytes)` pairs
//! built from `include_bytes!`, which `assets::EmbeddedStore` serves from.

use std::env::var;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

fn collect(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect(&path, files)?;
        } else if path.is_file() {
            files.push(path);
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let manifest_dir =
        PathBuf::from(var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let out_dir = PathBuf::from(var("OUT_DIR").expect("OUT_DIR not set"));
    let root = manifest_dir.join("assets");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", root.display());

    let mut files = Vec::new();
    if root.is_dir() {
        collect(&root, &mut files)?;
    }
    files.sort();

    let mut bundle = File::create(out_dir.join("bundle.rs"))?;
    writeln!(bundle, "pub static BUNDLE: &[(&str, &[u8])] = &[")?;
    for path in &files {
        println!("cargo:rerun-if-changed={}", path.display());
        let relative = path
            .strip_prefix(&root)
            .expect("asset outside root")
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        writeln!(
            bundle,
            "    ({:?}, include_bytes!({:?})),",
            relative,
            path.display().to_string()
        )?;
    }
    writeln!(bundle, "];")?;

    Ok(())
}
