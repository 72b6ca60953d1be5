//! Generation of the lookup table source file.
//!
//! The generated file contains a header comment, followed by a single module named by the [`Config`].
//! The module contains the following declarations in this order:
//!
//! * `PEXT_LUT: [[u8; 256]; 256]`, indexed by `[value][mask]`.
//! * `PDEP_LUT: [[u8; 256]; 256]`, indexed by `[value][mask]`.
//! * `POPCOUNT_LUT: [u8; 256]`, indexed by `[value]`.
//!
//! The module is marked `#[rustfmt::skip]` to preserve the layout of the tables.

use crate::codegen;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format;
use crate::tables::LookupTables;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

//-----------------------------------------------------------------------------

/// Name of the generated file.
pub const OUTPUT_FILE: &str = "pext_gen.rs";

/// Name of the extraction table.
pub const PEXT_NAME: &str = "PEXT_LUT";

/// Name of the deposit table.
pub const PDEP_NAME: &str = "PDEP_LUT";

/// Name of the population count table.
pub const POPCOUNT_NAME: &str = "POPCOUNT_LUT";

//-----------------------------------------------------------------------------

/// Returns the command that regenerates the file for the given configuration.
///
/// # Examples
///
/// ```
/// use pextgen::config::Config;
/// use pextgen::generator;
///
/// let config = Config::new("bits").unwrap();
/// assert_eq!(generator::regenerate_command(&config), "cargo run --bin pextgen -- --module bits");
/// ```
pub fn regenerate_command(config: &Config) -> String {
    format!("cargo run --bin pextgen -- --module {}", config.module())
}

/// Returns the normalized source of the generated file.
///
/// The output depends only on the configuration.
///
/// # Errors
///
/// Returns [`Error::Format`] if the generated text is malformed.
pub fn generate(config: &Config) -> Result<String> {
    let tables = LookupTables::new();
    debug!("Computed lookup tables");

    let mut source = String::new();
    source.push_str("// Code generated by pextgen; DO NOT EDIT.\n");
    source.push_str("//\n");
    source.push_str("// To regenerate this file:\n");
    source.push_str(&format!("//   {}\n", regenerate_command(config)));
    source.push('\n');
    source.push_str("#[rustfmt::skip]\n");
    source.push_str(&format!("pub mod {} {{\n", config.module()));

    let declarations = [
        codegen::declaration(PEXT_NAME, tables.pext(), &format!("{} contains pre-computed parallel bit extraction results, indexed by [value][mask].", PEXT_NAME), 1),
        codegen::declaration(PDEP_NAME, tables.pdep(), &format!("{} contains pre-computed parallel bit deposit results, indexed by [value][mask].", PDEP_NAME), 1),
        codegen::declaration(POPCOUNT_NAME, tables.popcount(), &format!("{} contains pre-computed population counts, indexed by [value].", POPCOUNT_NAME), 1),
    ];
    for (i, declaration) in declarations.iter().enumerate() {
        if i > 0 {
            source.push('\n');
        }
        debug!("Declaration {}: {} bytes", i, declaration.len());
        source.push_str(declaration);
        source.push('\n');
    }
    source.push_str("}\n");

    let formatted = format::normalize(&source)?;
    debug!("Normalized {} bytes of source", formatted.len());
    Ok(formatted)
}

/// Generates the source file and writes it to [`OUTPUT_FILE`] in directory `dir`.
///
/// The file is created or overwritten.
/// Returns the path to the file.
///
/// # Errors
///
/// Returns [`Error::Format`] if generation fails and [`Error::Io`] if the file cannot be written.
/// Nothing is written if generation fails.
///
/// # Examples
///
/// ```
/// use pextgen::config::Config;
/// use pextgen::generator;
/// use std::fs;
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config::new("bits").unwrap();
/// let path = generator::write_to(&config, dir.path()).unwrap();
/// assert!(fs::read_to_string(&path).unwrap().contains("pub mod bits {"));
/// ```
pub fn write_to<P: AsRef<Path>>(config: &Config, dir: P) -> Result<PathBuf> {
    let source = generate(config)?;
    let path = dir.as_ref().join(OUTPUT_FILE);

    let mut options = OpenOptions::new();
    options.create(true).write(true).truncate(true)
        .open(&path)
        .and_then(|mut file| file.write_all(source.as_bytes()))
        .map_err(|err| Error::Io { path: path.clone(), source: err, })?;

    info!("Wrote {} bytes to {}", source.len(), path.display());
    Ok(path)
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
