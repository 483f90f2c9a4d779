//! # Core I/O Module
//!
//! File input and output for the typing engine: TOML molecule descriptions
//! on the way in, CSV assignment tables and bibliography text on the way
//! out. Structure-format loaders (PDB, MOL2) are external collaborators and
//! are deliberately not reproduced here; any loader that can produce atoms
//! and bonds can feed the engine directly through
//! [`crate::core::models::molecule::Molecule`].

pub mod assignment;
pub mod molecule;
