use crate::core::models::atom::Atom;
use crate::core::models::molecule::{Molecule, MoleculeError};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MoleculeFile {
    #[serde(default)]
    atoms: Vec<AtomRecord>,
    #[serde(default)]
    bonds: Vec<BondRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AtomRecord {
    serial: usize,
    element: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BondRecord {
    atoms: [usize; 2],
}

/// Errors raised while loading a molecule description.
#[derive(Debug, Error)]
pub enum MoleculeLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("Bond in '{path}' references unknown atom serial {serial}")]
    UnknownSerial { path: String, serial: usize },

    #[error("Invalid molecule structure in '{path}': {source}")]
    Structure {
        path: String,
        source: MoleculeError,
    },
}

/// Loads a molecule from a TOML description file.
///
/// The format lists atoms (external serial number plus element label) and
/// bonds (pairs of serials):
///
/// ```toml
/// [[atoms]]
/// serial = 1
/// element = "C"
///
/// [[bonds]]
/// atoms = [1, 2]
/// ```
///
/// # Errors
///
/// Returns a [`MoleculeLoadError`] on I/O or TOML syntax problems, on bonds
/// naming unknown serials, and on structural violations (duplicate serials,
/// self-loops, duplicate bonds).
pub fn load_molecule(path: &Path) -> Result<Molecule, MoleculeLoadError> {
    let display_path = path.to_string_lossy().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| MoleculeLoadError::Io {
        path: display_path.clone(),
        source: e,
    })?;
    parse_molecule(&content, &display_path)
}

/// Parses a molecule from in-memory TOML; `origin` is used in error messages.
pub fn parse_molecule(content: &str, origin: &str) -> Result<Molecule, MoleculeLoadError> {
    let file: MoleculeFile = toml::from_str(content).map_err(|e| MoleculeLoadError::Toml {
        path: origin.to_string(),
        source: e,
    })?;

    let mut molecule = Molecule::new();
    for record in &file.atoms {
        molecule
            .add_atom(Atom::new(record.serial, &record.element))
            .map_err(|e| MoleculeLoadError::Structure {
                path: origin.to_string(),
                source: e,
            })?;
    }
    for bond in &file.bonds {
        let [serial1, serial2] = bond.atoms;
        let id1 = molecule
            .atom_by_serial(serial1)
            .ok_or(MoleculeLoadError::UnknownSerial {
                path: origin.to_string(),
                serial: serial1,
            })?;
        let id2 = molecule
            .atom_by_serial(serial2)
            .ok_or(MoleculeLoadError::UnknownSerial {
                path: origin.to_string(),
                serial: serial2,
            })?;
        molecule
            .add_bond(id1, id2)
            .map_err(|e| MoleculeLoadError::Structure {
                path: origin.to_string(),
                source: e,
            })?;
    }
    Ok(molecule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const METHANE_TOML: &str = r#"
        atoms = [
            { serial = 1, element = "C" },
            { serial = 2, element = "H" },
            { serial = 3, element = "H" },
            { serial = 4, element = "H" },
            { serial = 5, element = "H" },
        ]
        bonds = [
            { atoms = [1, 2] },
            { atoms = [1, 3] },
            { atoms = [1, 4] },
            { atoms = [1, 5] },
        ]
    "#;

    #[test]
    fn parse_molecule_builds_methane() {
        let mol = parse_molecule(METHANE_TOML, "test").unwrap();
        assert_eq!(mol.atom_count(), 5);
        let c = mol.atom_by_serial(1).unwrap();
        assert_eq!(mol.degree(c), 4);
        assert_eq!(mol.atom(c).unwrap().element, "C");
    }

    #[test]
    fn load_molecule_reads_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("methane.toml");
        fs::write(&path, METHANE_TOML).unwrap();
        let mol = load_molecule(&path).unwrap();
        assert_eq!(mol.atom_count(), 5);
    }

    #[test]
    fn load_molecule_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_molecule(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(MoleculeLoadError::Io { .. })));
    }

    #[test]
    fn parse_molecule_fails_for_malformed_toml() {
        let result = parse_molecule("this is not toml", "test");
        assert!(matches!(result, Err(MoleculeLoadError::Toml { .. })));
    }

    #[test]
    fn parse_molecule_fails_for_unknown_bond_serial() {
        let content = r#"
            atoms = [{ serial = 1, element = "C" }]
            bonds = [{ atoms = [1, 9] }]
        "#;
        let result = parse_molecule(content, "test");
        assert!(matches!(
            result,
            Err(MoleculeLoadError::UnknownSerial { serial: 9, .. })
        ));
    }

    #[test]
    fn parse_molecule_fails_for_duplicate_serial() {
        let content = r#"
            atoms = [
                { serial = 1, element = "C" },
                { serial = 1, element = "H" },
            ]
        "#;
        let result = parse_molecule(content, "test");
        assert!(matches!(
            result,
            Err(MoleculeLoadError::Structure {
                source: MoleculeError::DuplicateSerial { serial: 1 },
                ..
            })
        ));
    }

    #[test]
    fn parse_molecule_fails_for_self_loop() {
        let content = r#"
            atoms = [{ serial = 1, element = "C" }]
            bonds = [{ atoms = [1, 1] }]
        "#;
        let result = parse_molecule(content, "test");
        assert!(matches!(
            result,
            Err(MoleculeLoadError::Structure {
                source: MoleculeError::SelfLoop { serial: 1 },
                ..
            })
        ));
    }

    #[test]
    fn parse_molecule_accepts_empty_document() {
        let mol = parse_molecule("", "test").unwrap();
        assert_eq!(mol.atom_count(), 0);
    }
}
