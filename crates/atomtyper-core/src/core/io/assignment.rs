use crate::core::forcefield::rules::RuleSet;
use crate::core::models::molecule::Molecule;
use crate::engine::assignment::TypeAssignment;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Serialize)]
struct AssignmentRow<'a> {
    serial: usize,
    element: &'a str,
    atom_type: &'a str,
}

/// Errors raised while writing assignment output.
#[derive(Debug, Error)]
pub enum AssignmentWriteError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV writing error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },
}

/// Writes the assignment as CSV (`serial,element,atom_type`), ordered by
/// atom serial.
pub fn write_csv<W: Write>(
    writer: W,
    molecule: &Molecule,
    assignment: &TypeAssignment,
) -> Result<(), AssignmentWriteError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (serial, element, atom_type) in assignment.rows(molecule) {
        csv_writer.serialize(AssignmentRow {
            serial,
            element,
            atom_type,
        })?;
    }
    csv_writer.flush().map_err(|e| AssignmentWriteError::Io {
        path: "<writer>".to_string(),
        source: e,
    })?;
    Ok(())
}

/// Writes the assignment CSV to a file path.
pub fn write_csv_to_path(
    path: &Path,
    molecule: &Molecule,
    assignment: &TypeAssignment,
) -> Result<(), AssignmentWriteError> {
    let file = std::fs::File::create(path).map_err(|e| AssignmentWriteError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    write_csv(file, molecule, assignment)
}

/// Builds a bibliography text block from the citations of the rules that
/// were actually assigned.
///
/// One line per cited rule, in rule-set (document) order, each rule listed
/// once regardless of how many atoms it typed. Rules without a citation are
/// skipped. Returns an empty string when nothing was cited.
pub fn bibliography(assignment: &TypeAssignment, rules: &RuleSet) -> String {
    let mut block = String::new();
    for rule in rules.iter() {
        let Some(citation) = &rule.citation else {
            continue;
        };
        let assigned = assignment.iter().any(|(_, name)| name == rule.name);
        if assigned {
            block.push_str(&format!("[{}] {}\n", rule.name, citation));
        }
    }
    block
}
