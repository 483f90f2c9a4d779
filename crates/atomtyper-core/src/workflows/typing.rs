use crate::core::forcefield::document::ForcefieldDocument;
use crate::core::forcefield::rules::RuleSet;
use crate::core::models::molecule::Molecule;
use crate::engine::assignment::TypeAssignment;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::resolver;
use std::path::Path;
use tracing::{info, instrument};

/// Runs the typing workflow against an already-loaded rule set.
///
/// # Errors
///
/// Returns `EngineError::TypingIncomplete` when any atom remains unresolved,
/// carrying every per-atom failure for diagnostic feedback.
#[instrument(skip_all, name = "typing_workflow")]
pub fn run(
    molecule: &Molecule,
    rules: &RuleSet,
    reporter: &ProgressReporter,
) -> Result<TypeAssignment, EngineError> {
    reporter.report(Progress::PhaseStart { name: "Typing" });
    info!(
        atoms = molecule.atom_count(),
        rules = rules.len(),
        "Starting typing workflow."
    );
    let assignment = resolver::resolve_molecule(molecule, rules, reporter)?;
    reporter.report(Progress::PhaseFinish);
    Ok(assignment)
}

/// Loads a forcefield document and runs the typing workflow with it.
///
/// Returns the loaded document alongside the assignment so callers can reach
/// the rules' citations and the pass-through parameter sections.
#[instrument(skip_all, name = "typing_workflow_with_document")]
pub fn run_with_document(
    molecule: &Molecule,
    document_path: &Path,
    reporter: &ProgressReporter,
) -> Result<(ForcefieldDocument, TypeAssignment), EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Loading forcefield",
    });
    let document = ForcefieldDocument::load(document_path)?;
    reporter.report(Progress::PhaseFinish);

    let assignment = run(molecule, &document.rules, reporter)?;
    Ok((document, assignment))
}
