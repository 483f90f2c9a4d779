use super::assignment::{TypeAssignment, UnresolvedAtom, UnresolvedReason};
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use crate::core::forcefield::rules::RuleSet;
use crate::core::models::ids::AtomId;
use crate::core::models::molecule::Molecule;
use crate::core::pattern::matcher;
use tracing::{debug, info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The terminal state of a single atom's resolution.
///
/// An atom moves from unevaluated through a candidate set to exactly one of
/// these two states; there is no shared state between atoms, so resolution
/// order is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomOutcome {
    Resolved(String),
    Unresolved(UnresolvedReason),
}

/// Collects the names of all rules whose pattern matches anchored at `atom`,
/// in rule-set (document) order.
pub fn candidates(molecule: &Molecule, atom: AtomId, rules: &RuleSet) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| matcher::matches(molecule, atom, &rule.pattern))
        .map(|rule| rule.name.clone())
        .collect()
}

/// Applies the override relation to a candidate set until a fixed point.
///
/// Each round simultaneously removes every candidate that is overridden by a
/// still-present candidate it does not itself override; the simultaneous
/// formulation makes the survivors independent of candidate enumeration
/// order. Mutual or cyclic domination removes nobody, and a round that would
/// remove every survivor is abandoned, so the result is never empty unless
/// the input was. Termination follows from the set shrinking strictly on
/// every round that removes anything.
pub fn filter_overrides(candidates: &[String], rules: &RuleSet) -> Vec<String> {
    let mut present: Vec<usize> = (0..candidates.len()).collect();
    loop {
        let dominated: Vec<bool> = present
            .iter()
            .map(|&loser| {
                present.iter().any(|&winner| {
                    winner != loser
                        && rules.overrides(&candidates[winner], &candidates[loser])
                        && !rules.overrides(&candidates[loser], &candidates[winner])
                })
            })
            .collect();
        let removals = dominated.iter().filter(|&&d| d).count();
        if removals == 0 {
            break;
        }
        if removals == present.len() {
            // Cyclic domination across the whole set; removing all of them
            // would violate the survivors-nonempty invariant.
            warn!("Override filtering hit a domination cycle; keeping all survivors.");
            break;
        }
        let mut keep = dominated.iter().map(|&d| !d);
        present.retain(|_| keep.next().unwrap());
    }
    present.into_iter().map(|i| candidates[i].clone()).collect()
}

/// Resolves a single atom: candidate collection, override filtering, and the
/// terminal state decision.
pub fn resolve_atom(molecule: &Molecule, atom: AtomId, rules: &RuleSet) -> AtomOutcome {
    let matched = candidates(molecule, atom, rules);
    if matched.is_empty() {
        return AtomOutcome::Unresolved(UnresolvedReason::NoMatchingAtomtype);
    }
    let mut survivors = filter_overrides(&matched, rules);
    match survivors.len() {
        1 => AtomOutcome::Resolved(survivors.remove(0)),
        _ => AtomOutcome::Unresolved(UnresolvedReason::AmbiguousAtomtype {
            candidates: survivors,
        }),
    }
}

/// Resolves every atom of the molecule against the loaded rule set.
///
/// Per-atom failures are accumulated rather than raised individually: the
/// caller receives either a complete [`TypeAssignment`] or a single
/// `TypingIncomplete` error listing every unresolved atom with its reason,
/// ordered by atom serial. With the `parallel` feature, atoms are dispatched
/// across the rayon thread pool; the result does not depend on scheduling.
#[instrument(skip_all, name = "typing_resolver")]
pub fn resolve_molecule(
    molecule: &Molecule,
    rules: &RuleSet,
    reporter: &ProgressReporter,
) -> Result<TypeAssignment, EngineError> {
    if rules.is_empty() {
        warn!("Rule set is empty; every atom will be unresolved.");
    }
    let atom_ids: Vec<AtomId> = molecule.atoms_iter().map(|(id, _)| id).collect();
    info!(
        atoms = atom_ids.len(),
        rules = rules.len(),
        "Resolving atom types."
    );
    reporter.report(Progress::TypingStart {
        total_atoms: atom_ids.len() as u64,
    });

    let resolve_one = |&id: &AtomId| {
        let outcome = resolve_atom(molecule, id, rules);
        reporter.report(Progress::AtomTyped);
        (id, outcome)
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<(AtomId, AtomOutcome)> = atom_ids.par_iter().map(resolve_one).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<(AtomId, AtomOutcome)> = atom_ids.iter().map(resolve_one).collect();

    reporter.report(Progress::TypingFinish);

    let mut assignment = TypeAssignment::new();
    let mut failures = Vec::new();
    for (id, outcome) in outcomes {
        match outcome {
            AtomOutcome::Resolved(name) => {
                debug!(atom = ?id, rule = %name, "Atom resolved.");
                assignment.insert(id, name);
            }
            AtomOutcome::Unresolved(reason) => {
                let atom = molecule
                    .atom(id)
                    .ok_or_else(|| EngineError::Internal("atom vanished during typing".into()))?;
                failures.push(UnresolvedAtom {
                    serial: atom.serial,
                    element: atom.element.clone(),
                    reason,
                });
            }
        }
    }

    if failures.is_empty() {
        info!(typed = assignment.len(), "Typing complete.");
        Ok(assignment)
    } else {
        failures.sort_by_key(|f| f.serial);
        warn!(unresolved = failures.len(), "Typing incomplete.");
        Err(EngineError::TypingIncomplete { failures })
    }
}
