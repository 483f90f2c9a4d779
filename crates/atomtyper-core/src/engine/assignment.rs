use crate::core::models::ids::AtomId;
use crate::core::models::molecule::Molecule;
use slotmap::SecondaryMap;
use std::fmt;

/// Why an atom could not be assigned a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// No loaded rule's pattern matched the atom.
    NoMatchingAtomtype,
    /// More than one rule survived override filtering.
    AmbiguousAtomtype { candidates: Vec<String> },
}

impl fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatchingAtomtype => write!(f, "no matching atomtype"),
            Self::AmbiguousAtomtype { candidates } => {
                write!(f, "ambiguous atomtype (candidates: {})", candidates.join(", "))
            }
        }
    }
}

/// A per-atom typing failure, reported in aggregate so a user can refine
/// patterns against complete diagnostic feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedAtom {
    pub serial: usize,
    pub element: String,
    pub reason: UnresolvedReason,
}

impl fmt::Display for UnresolvedAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "atom {} ({}): {}",
            self.serial, self.element, self.reason
        )
    }
}

/// The terminal output artifact: a complete mapping from atom to resolved
/// rule name.
#[derive(Debug, Clone, Default)]
pub struct TypeAssignment {
    types: SecondaryMap<AtomId, String>,
}

impl TypeAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, id: AtomId, rule_name: String) {
        self.types.insert(id, rule_name);
    }

    /// Returns the rule name assigned to an atom.
    pub fn get(&self, id: AtomId) -> Option<&str> {
        self.types.get(id).map(String::as_str)
    }

    /// Returns an iterator over all assignments.
    pub fn iter(&self) -> impl Iterator<Item = (AtomId, &str)> {
        self.types.iter().map(|(id, name)| (id, name.as_str()))
    }

    /// Returns the number of typed atoms.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns `(serial, element, rule name)` rows ordered by atom serial,
    /// the canonical order for output writers.
    pub fn rows<'a>(&'a self, molecule: &'a Molecule) -> Vec<(usize, &'a str, &'a str)> {
        let mut rows: Vec<_> = self
            .iter()
            .filter_map(|(id, name)| {
                molecule
                    .atom(id)
                    .map(|atom| (atom.serial, atom.element.as_str(), name))
            })
            .collect();
        rows.sort_by_key(|&(serial, _, _)| serial);
        rows
    }
}
