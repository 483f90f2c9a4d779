use super::atom::Atom;
use super::element::is_known_element;
use super::ids::AtomId;
use slotmap::{SecondaryMap, SlotMap};
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

/// An undirected bond between two atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1_id: AtomId,
    pub atom2_id: AtomId,
}

impl Bond {
    pub fn new(atom1_id: AtomId, atom2_id: AtomId) -> Self {
        Self { atom1_id, atom2_id }
    }

    pub fn contains(&self, atom_id: AtomId) -> bool {
        self.atom1_id == atom_id || self.atom2_id == atom_id
    }
}

/// Errors raised while constructing a [`Molecule`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoleculeError {
    #[error("Duplicate atom serial: {serial}")]
    DuplicateSerial { serial: usize },

    #[error("Bond references an atom that is not in the molecule")]
    UnknownAtom,

    #[error("Self-loop bond on atom serial {serial}")]
    SelfLoop { serial: usize },

    #[error("Duplicate bond between atom serials {serial1} and {serial2}")]
    DuplicateBond { serial1: usize, serial2: usize },
}

/// A molecular graph: atoms plus an undirected, symmetric bond relation.
///
/// The graph is constructed once by a loader and consumed read-only by the
/// typing engine. Construction enforces the structural invariants the engine
/// relies on: unique atom serials, no self-loops, no duplicate bonds, and
/// bond endpoints that exist. Adjacency is cached per atom so the pattern
/// matcher's neighbor walks are allocation-free.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    /// Primary storage for atoms using a slot map for efficient ID management.
    atoms: SlotMap<AtomId, Atom>,
    /// List of all bonds in the molecule.
    bonds: Vec<Bond>,
    /// Lookup map from external serial numbers to atom IDs.
    serial_map: HashMap<usize, AtomId>,
    /// Cached adjacency list, indexed by atom ID.
    adjacency: SecondaryMap<AtomId, Vec<AtomId>>,
}

impl Molecule {
    /// Creates a new, empty molecule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an atom to the molecule.
    ///
    /// Logs a warning when the element label is not a canonical element
    /// symbol; such labels are accepted so patterns targeting nonstandard
    /// labels keep working.
    ///
    /// # Errors
    ///
    /// Returns `MoleculeError::DuplicateSerial` if an atom with the same
    /// serial number is already present.
    pub fn add_atom(&mut self, atom: Atom) -> Result<AtomId, MoleculeError> {
        if self.serial_map.contains_key(&atom.serial) {
            return Err(MoleculeError::DuplicateSerial {
                serial: atom.serial,
            });
        }
        if !is_known_element(&atom.element) {
            warn!(
                serial = atom.serial,
                element = %atom.element,
                "Atom has a nonstandard element label."
            );
        }
        let serial = atom.serial;
        let id = self.atoms.insert(atom);
        self.serial_map.insert(serial, id);
        self.adjacency.insert(id, Vec::new());
        Ok(id)
    }

    /// Adds an undirected bond between two atoms.
    ///
    /// # Errors
    ///
    /// Returns `MoleculeError::UnknownAtom` if either endpoint does not
    /// exist, `MoleculeError::SelfLoop` if both endpoints are the same atom,
    /// and `MoleculeError::DuplicateBond` if the bond is already present (in
    /// either direction).
    pub fn add_bond(&mut self, atom1_id: AtomId, atom2_id: AtomId) -> Result<(), MoleculeError> {
        if !self.atoms.contains_key(atom1_id) || !self.atoms.contains_key(atom2_id) {
            return Err(MoleculeError::UnknownAtom);
        }
        if atom1_id == atom2_id {
            return Err(MoleculeError::SelfLoop {
                serial: self.atoms[atom1_id].serial,
            });
        }
        if self.adjacency[atom1_id].contains(&atom2_id) {
            return Err(MoleculeError::DuplicateBond {
                serial1: self.atoms[atom1_id].serial,
                serial2: self.atoms[atom2_id].serial,
            });
        }
        self.bonds.push(Bond::new(atom1_id, atom2_id));
        self.adjacency[atom1_id].push(atom2_id);
        self.adjacency[atom2_id].push(atom1_id);
        Ok(())
    }

    /// Retrieves an atom by its ID.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Looks up an atom ID by its external serial number.
    pub fn atom_by_serial(&self, serial: usize) -> Option<AtomId> {
        self.serial_map.get(&serial).copied()
    }

    /// Returns an iterator over all atoms as `(AtomId, &Atom)` pairs.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    /// Returns the bonded neighbors of an atom.
    ///
    /// Returns an empty slice for IDs not present in the molecule.
    pub fn neighbors(&self, id: AtomId) -> &[AtomId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the number of bonded neighbors of an atom.
    pub fn degree(&self, id: AtomId) -> usize {
        self.neighbors(id).len()
    }

    /// Returns all bonds in the molecule.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Returns the number of atoms in the molecule.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn methane() -> (Molecule, AtomId) {
        let mut mol = Molecule::new();
        let c = mol.add_atom(Atom::new(1, "C")).unwrap();
        for serial in 2..=5 {
            let h = mol.add_atom(Atom::new(serial, "H")).unwrap();
            mol.add_bond(c, h).unwrap();
        }
        (mol, c)
    }

    #[test]
    fn add_atom_assigns_ids_and_tracks_serials() {
        let mut mol = Molecule::new();
        let id = mol.add_atom(Atom::new(42, "C")).unwrap();
        assert_eq!(mol.atom(id).unwrap().serial, 42);
        assert_eq!(mol.atom_by_serial(42), Some(id));
        assert_eq!(mol.atom_count(), 1);
    }

    #[test]
    fn add_atom_rejects_duplicate_serial() {
        let mut mol = Molecule::new();
        mol.add_atom(Atom::new(1, "C")).unwrap();
        assert_eq!(
            mol.add_atom(Atom::new(1, "H")),
            Err(MoleculeError::DuplicateSerial { serial: 1 })
        );
    }

    #[test]
    fn add_bond_updates_adjacency_symmetrically() {
        let mut mol = Molecule::new();
        let a = mol.add_atom(Atom::new(1, "C")).unwrap();
        let b = mol.add_atom(Atom::new(2, "H")).unwrap();
        mol.add_bond(a, b).unwrap();
        assert_eq!(mol.neighbors(a), &[b]);
        assert_eq!(mol.neighbors(b), &[a]);
        assert_eq!(mol.degree(a), 1);
    }

    #[test]
    fn add_bond_rejects_self_loop() {
        let mut mol = Molecule::new();
        let a = mol.add_atom(Atom::new(1, "C")).unwrap();
        assert_eq!(
            mol.add_bond(a, a),
            Err(MoleculeError::SelfLoop { serial: 1 })
        );
    }

    #[test]
    fn add_bond_rejects_duplicates_in_both_directions() {
        let mut mol = Molecule::new();
        let a = mol.add_atom(Atom::new(1, "C")).unwrap();
        let b = mol.add_atom(Atom::new(2, "H")).unwrap();
        mol.add_bond(a, b).unwrap();
        assert!(matches!(
            mol.add_bond(a, b),
            Err(MoleculeError::DuplicateBond { .. })
        ));
        assert!(matches!(
            mol.add_bond(b, a),
            Err(MoleculeError::DuplicateBond { .. })
        ));
    }

    #[test]
    fn add_bond_rejects_unknown_endpoint() {
        let mut mol = Molecule::new();
        let a = mol.add_atom(Atom::new(1, "C")).unwrap();
        let missing = AtomId::default();
        assert_eq!(mol.add_bond(a, missing), Err(MoleculeError::UnknownAtom));
    }

    #[test]
    fn methane_has_expected_connectivity() {
        let (mol, c) = methane();
        assert_eq!(mol.atom_count(), 5);
        assert_eq!(mol.degree(c), 4);
        assert_eq!(mol.bonds().len(), 4);
        for &h in mol.neighbors(c) {
            assert_eq!(mol.degree(h), 1);
            assert_eq!(mol.atom(h).unwrap().element, "H");
        }
    }

    #[test]
    fn bond_contains_reports_both_endpoints() {
        let (mol, c) = methane();
        let bond = mol.bonds()[0];
        assert!(bond.contains(c));
        assert!(bond.contains(bond.atom2_id));
    }
}
