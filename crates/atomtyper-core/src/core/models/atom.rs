use crate::core::models::element::normalize_label;

/// Represents a single atom in the molecular graph consumed by the typing
/// engine.
///
/// An atom carries only what the pattern matcher and the diagnostics need:
/// its element label and the external serial number supplied by whatever
/// loader produced the molecule. Coordinates, charges, and other simulation
/// properties are the concern of downstream consumers, not of atomtyping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    /// External, caller-supplied serial number. Used in diagnostics and in
    /// the final assignment output; unique within a molecule.
    pub serial: usize,
    /// Normalized element label (e.g. "C", "H", "Cl").
    pub element: String,
}

impl Atom {
    /// Creates a new `Atom` with the given serial and element label.
    ///
    /// The label is normalized to canonical capitalization (`"CL"` and
    /// `"cl"` both become `"Cl"`); labels not present in the element table
    /// are kept verbatim so nonstandard labels stay matchable.
    pub fn new(serial: usize, element: &str) -> Self {
        Self {
            serial,
            element: normalize_label(element),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_normalizes_known_element_labels() {
        assert_eq!(Atom::new(1, "c").element, "C");
        assert_eq!(Atom::new(2, "CL").element, "Cl");
        assert_eq!(Atom::new(3, "Br").element, "Br");
    }

    #[test]
    fn new_atom_keeps_unknown_labels_verbatim() {
        let atom = Atom::new(7, "DUM");
        assert_eq!(atom.element, "DUM");
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let a = Atom::new(4, "N");
        let b = a.clone();
        assert_eq!(a, b);
    }
}
