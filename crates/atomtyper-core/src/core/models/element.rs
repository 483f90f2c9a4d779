use phf::{Map, phf_map};

/// Canonical element symbols mapped to their atomic numbers.
///
/// Covers the elements that appear in the forcefields this engine is used
/// with; labels outside this table are accepted verbatim by the molecule
/// loader so exotic or dummy labels remain matchable by patterns.
static ATOMIC_NUMBERS: Map<&'static str, u8> = phf_map! {
    "H" => 1, "He" => 2, "Li" => 3, "Be" => 4, "B" => 5,
    "C" => 6, "N" => 7, "O" => 8, "F" => 9, "Ne" => 10,
    "Na" => 11, "Mg" => 12, "Al" => 13, "Si" => 14, "P" => 15,
    "S" => 16, "Cl" => 17, "Ar" => 18, "K" => 19, "Ca" => 20,
    "Ti" => 22, "Cr" => 24, "Mn" => 25, "Fe" => 26, "Co" => 27,
    "Ni" => 28, "Cu" => 29, "Zn" => 30, "Ga" => 31, "Ge" => 32,
    "As" => 33, "Se" => 34, "Br" => 35, "Kr" => 36, "Rb" => 37,
    "Sr" => 38, "Ag" => 47, "Cd" => 48, "Sn" => 50, "Sb" => 51,
    "Te" => 52, "I" => 53, "Xe" => 54, "Cs" => 55, "Ba" => 56,
    "Pt" => 78, "Au" => 79, "Hg" => 80, "Pb" => 82,
};

/// Returns the atomic number for a canonical element symbol, if known.
pub fn atomic_number(symbol: &str) -> Option<u8> {
    ATOMIC_NUMBERS.get(symbol).copied()
}

/// Returns whether the label is a canonical element symbol.
pub fn is_known_element(label: &str) -> bool {
    ATOMIC_NUMBERS.contains_key(label)
}

/// Normalizes an element label to canonical capitalization.
///
/// `"CL"`, `"cl"`, and `"Cl"` all normalize to `"Cl"`. Labels that do not
/// correspond to a known element symbol after recapitalization are returned
/// trimmed but otherwise verbatim.
pub fn normalize_label(label: &str) -> String {
    let trimmed = label.trim();
    if is_known_element(trimmed) {
        return trimmed.to_string();
    }
    let mut chars = trimmed.chars();
    let recapitalized: String = match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    };
    if is_known_element(&recapitalized) {
        recapitalized
    } else {
        trimmed.to_string()
    }
}
