//! # Forcefield Module
//!
//! Forcefield rule documents and the rule model the typing engine consumes.
//!
//! A forcefield document is an XML file whose `<AtomTypes>` section
//! enumerates named typing rules: each record carries a structural pattern,
//! optional description and citation, and an optional list of other rule
//! names it takes precedence over. [`document`] parses and validates such
//! documents; [`rules`] holds the loaded, immutable rule set. Sections other
//! than `<AtomTypes>` (bonded and non-bonded numeric parameters) are carried
//! as opaque pass-through data for downstream consumers.

pub mod document;
pub mod rules;
