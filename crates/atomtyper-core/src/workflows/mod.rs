//! # Workflows Module
//!
//! The highest-level, user-facing API. A workflow ties the `core` and
//! `engine` layers together into a complete procedure: load a forcefield
//! document, resolve every atom of a molecule, and hand back the final
//! type assignment.

pub mod typing;
