//! # Core Module
//!
//! Fundamental building blocks of the atomtyping engine: the molecular graph
//! model, the forcefield rule documents, the structural pattern language, and
//! file I/O for molecules and typing results.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, bonds, and the
//!   read-only molecular graph the typing engine consumes
//! - **Forcefield Rules** ([`forcefield`]) - XML rule documents, named typing
//!   rules, and the override (precedence) relation between them
//! - **Pattern Language** ([`pattern`]) - A SMARTS-like structural pattern
//!   grammar with an anchored subgraph matcher
//! - **File I/O** ([`io`]) - Molecule descriptions and assignment/bibliography
//!   output

pub mod forcefield;
pub mod io;
pub mod models;
pub mod pattern;
