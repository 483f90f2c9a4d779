//! # Atomtyper Core Library
//!
//! A library for rule-based atomtyping: assigning a single forcefield atom
//! type to every atom of a molecular graph by matching SMARTS-like structural
//! patterns and resolving conflicts through explicit precedence overrides.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`Molecule`), the forcefield document loader (`ForcefieldDocument`), the
//!   pattern language (parser and anchored matcher), and I/O utilities.
//!
//! - **[`engine`]: The Logic Core.** This layer hosts the typing resolver: it
//!   evaluates every rule against every atom, applies the override relation to
//!   a fixed point, and aggregates per-atom diagnostics into a single result.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to execute a complete typing
//!   run, providing a simple and powerful entry point for end-users of the
//!   library.

pub mod core;
pub mod engine;
pub mod workflows;
