//! # Core Models Module
//!
//! Data structures representing the molecular graph consumed by the typing
//! engine. A [`molecule::Molecule`] is built once from an external loader and
//! is read-only afterward: atoms carry an element label and a caller-supplied
//! serial number, bonds are undirected, and adjacency is cached for the
//! pattern matcher's neighbor walks.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom representation
//! - [`molecule`] - The molecular graph with bonds and cached adjacency
//! - [`element`] - Static element-symbol knowledge used to normalize labels
//! - [`ids`] - Unique identifier types for atoms

pub mod atom;
pub mod element;
pub mod ids;
pub mod molecule;
