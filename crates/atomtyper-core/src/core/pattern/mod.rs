//! # Pattern Language Module
//!
//! A SMARTS-like structural pattern language for atomtype applicability.
//!
//! A pattern is a small rooted tree ([`ast::PatternNode`]): each node carries
//! an optional element-label constraint and an optional bonded-neighbor-count
//! constraint, and each child must match a distinct neighbor of its parent's
//! matched atom. [`parser`] turns pattern strings like `[C;X4](H)(H)(H)H`
//! into that tree, and [`matcher`] decides whether a pattern is satisfied
//! anchored at a given atom of a [`crate::core::models::molecule::Molecule`].

pub mod ast;
pub mod matcher;
pub mod parser;
