//! # Engine Module
//!
//! The typing resolver and its supporting types. The engine consumes a
//! read-only [`crate::core::models::molecule::Molecule`] and an immutable
//! [`crate::core::forcefield::rules::RuleSet`], evaluates every rule's
//! pattern against every atom, applies the override relation to a fixed
//! point, and either produces a complete [`assignment::TypeAssignment`] or
//! aggregates every per-atom failure into one diagnostic error.

pub mod assignment;
pub mod error;
pub mod progress;
pub mod resolver;
