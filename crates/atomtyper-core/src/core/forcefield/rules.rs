use crate::core::pattern::ast::PatternNode;
use std::collections::HashMap;
use thiserror::Error;

/// A single typing rule loaded from a forcefield document.
///
/// Immutable once loaded. The override targets are the names of other rules
/// this rule suppresses when both match the same atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Unique rule name (e.g. "opls_135").
    pub name: String,
    /// Parsed structural pattern, anchored at the candidate atom.
    pub pattern: PatternNode,
    /// The original pattern string, kept for diagnostics.
    pub pattern_source: String,
    /// Optional human-readable description.
    pub description: Option<String>,
    /// Optional source citation (e.g. a DOI).
    pub citation: Option<String>,
    /// Names of rules this rule takes precedence over, in document order.
    pub overrides: Vec<String>,
}

/// Structural problems in a set of rules, detected after the full document
/// has been read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("Duplicate rule name: '{name}'")]
    DuplicateRule { name: String },

    #[error("Rule '{rule}' overrides unknown rule '{target}'")]
    DanglingOverride { rule: String, target: String },
}

/// The immutable set of rules loaded from one forcefield document.
///
/// Preserves document order for deterministic iteration and offers name
/// lookup plus the direct override relation used by the typing resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    index: HashMap<String, usize>,
}

impl RuleSet {
    /// Builds a rule set from rules in document order.
    ///
    /// # Errors
    ///
    /// Returns `RuleSetError::DuplicateRule` if two rules share a name, and
    /// `RuleSetError::DanglingOverride` if any rule's override list names a
    /// rule that is not present.
    pub fn from_rules(rules: Vec<Rule>) -> Result<Self, RuleSetError> {
        let mut index = HashMap::with_capacity(rules.len());
        for (i, rule) in rules.iter().enumerate() {
            if index.insert(rule.name.clone(), i).is_some() {
                return Err(RuleSetError::DuplicateRule {
                    name: rule.name.clone(),
                });
            }
        }
        for rule in &rules {
            for target in &rule.overrides {
                if !index.contains_key(target) {
                    return Err(RuleSetError::DanglingOverride {
                        rule: rule.name.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
        Ok(Self { rules, index })
    }

    /// Looks up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.index.get(name).map(|&i| &self.rules[i])
    }

    /// Returns an iterator over the rules in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns whether the set contains no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns whether `winner` directly overrides `loser`.
    ///
    /// Only the direct override declaration counts; the relation is not
    /// closed transitively.
    pub fn overrides(&self, winner: &str, loser: &str) -> bool {
        self.get(winner)
            .map(|rule| rule.overrides.iter().any(|t| t == loser))
            .unwrap_or(false)
    }
}
