/// One node of a pattern tree.
///
/// A node constrains a single atom position: its element label (absent for
/// the `*` wildcard), its exact bonded-neighbor count, and the sub-patterns
/// each of its children must satisfy on *distinct* neighbors of the matched
/// atom. All constraints attached to one node are conjunctive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternNode {
    /// Required element label, or `None` to match any element.
    pub element: Option<String>,
    /// Required exact number of bonded neighbors, if constrained.
    pub degree: Option<usize>,
    /// Sub-patterns that must each match a distinct bonded neighbor.
    pub children: Vec<PatternNode>,
}

impl PatternNode {
    /// A wildcard node with no constraints.
    pub fn any() -> Self {
        Self {
            element: None,
            degree: None,
            children: Vec::new(),
        }
    }

    /// A node constrained to the given element label.
    pub fn element(label: &str) -> Self {
        Self {
            element: Some(label.to_string()),
            ..Self::any()
        }
    }

    /// Adds an exact bonded-neighbor-count constraint.
    pub fn with_degree(mut self, degree: usize) -> Self {
        self.degree = Some(degree);
        self
    }

    /// Appends a child sub-pattern.
    pub fn with_child(mut self, child: PatternNode) -> Self {
        self.children.push(child);
        self
    }

    /// Total number of nodes in this pattern tree.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(PatternNode::size).sum::<usize>()
    }
}
