use super::ast::PatternNode;
use crate::core::models::ids::AtomId;
use crate::core::models::molecule::Molecule;

/// Decides whether `pattern` is satisfied with `anchor` as the match root.
///
/// Matching is existential and injective: the pattern tree must be mapped
/// onto distinct molecule atoms, rooted at the anchor, with every child
/// bound to a bonded neighbor of its parent's atom and every node's local
/// element/degree constraints satisfied. The search is a depth-first
/// backtracking walk over a worklist of unmatched pattern positions with
/// early pruning on element mismatch and insufficient degree; it returns on
/// the first satisfying assignment.
pub fn matches(molecule: &Molecule, anchor: AtomId, pattern: &PatternNode) -> bool {
    if !local_constraints_hold(molecule, pattern, anchor) {
        return false;
    }
    let mut bindings = Vec::with_capacity(pattern.size());
    bindings.push(anchor);
    let goals: Vec<Goal> = pattern
        .children
        .iter()
        .map(|node| Goal {
            node,
            parent: anchor,
        })
        .collect();
    solve(molecule, &goals, &mut bindings)
}

/// One unmatched pattern position: a node that still needs an atom, bound to
/// a distinct bonded neighbor of its parent's already-matched atom.
#[derive(Clone, Copy)]
struct Goal<'p> {
    node: &'p PatternNode,
    parent: AtomId,
}

/// Searches for an assignment satisfying every goal in the worklist.
///
/// Binding a goal's node pushes that node's children onto the worklist ahead
/// of the remaining goals, so later siblings are solved *inside* the search
/// over the child's subtree: when a sibling fails on injectivity, the search
/// backtracks into alternative internal bindings of the subtree rather than
/// abandoning the neighbor outright.
fn solve(molecule: &Molecule, goals: &[Goal], bindings: &mut Vec<AtomId>) -> bool {
    let Some((goal, rest)) = goals.split_first() else {
        return true;
    };
    for &neighbor in molecule.neighbors(goal.parent) {
        if bindings.contains(&neighbor) {
            continue;
        }
        if !local_constraints_hold(molecule, goal.node, neighbor) {
            continue;
        }
        bindings.push(neighbor);
        let mut next: Vec<Goal> = goal
            .node
            .children
            .iter()
            .map(|node| Goal {
                node,
                parent: neighbor,
            })
            .collect();
        next.extend_from_slice(rest);
        if solve(molecule, &next, bindings) {
            return true;
        }
        bindings.pop();
    }
    false
}

fn local_constraints_hold(molecule: &Molecule, node: &PatternNode, atom: AtomId) -> bool {
    let Some(record) = molecule.atom(atom) else {
        return false;
    };
    if let Some(element) = &node.element
        && record.element != *element
    {
        return false;
    }
    let degree = molecule.degree(atom);
    if let Some(required) = node.degree
        && degree != required
    {
        return false;
    }
    // A node can never place more children than the atom has neighbors.
    degree >= node.children.len()
}
