use std::collections::{BTreeSet, HashSet};

use crate::mat::{NodeIdx, Tree};
use crate::splits::dispatch::MaskDirectives;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskSummary {
    pub nodes_rewritten: usize,
    pub mutations_removed: usize,
    /// Positions named by a directive whose target node exists.
    pub positions: BTreeSet<u32>,
}

/// Pre-order interval labels: `x` is in the subtree of `n` iff
/// `enter[n] <= enter[x] < exit[n]`.
struct SubtreeIntervals {
    preorder: Vec<NodeIdx>,
    enter: Vec<usize>,
    exit: Vec<usize>,
}

impl SubtreeIntervals {
    fn new(tree: &Tree) -> Self {
        let preorder = tree.preorder();
        let mut enter = vec![0; tree.len()];
        for (i, idx) in preorder.iter().enumerate() {
            enter[idx.0] = i;
        }

        let mut size = vec![1usize; tree.len()];
        for &idx in preorder.iter().rev() {
            if let Some(parent) = tree[idx].parent() {
                size[parent.0] += size[idx.0];
            }
        }
        let exit = (0..tree.len()).map(|i| enter[i] + size[i]).collect();

        Self {
            preorder,
            enter,
            exit,
        }
    }

    fn contains(&self, ancestor: NodeIdx, node: NodeIdx) -> bool {
        let e = self.enter[node.0];
        self.enter[ancestor.0] <= e && e < self.exit[ancestor.0]
    }

    fn subtree(&self, root: NodeIdx) -> &[NodeIdx] {
        &self.preorder[self.enter[root.0]..self.exit[root.0]]
    }
}

/// Removes masked positions from the tree in place.
///
/// A below directive strips its positions from the target and every
/// descendant; an above directive strips them from every node outside the
/// target's subtree. Each node ends up with its original mutations minus the
/// union of every position set that applies to it, written back in a single
/// replacement. Directives naming a node that is not in the tree are ignored.
pub fn apply_masks(tree: &mut Tree, directives: &MaskDirectives) -> MaskSummary {
    let intervals = SubtreeIntervals::new(tree);
    let exists = |idx: &NodeIdx| tree.node(*idx).is_some();
    let mut removals: Vec<Option<HashSet<u32>>> = vec![None; tree.len()];
    let mut summary = MaskSummary::default();

    for (target, positions) in directives.below.iter().filter(|&(t, _)| exists(t)) {
        summary.positions.extend(positions);
        for &idx in intervals.subtree(*target) {
            removals[idx.0]
                .get_or_insert_with(HashSet::new)
                .extend(positions);
        }
    }

    let above: Vec<_> = directives.above.iter().filter(|&(t, _)| exists(t)).collect();
    for (_, positions) in &above {
        summary.positions.extend(positions.iter());
    }
    if !above.is_empty() {
        for &idx in &intervals.preorder {
            for (target, positions) in &above {
                if !intervals.contains(**target, idx) {
                    removals[idx.0]
                        .get_or_insert_with(HashSet::new)
                        .extend(positions.iter());
                }
            }
        }
    }

    for (i, removal) in removals.into_iter().enumerate() {
        let Some(removal) = removal else { continue };
        let Some(node) = tree.node_mut(NodeIdx(i)) else { continue };

        let before = node.mutations().len();
        let kept: Vec<_> = node
            .mutations()
            .iter()
            .filter(|m| m.position().map_or(true, |p| !removal.contains(&p)))
            .cloned()
            .collect();
        if kept.len() != before {
            summary.mutations_removed += before - kept.len();
            summary.nodes_rewritten += 1;
            node.set_mutations(kept);
        }
    }

    summary
}
