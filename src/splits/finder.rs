use std::fmt;

use crate::mat::{NodeIdx, Tree};
use crate::splits::chi2::chi2_yates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Mask the position in the node and all of its descendants.
    Below,
    /// Mask the position everywhere outside the node's subtree.
    Above,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Below => write!(f, "below"),
            Direction::Above => write!(f, "above"),
        }
    }
}

/// Best split found for one position.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDecision {
    pub position: u32,
    pub node: NodeIdx,
    pub statistic: f64,
    pub direction: Direction,
}

impl SplitDecision {
    /// Whether this split is strong enough to mask. A statistic of 0 means no
    /// split was found and never masks.
    pub fn exceeds(&self, mask_chi: f64) -> bool {
        self.statistic > 0.0 && self.statistic > mask_chi
    }
}

/// Position-independent view of the tree shared by every evaluation in a
/// round: the post-order and the mutation volume of every subtree.
#[derive(Debug, Clone)]
pub struct SubtreeVolumes {
    postorder: Vec<NodeIdx>,
    volumes: Vec<u64>,
    total: u64,
}

impl SubtreeVolumes {
    pub fn new(tree: &Tree) -> Self {
        let postorder = tree.postorder();
        let mut volumes = vec![0u64; tree.len()];
        for &idx in &postorder {
            let node = &tree[idx];
            let below: u64 = node.children().iter().map(|c| volumes[c.0]).sum();
            volumes[idx.0] = node.mutations().len() as u64 + below;
        }
        let total = volumes[tree.root().0];
        Self {
            postorder,
            volumes,
            total,
        }
    }

    pub fn volume(&self, idx: NodeIdx) -> u64 {
        self.volumes[idx.0]
    }

    /// Total mutation records in the tree, the volume of the root.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn postorder(&self) -> &[NodeIdx] {
        &self.postorder
    }
}

/// Finds, for one position at a time, the node whose subtree best separates
/// occurrences of that position from the rest of the tree.
pub struct SplitFinder<'a> {
    tree: &'a Tree,
    volumes: &'a SubtreeVolumes,
    min_total: u64,
}

impl<'a> SplitFinder<'a> {
    pub fn new(tree: &'a Tree, volumes: &'a SubtreeVolumes, min_total: u64) -> Self {
        Self {
            tree,
            volumes,
            min_total,
        }
    }

    /// Occurrences of `position` in every subtree, indexed by node.
    pub fn occurrences(&self, position: u32) -> Vec<u64> {
        let mut occ = vec![0u64; self.tree.len()];
        for &idx in self.volumes.postorder() {
            let node = &self.tree[idx];
            let own = node
                .mutations()
                .iter()
                .filter(|m| m.position() == Some(position))
                .count() as u64;
            let below: u64 = node.children().iter().map(|c| occ[c.0]).sum();
            occ[idx.0] = own + below;
        }
        occ
    }

    /// Evaluates every node for `position`, whose global occurrence count is
    /// `count`, and returns the split with the largest statistic.
    ///
    /// Nodes are only scored when both the subtree and its complement hold
    /// more than `min_total` mutations. When nothing qualifies the root is
    /// returned with a statistic of 0.
    pub fn find(&self, position: u32, count: u64) -> SplitDecision {
        let occ = self.occurrences(position);
        let total = self.volumes.total();

        let mut best = SplitDecision {
            position,
            node: self.tree.root(),
            statistic: 0.0,
            direction: Direction::Below,
        };

        for &idx in self.volumes.postorder() {
            let occ_below = occ[idx.0];
            let vol_below = self.volumes.volume(idx);
            let occ_above = count.saturating_sub(occ_below);
            let vol_above = total - vol_below;

            if vol_above <= self.min_total || vol_below <= self.min_total {
                continue;
            }

            let statistic = chi2_yates([
                [vol_above.saturating_sub(occ_above) as f64, occ_above as f64],
                [vol_below.saturating_sub(occ_below) as f64, occ_below as f64],
            ]);
            if statistic > best.statistic {
                let rate_below = rate(occ_below, vol_below);
                let rate_above = rate(occ_above, vol_above);
                best.node = idx;
                best.statistic = statistic;
                best.direction = if rate_below >= rate_above {
                    Direction::Below
                } else {
                    Direction::Above
                };
            }
        }

        best
    }
}

fn rate(occurrences: u64, volume: u64) -> f64 {
    if volume > 0 {
        occurrences as f64 / volume as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat::Mutation;
    use crate::splits::dispatch::MaskDirectives;
    use crate::splits::index::PositionIndex;
    use crate::splits::masking::apply_masks;

    fn muts(names: &[&str]) -> Vec<Mutation> {
        names.iter().map(|n| n.parse().unwrap()).collect()
    }

    /// root(2) -> a(10 x5, 20 x1) -> b(20 x5)
    fn chain() -> Tree {
        let mut tree = Tree::new("root");
        tree.node_mut(tree.root())
            .unwrap()
            .set_mutations(muts(&["A1G", "A2G"]));
        let a = tree
            .add_child(
                tree.root(),
                "a",
                muts(&["A10G", "A10C", "A10T", "A10G", "A10C", "C20T"]),
            )
            .unwrap();
        tree.add_child(a, "b", muts(&["C20T", "C20G", "C20A", "C20T", "C20G"]))
            .unwrap();
        tree
    }

    #[test]
    fn test_volumes_are_conserved() {
        let tree = chain();
        let volumes = SubtreeVolumes::new(&tree);
        for (idx, node) in tree.iter() {
            let below: u64 = node.children().iter().map(|&c| volumes.volume(c)).sum();
            assert_eq!(volumes.volume(idx), node.mutations().len() as u64 + below);
        }
        assert_eq!(volumes.total(), 13);
    }

    /// Checks volumes and occurrence counts against sums taken directly over
    /// each node's subtree.
    fn assert_subtree_sums(tree: &Tree) {
        let volumes = SubtreeVolumes::new(tree);
        let finder = SplitFinder::new(tree, &volumes, 1);
        let index = PositionIndex::build(tree);

        for (idx, node) in tree.iter() {
            let direct: u64 = tree
                .preorder_from(idx)
                .iter()
                .map(|&n| tree[n].mutations().len() as u64)
                .sum();
            assert_eq!(volumes.volume(idx), direct, "volume of {}", node.id());
        }
        assert_eq!(volumes.total(), tree.total_mutations());

        for (position, _) in index.iter() {
            let occ = finder.occurrences(position);
            assert_eq!(occ[tree.root().0], index.count(position));
            for (idx, node) in tree.iter() {
                let direct = tree
                    .preorder_from(idx)
                    .iter()
                    .flat_map(|&n| tree[n].mutations())
                    .filter(|m| m.position() == Some(position))
                    .count() as u64;
                assert_eq!(occ[idx.0], direct, "position {position} under {}", node.id());
            }
        }
    }

    #[test]
    fn test_counts_match_subtree_sums() {
        assert_subtree_sums(&chain());
    }

    #[test]
    fn test_counts_match_subtree_sums_after_masking() {
        let mut tree = chain();
        let b = tree.find("b").unwrap();
        let before = SubtreeVolumes::new(&tree).total();

        let mut directives = MaskDirectives::default();
        for (position, direction) in [(20, Direction::Below), (10, Direction::Above)] {
            directives.record(&SplitDecision {
                position,
                node: b,
                statistic: 1.0,
                direction,
            });
        }
        let summary = apply_masks(&mut tree, &directives);
        assert_eq!(summary.mutations_removed, 10);

        assert_subtree_sums(&tree);
        let after = SubtreeVolumes::new(&tree);
        assert_eq!(after.total(), before - summary.mutations_removed as u64);
        assert_eq!(after.volume(tree.find("a").unwrap()), 1);
        assert_eq!(after.volume(b), 0);
    }

    #[test]
    fn test_position_concentrated_in_leaf_splits_below() {
        let tree = chain();
        let volumes = SubtreeVolumes::new(&tree);
        let finder = SplitFinder::new(&tree, &volumes, 1);
        let decision = finder.find(20, 6);
        assert_eq!(decision.node, tree.find("b").unwrap());
        assert_eq!(decision.direction, Direction::Below);
        assert!((decision.statistic - 6.285_267_857_1).abs() < 1e-6);
        assert!(decision.exceeds(0.5));
    }

    #[test]
    fn test_position_absent_from_leaf_splits_above() {
        // Position 10 lives only in `a`, so the strongest contrast is `b`
        // (none of it) against everything else.
        let tree = chain();
        let volumes = SubtreeVolumes::new(&tree);
        let finder = SplitFinder::new(&tree, &volumes, 1);
        let decision = finder.find(10, 5);
        assert_eq!(decision.node, tree.find("b").unwrap());
        assert_eq!(decision.direction, Direction::Above);
        assert!(decision.statistic > 2.0);
    }

    #[test]
    fn test_no_eligible_node_returns_root_with_zero() {
        let tree = chain();
        let volumes = SubtreeVolumes::new(&tree);
        let finder = SplitFinder::new(&tree, &volumes, 100);
        let decision = finder.find(20, 6);
        assert_eq!(decision.node, tree.root());
        assert_eq!(decision.statistic, 0.0);
        assert_eq!(decision.direction, Direction::Below);
        assert!(!decision.exceeds(0.0));
    }

    #[test]
    fn test_uniform_position_has_no_split() {
        // Every node carries one copy of position 7 and one private mutation.
        let mut tree = Tree::new("root");
        tree.node_mut(tree.root())
            .unwrap()
            .set_mutations(muts(&["A7G", "A100G"]));
        let a = tree.add_child(tree.root(), "a", muts(&["A7G", "A101G"])).unwrap();
        tree.add_child(a, "b", muts(&["A7G", "A102G"])).unwrap();
        tree.add_child(tree.root(), "c", muts(&["A7G", "A103G"])).unwrap();

        let volumes = SubtreeVolumes::new(&tree);
        let finder = SplitFinder::new(&tree, &volumes, 1);
        let decision = finder.find(7, 4);
        assert_eq!(decision.statistic, 0.0);
        assert!(!decision.exceeds(1e-6));
    }
}
