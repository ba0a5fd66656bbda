use std::collections::BTreeMap;

use crate::mat::Tree;

/// Floor applied to a count-derived minimum.
pub const DERIVED_MIN_COUNT_FLOOR: u64 = 10;

/// Per-position occurrence counts over the whole tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionIndex {
    counts: BTreeMap<u32, u64>,
}

/// How the minimum occurrence count for scanning a position is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinCount {
    Fixed(u64),
    /// `max(10, 75th percentile of all position counts)`.
    Derived,
}

impl MinCount {
    pub fn resolve(&self, index: &PositionIndex) -> u64 {
        match *self {
            MinCount::Fixed(n) => n,
            MinCount::Derived => index.derived_min_count(),
        }
    }
}

impl PositionIndex {
    /// Counts every mutation with a usable position, visiting each node once.
    pub fn build(tree: &Tree) -> Self {
        let mut counts = BTreeMap::new();
        for (_, node) in tree.iter() {
            for position in node.mutations().iter().filter_map(|m| m.position()) {
                *counts.entry(position).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    pub fn count(&self, position: u32) -> u64 {
        self.counts.get(&position).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts.iter().map(|(&p, &c)| (p, c))
    }

    /// Positions with at least `min_count` occurrences, ascending.
    pub fn eligible(&self, min_count: u64) -> Vec<(u32, u64)> {
        self.iter().filter(|&(_, c)| c >= min_count).collect()
    }

    pub fn derived_min_count(&self) -> u64 {
        let counts: Vec<u64> = self.counts.values().copied().collect();
        let p75 = percentile(&counts, 75.0).ceil() as u64;
        p75.max(DERIVED_MIN_COUNT_FLOOR)
    }
}

/// Percentile with linear interpolation between closest ranks. Returns 0 for
/// an empty slice.
pub fn percentile(values: &[u64], q: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let rank = (q / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] as f64 + (sorted[hi] as f64 - sorted[lo] as f64) * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat::Mutation;

    fn m(name: &str) -> Mutation {
        name.parse().unwrap()
    }

    #[test]
    fn test_build_counts_and_skips_unparseable() {
        let mut tree = Tree::new("root");
        let root = tree.root();
        tree.add_child(root, "a", vec![m("A10G"), m("C20T")]).unwrap();
        tree.add_child(root, "b", vec![m("A10G"), Mutation::new(-1, 'A', 'C')])
            .unwrap();

        let index = PositionIndex::build(&tree);
        assert_eq!(index.count(10), 2);
        assert_eq!(index.count(20), 1);
        assert_eq!(index.len(), 2);
        assert_eq!(index.eligible(2), vec![(10, 2)]);
        assert_eq!(index, PositionIndex::build(&tree));
    }

    #[test]
    fn test_percentile_interpolates() {
        assert_eq!(percentile(&[], 75.0), 0.0);
        assert_eq!(percentile(&[7], 75.0), 7.0);
        assert_eq!(percentile(&[1, 2, 3, 4], 75.0), 3.25);
        assert_eq!(percentile(&[40, 10, 30, 20, 50], 75.0), 40.0);
    }

    #[test]
    fn test_derived_min_count() {
        let mut index = PositionIndex::default();
        index.counts.extend([(1, 1), (2, 2), (3, 3)]);
        assert_eq!(MinCount::Derived.resolve(&index), DERIVED_MIN_COUNT_FLOOR);

        index.counts.extend([(4, 100), (5, 200)]);
        // sorted [1, 2, 3, 100, 200], rank 3 -> 100
        assert_eq!(index.derived_min_count(), 100);

        index.counts.insert(6, 101);
        // sorted [1, 2, 3, 100, 101, 200], rank 3.75 -> 100.75, rounded up
        assert_eq!(index.derived_min_count(), 101);
        assert_eq!(MinCount::Fixed(5).resolve(&index), 5);
    }
}
