use std::collections::{BTreeMap, BTreeSet};
use std::thread;

use crossbeam_channel::unbounded;
use indicatif::ProgressBar;
use tracing::debug;

use crate::error::ScanError;
use crate::mat::{NodeIdx, Tree};
use crate::splits::finder::{Direction, SplitDecision, SplitFinder, SubtreeVolumes};

/// Positions to mask per node, split by direction. Built once per round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskDirectives {
    pub below: BTreeMap<NodeIdx, BTreeSet<u32>>,
    pub above: BTreeMap<NodeIdx, BTreeSet<u32>>,
}

impl MaskDirectives {
    pub fn record(&mut self, decision: &SplitDecision) {
        let map = match decision.direction {
            Direction::Below => &mut self.below,
            Direction::Above => &mut self.above,
        };
        map.entry(decision.node).or_default().insert(decision.position);
    }

    pub fn is_empty(&self) -> bool {
        self.below.is_empty() && self.above.is_empty()
    }

    pub fn contains(&self, position: u32) -> bool {
        self.below
            .values()
            .chain(self.above.values())
            .any(|set| set.contains(&position))
    }

    /// Every position named by any directive.
    pub fn positions(&self) -> BTreeSet<u32> {
        self.below
            .values()
            .chain(self.above.values())
            .flatten()
            .copied()
            .collect()
    }
}

/// Runs the split finder for every `(position, count)` pair, at most
/// `nthreads` at a time. Decisions are returned in input order.
pub fn scan_positions(
    tree: &Tree,
    positions: &[(u32, u64)],
    min_total: u64,
    nthreads: usize,
    progress: &ProgressBar,
) -> Result<Vec<SplitDecision>, ScanError> {
    let volumes = SubtreeVolumes::new(tree);
    let finder = SplitFinder::new(tree, &volumes, min_total);
    let decisions = scan_with(positions, nthreads, progress, |position, count| {
        finder.find(position, count)
    })?;

    for d in &decisions {
        debug!(
            position = d.position,
            statistic = d.statistic,
            node = tree[d.node].id(),
            direction = %d.direction,
            "Position checked"
        );
    }

    Ok(decisions)
}

/// Evaluates every position with `evaluate`, in batches of `nthreads` scoped
/// workers.
///
/// Each batch is joined before the next starts, and workers send their
/// decision back over a channel. If any worker panics, the rest of its batch
/// is still joined and the scan fails with the first panicking position; no
/// later batch runs.
pub fn scan_with<F>(
    positions: &[(u32, u64)],
    nthreads: usize,
    progress: &ProgressBar,
    evaluate: F,
) -> Result<Vec<SplitDecision>, ScanError>
where
    F: Fn(u32, u64) -> SplitDecision + Sync,
{
    let (tx, rx) = unbounded();
    let mut decisions = Vec::with_capacity(positions.len());

    progress.set_length(positions.len() as u64);
    progress.set_position(0);

    for batch in positions.chunks(nthreads.max(1)) {
        let failed = thread::scope(|scope| {
            let handles: Vec<_> = batch
                .iter()
                .map(|&(position, count)| {
                    let tx = tx.clone();
                    let evaluate = &evaluate;
                    let handle = scope.spawn(move || {
                        let decision = evaluate(position, count);
                        // The receiver outlives every batch.
                        let _ = tx.send(decision);
                    });
                    (position, handle)
                })
                .collect();

            // Join everything before reporting, so no worker is left running.
            let mut failed = None;
            for (position, handle) in handles {
                if handle.join().is_err() && failed.is_none() {
                    failed = Some(position);
                }
            }
            failed
        });

        if let Some(position) = failed {
            return Err(ScanError::WorkerPanicked { position });
        }

        decisions.extend(rx.try_iter());
        progress.inc(batch.len() as u64);
    }

    let order: BTreeMap<u32, usize> = positions
        .iter()
        .enumerate()
        .map(|(i, &(p, _))| (p, i))
        .collect();
    decisions.sort_by_key(|d| order.get(&d.position).copied().unwrap_or(usize::MAX));

    Ok(decisions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat::Mutation;
    use crate::splits::index::PositionIndex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn muts(names: &[&str]) -> Vec<Mutation> {
        names.iter().map(|n| n.parse().unwrap()).collect()
    }

    fn tree() -> Tree {
        let mut tree = Tree::new("root");
        tree.node_mut(tree.root())
            .unwrap()
            .set_mutations(muts(&["A1G", "A2G", "A3G"]));
        let a = tree
            .add_child(tree.root(), "a", muts(&["A10G", "A10C", "A10T", "C20T"]))
            .unwrap();
        tree.add_child(a, "b", muts(&["C20T", "C20G", "C20A", "A4G"])).unwrap();
        tree.add_child(tree.root(), "c", muts(&["A5G", "A6G", "A7G", "A8G"]))
            .unwrap();
        tree
    }

    #[test]
    fn test_parallel_scan_matches_sequential() {
        let tree = tree();
        let positions = PositionIndex::build(&tree).eligible(1);
        let volumes = SubtreeVolumes::new(&tree);
        let finder = SplitFinder::new(&tree, &volumes, 1);
        let expected: Vec<_> = positions.iter().map(|&(p, c)| finder.find(p, c)).collect();

        for nthreads in [1, 2, 3, 64] {
            let got = scan_positions(&tree, &positions, 1, nthreads, &ProgressBar::hidden())
                .unwrap();
            assert_eq!(got, expected, "nthreads = {nthreads}");
        }
    }

    #[test]
    fn test_panicking_worker_fails_the_scan() {
        let positions: Vec<(u32, u64)> = (1..=8).map(|p| (p, 1)).collect();
        let finished = AtomicUsize::new(0);
        let result = scan_with(&positions, 4, &ProgressBar::hidden(), |position, _| {
            if position == 3 {
                panic!("evaluation failed");
            }
            finished.fetch_add(1, Ordering::SeqCst);
            SplitDecision {
                position,
                node: NodeIdx(0),
                statistic: 0.0,
                direction: Direction::Below,
            }
        });

        assert!(matches!(result, Err(ScanError::WorkerPanicked { position: 3 })));
        // The rest of the first batch was joined; the second batch never ran.
        assert_eq!(finished.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_directives_group_by_node_and_direction() {
        let mut directives = MaskDirectives::default();
        assert!(directives.is_empty());

        let node = NodeIdx(3);
        let recorded = [
            (10, Direction::Below),
            (11, Direction::Below),
            (12, Direction::Above),
        ];
        for (position, direction) in recorded {
            directives.record(&SplitDecision {
                position,
                node,
                statistic: 9.0,
                direction,
            });
        }

        assert_eq!(directives.below[&node], BTreeSet::from([10, 11]));
        assert_eq!(directives.above[&node], BTreeSet::from([12]));
        assert!(directives.contains(12));
        assert!(!directives.contains(13));
        assert_eq!(directives.positions(), BTreeSet::from([10, 11, 12]));
    }
}
