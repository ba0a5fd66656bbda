use indicatif::ProgressBar;
use tracing::{info, warn};

use crate::error::ScanError;
use crate::mat::Tree;
use crate::splits::dispatch::{scan_positions, MaskDirectives};
use crate::splits::finder::SplitDecision;
use crate::splits::index::PositionIndex;
use crate::splits::masking::{apply_masks, MaskSummary};
use crate::splits::options::MaskingOptions;

/// Everything that happened in one scan-and-mask round.
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub round: usize,
    /// One decision per scanned position, in scan order.
    pub decisions: Vec<SplitDecision>,
    pub directives: MaskDirectives,
    /// `None` when nothing was masked and the run stopped.
    pub masked: Option<MaskSummary>,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    /// The minimum occurrence count used for every round.
    pub min_count: u64,
    pub rounds: Vec<RoundReport>,
    /// Set when `max_rounds` cut the run short.
    pub stopped_early: bool,
}

impl RunSummary {
    pub fn mutations_removed(&self) -> usize {
        self.rounds
            .iter()
            .filter_map(|r| r.masked.as_ref())
            .map(|m| m.mutations_removed)
            .sum()
    }
}

/// Repeatedly scans positions for splits and masks them until no masked
/// position produces a new split.
pub struct SplitMasker {
    options: MaskingOptions,
}

impl SplitMasker {
    pub fn new(options: MaskingOptions) -> Self {
        Self { options }
    }

    /// Runs rounds against `tree`, mutating it in place.
    ///
    /// Each round scans the current positions against an unchanging tree,
    /// then masks sequentially. Only positions masked in a round, and still
    /// frequent enough afterwards, are scanned again. A `mask_chi` of 0 scans
    /// once and masks nothing.
    pub fn run(&self, tree: &mut Tree, progress: &ProgressBar) -> Result<RunSummary, ScanError> {
        self.options.validate()?;
        let options = &self.options;

        let index = PositionIndex::build(tree);
        let min_count = options.min_count.resolve(&index);
        let mut positions = index.eligible(min_count);
        info!(
            positions = index.len(),
            eligible = positions.len(),
            min_count,
            "Counted mutation positions"
        );

        let mut summary = RunSummary {
            min_count,
            rounds: Vec::new(),
            stopped_early: false,
        };

        let mut round = 0;
        while !positions.is_empty() {
            if options.max_rounds > 0 && round >= options.max_rounds {
                warn!(
                    rounds = round,
                    remaining = positions.len(),
                    "Stopping at the round limit with positions left to recheck"
                );
                summary.stopped_early = true;
                break;
            }
            round += 1;

            info!(round, positions = positions.len(), "Finding splits");
            progress.set_message(format!(
                "Round {round}: scanning {} positions",
                positions.len()
            ));
            let decisions = scan_positions(
                tree,
                &positions,
                options.min_total,
                options.nthreads,
                progress,
            )?;

            let mut directives = MaskDirectives::default();
            if options.mask_chi > 0.0 {
                for decision in decisions.iter().filter(|d| d.exceeds(options.mask_chi)) {
                    directives.record(decision);
                }
            }

            if directives.is_empty() {
                info!(round, "No splits above the masking threshold");
                summary.rounds.push(RoundReport {
                    round,
                    decisions,
                    directives,
                    masked: None,
                });
                break;
            }

            info!(
                round,
                below = directives.below.len(),
                above = directives.above.len(),
                "Masking mutations"
            );
            let masked = apply_masks(tree, &directives);

            let index = PositionIndex::build(tree);
            positions = index
                .eligible(min_count)
                .into_iter()
                .filter(|(p, _)| masked.positions.contains(p))
                .collect();
            info!(
                round,
                removed = masked.mutations_removed,
                nodes = masked.nodes_rewritten,
                recheck = positions.len(),
                "Sites to recheck"
            );

            summary.rounds.push(RoundReport {
                round,
                decisions,
                directives,
                masked: Some(masked),
            });
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat::Mutation;
    use crate::splits::finder::Direction;

    fn muts(names: &[&str]) -> Vec<Mutation> {
        names.iter().map(|n| n.parse().unwrap()).collect()
    }

    fn hot_clade_tree() -> Tree {
        // Position 10 is confined to clade `hot`; everything else is noise.
        let mut tree = Tree::new("root");
        let root = tree.root();
        let hot = tree.add_child(root, "hot", muts(&["A10G", "A10G", "A1G"])).unwrap();
        tree.add_child(hot, "h1", muts(&["A10G", "A10G", "A2G"])).unwrap();
        tree.add_child(hot, "h2", muts(&["A10G", "A3G"])).unwrap();
        let cold = tree.add_child(root, "cold", muts(&["A4G", "A5G", "A6G"])).unwrap();
        tree.add_child(cold, "c1", muts(&["A7G", "A8G", "A9G"])).unwrap();
        tree.add_child(cold, "c2", muts(&["A11G", "A12G", "A13G", "A10G"])).unwrap();
        tree
    }

    #[test]
    fn test_zero_mask_chi_only_reports() {
        let mut tree = hot_clade_tree();
        let before = PositionIndex::build(&tree);
        let options = MaskingOptions::new(1, 1, 0.0, 4);

        let summary = SplitMasker::new(options).run(&mut tree, &ProgressBar::hidden()).unwrap();

        assert_eq!(summary.rounds.len(), 1);
        assert!(summary.rounds[0].masked.is_none());
        assert_eq!(summary.rounds[0].decisions.len(), before.len());
        assert_eq!(PositionIndex::build(&tree), before);
    }

    #[test]
    fn test_masks_clade_and_stops_when_count_drops() {
        let mut tree = hot_clade_tree();
        let options = MaskingOptions::new(1, 3, 0.5, 2);

        let summary = SplitMasker::new(options).run(&mut tree, &ProgressBar::hidden()).unwrap();

        // After masking, position 10 occurs once, below the minimum of 3.
        assert_eq!(summary.rounds.len(), 1);
        let first = &summary.rounds[0];
        assert_eq!(first.decisions.len(), 1);
        assert_eq!(first.decisions[0].position, 10);
        assert_eq!(first.decisions[0].node, tree.find("hot").unwrap());
        assert_eq!(first.decisions[0].direction, Direction::Below);
        assert!((first.decisions[0].statistic - 3.403_125).abs() < 1e-9);
        assert_eq!(summary.mutations_removed(), 5);
        assert!(!summary.stopped_early);

        for id in ["hot", "h1", "h2"] {
            let idx = tree.find(id).unwrap();
            assert!(tree[idx].mutations().iter().all(|m| m.position() != Some(10)));
        }
        assert_eq!(PositionIndex::build(&tree).count(10), 1);
    }

    #[test]
    fn test_threshold_above_best_statistic_masks_nothing() {
        let mut tree = hot_clade_tree();
        let before = PositionIndex::build(&tree);
        let options = MaskingOptions::new(1, 3, 3.5, 2);

        let summary = SplitMasker::new(options).run(&mut tree, &ProgressBar::hidden()).unwrap();

        assert_eq!(summary.rounds.len(), 1);
        assert!(summary.rounds[0].directives.is_empty());
        assert_eq!(PositionIndex::build(&tree), before);
    }

    #[test]
    fn test_round_limit_stops_early() {
        let mut tree = hot_clade_tree();
        let options = MaskingOptions::new(1, 1, 0.5, 2).with_max_rounds(1);

        let summary = SplitMasker::new(options).run(&mut tree, &ProgressBar::hidden()).unwrap();

        // Position 10 survives in `c2`, so there is still something to recheck.
        assert_eq!(summary.rounds.len(), 1);
        assert!(summary.rounds[0].masked.is_some());
        assert_eq!(summary.mutations_removed(), 10);
        assert!(summary.stopped_early);
    }

    #[test]
    fn test_nothing_eligible_runs_no_rounds() {
        let mut tree = hot_clade_tree();
        let options = MaskingOptions::new(1, 100, 0.5, 2);

        let summary = SplitMasker::new(options).run(&mut tree, &ProgressBar::hidden()).unwrap();

        assert!(summary.rounds.is_empty());
        assert_eq!(summary.min_count, 100);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let mut tree = hot_clade_tree();
        let options = MaskingOptions::new(1, 1, 0.5, 0);
        assert!(matches!(
            SplitMasker::new(options).run(&mut tree, &ProgressBar::hidden()),
            Err(ScanError::InvalidOption { name: "nthreads", .. })
        ));
    }
}
