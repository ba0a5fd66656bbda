use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use tracing::info;

use crate::mat::MatTree;
use crate::ratio::{
    derive_threshold, detect_changepoints, mutation_tip_ratios, write_changepoints,
    write_prune_list,
};
use crate::utils::progress_bar_builder::{ProgressBarBuilder, PHASE_TEMPLATE};

pub fn run(input_tree: &Path, threshold: f64, prune_list: &Path) -> Result<()> {
    let progress = ProgressBarBuilder::new(format!("Loading {}", input_tree.display()))
        .with_template(PHASE_TEMPLATE)
        .with_tick()
        .build()?;
    let mat = MatTree::load(input_tree)
        .with_context(|| format!("Failed to load tree from {}", input_tree.display()))?;
    progress.finish_and_clear();

    let tree = &mat.tree;
    let ratios = mutation_tip_ratios(tree);
    let threshold = if threshold == 0.0 {
        let derived = derive_threshold(&ratios);
        info!(threshold = derived, "Derived threshold as mean + 2 * sd");
        derived
    } else {
        threshold
    };

    let changepoints = detect_changepoints(tree, &ratios, threshold);
    write_changepoints(tree, &changepoints, io::stdout().lock())?;

    let file = File::create(prune_list)
        .with_context(|| format!("Failed to create prune list {}", prune_list.display()))?;
    let written = write_prune_list(tree, &changepoints, BufWriter::new(file))
        .with_context(|| format!("Failed to write prune list {}", prune_list.display()))?;

    info!(
        changepoints = changepoints.len(),
        samples = written,
        path = %prune_list.display(),
        "Wrote prune list"
    );
    Ok(())
}
