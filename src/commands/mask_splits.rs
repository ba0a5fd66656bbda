use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

use crate::mat::MatTree;
use crate::splits::{write_report, MaskingOptions, SplitMasker};
use crate::utils::progress_bar_builder::{ProgressBarBuilder, PHASE_TEMPLATE, SCAN_TEMPLATE};

pub fn run(
    options: MaskingOptions,
    input_tree: &Path,
    output_tree: &Path,
    report: Option<&Path>,
) -> Result<()> {
    options.validate()?;
    info!(?options, "Masking splits");

    let progress = ProgressBarBuilder::new(format!("Loading {}", input_tree.display()))
        .with_template(PHASE_TEMPLATE)
        .with_tick()
        .build()?;
    let mut mat = MatTree::load(input_tree)
        .with_context(|| format!("Failed to load tree from {}", input_tree.display()))?;
    progress.finish_with_message(format!(
        "Loaded {} nodes, {} mutations",
        mat.tree.len(),
        mat.tree.total_mutations()
    ));

    let progress = ProgressBarBuilder::new("Finding splits")
        .with_template(SCAN_TEMPLATE)
        .with_length(0)
        .build()?;
    let summary = SplitMasker::new(options).run(&mut mat.tree, &progress)?;
    progress.finish_with_message(format!(
        "{} rounds, {} mutations masked",
        summary.rounds.len(),
        summary.mutations_removed()
    ));

    if let Some(path) = report {
        let file = File::create(path)
            .with_context(|| format!("Failed to create report {}", path.display()))?;
        write_report(&mat.tree, &summary, BufWriter::new(file))
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        info!(path = %path.display(), "Wrote split report");
    }

    let progress = ProgressBarBuilder::new(format!("Saving {}", output_tree.display()))
        .with_template(PHASE_TEMPLATE)
        .with_tick()
        .build()?;
    mat.save(output_tree)
        .with_context(|| format!("Failed to save tree to {}", output_tree.display()))?;
    progress.finish_with_message(format!("Saved {}", output_tree.display()));

    info!(
        rounds = summary.rounds.len(),
        removed = summary.mutations_removed(),
        stopped_early = summary.stopped_early,
        "Done"
    );
    Ok(())
}
