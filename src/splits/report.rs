use std::io::{self, Write};

use crate::mat::Tree;
use crate::splits::converge::RunSummary;

pub const REPORT_HEADER: &str = "round\tposition\tstatistic\tnode\tdirection\tmasked";

/// Writes one line per scanned position per round, strongest splits first
/// within each round.
pub fn write_report<W: Write>(tree: &Tree, summary: &RunSummary, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{REPORT_HEADER}")?;
    for round in &summary.rounds {
        let mut decisions: Vec<_> = round.decisions.iter().collect();
        decisions.sort_by(|a, b| {
            b.statistic
                .total_cmp(&a.statistic)
                .then(a.position.cmp(&b.position))
        });

        for d in decisions {
            let node = tree.node(d.node).map_or("", |n| n.id());
            writeln!(
                writer,
                "{}\t{}\t{:.4}\t{}\t{}\t{}",
                round.round,
                d.position,
                d.statistic,
                node,
                d.direction,
                round.directives.contains(d.position)
            )?;
        }
    }
    writer.flush()
}
