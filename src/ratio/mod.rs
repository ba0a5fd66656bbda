//! Mutation-to-tip ratio scan.
//!
//! Subtrees that carry far more mutations per sample than the rest of the tree
//! usually point at bad samples. Each node gets the ratio of mutations in its
//! subtree to leaves in its subtree; walking down from the root, the first node
//! on a path whose ratio reaches the threshold is reported together with its
//! leaves.

use std::io::{self, Write};

use crate::mat::{NodeIdx, Tree};

/// Per-node ratios, indexed by `NodeIdx`.
///
/// A leaf's ratio is its own mutation count; an internal node's ratio is the
/// mutations on it and below divided by the leaves below it.
pub fn mutation_tip_ratios(tree: &Tree) -> Vec<f64> {
    let mut tips = vec![0u64; tree.len()];
    let mut mutations = vec![0u64; tree.len()];
    let mut ratios = vec![0.0; tree.len()];

    for idx in tree.postorder() {
        let node = &tree[idx];
        let own = node.mutations().len() as u64;
        if node.is_leaf() {
            tips[idx.0] = 1;
            mutations[idx.0] = own;
        } else {
            tips[idx.0] = node.children().iter().map(|c| tips[c.0]).sum();
            mutations[idx.0] = own + node.children().iter().map(|c| mutations[c.0]).sum::<u64>();
        }
        ratios[idx.0] = if tips[idx.0] > 0 {
            mutations[idx.0] as f64 / tips[idx.0] as f64
        } else {
            f64::INFINITY
        };
    }

    ratios
}

/// `mean + 2 * standard deviation` over all ratios, using the population
/// standard deviation. Returns 0 for no ratios.
pub fn derive_threshold(ratios: &[f64]) -> f64 {
    if ratios.is_empty() {
        return 0.0;
    }
    let n = ratios.len() as f64;
    let mean = ratios.iter().sum::<f64>() / n;
    let variance = ratios.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    mean + 2.0 * variance.sqrt()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Changepoint {
    pub parent: NodeIdx,
    pub child: NodeIdx,
    pub ratio: f64,
}

/// Walks the tree from the root and flags every child whose ratio is at least
/// `threshold`. Flagged subtrees are not searched further. Changepoints come
/// back in pre-order.
pub fn detect_changepoints(tree: &Tree, ratios: &[f64], threshold: f64) -> Vec<Changepoint> {
    let mut found = Vec::new();
    let mut stack = vec![tree.root()];

    while let Some(parent) = stack.pop() {
        let mut descend = Vec::new();
        for &child in tree[parent].children() {
            let ratio = ratios[child.0];
            if ratio >= threshold {
                found.push(Changepoint {
                    parent,
                    child,
                    ratio,
                });
            } else {
                descend.push(child);
            }
        }
        stack.extend(descend.into_iter().rev());
    }

    // Flags are collected per parent; restore the order a depth-first walk
    // would have produced.
    let order = preorder_rank(tree);
    found.sort_by_key(|c| order[c.child.0]);
    found
}

fn preorder_rank(tree: &Tree) -> Vec<usize> {
    let mut rank = vec![0; tree.len()];
    for (i, idx) in tree.preorder().into_iter().enumerate() {
        rank[idx.0] = i;
    }
    rank
}

/// Writes the changepoint table: parent, child, comma-separated leaves under
/// the child and the child's ratio.
pub fn write_changepoints<W: Write>(
    tree: &Tree,
    changepoints: &[Changepoint],
    mut writer: W,
) -> io::Result<()> {
    writeln!(writer, "#Parent\tchild\ttips\tmutations:tips")?;
    for c in changepoints {
        let tips: Vec<_> = tree
            .leaves_under(c.child)
            .into_iter()
            .map(|leaf| tree[leaf].id())
            .collect();
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            tree[c.parent].id(),
            tree[c.child].id(),
            tips.join(","),
            c.ratio
        )?;
    }
    writer.flush()
}

/// Writes every leaf under every changepoint, one name per line.
pub fn write_prune_list<W: Write>(
    tree: &Tree,
    changepoints: &[Changepoint],
    mut writer: W,
) -> io::Result<usize> {
    let mut written = 0;
    for c in changepoints {
        for leaf in tree.leaves_under(c.child) {
            writeln!(writer, "{}", tree[leaf].id())?;
            written += 1;
        }
    }
    writer.flush()?;
    Ok(written)
}
