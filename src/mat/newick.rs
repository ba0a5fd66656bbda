//! Newick topology of a MAT.
//!
//! Reading goes through `phylotree`; this module only maps its nodes onto the
//! arena in pre-order and names unlabelled nodes `node_<k>`. Branch lengths in
//! the input are ignored, since the tree derives them from mutation counts.
//!
//! Both the mapping and the writer are iterative. MAT trees routinely contain
//! ladders deep enough to overflow a thread stack with recursive printing.

use std::collections::HashSet;
use std::fmt::Write;

use phylotree::tree::Tree as PhyloTree;

use crate::error::MatError;
use crate::mat::tree::{NodeIdx, Tree};

/// Parses a Newick string into a tree without mutations.
pub fn parse(newick: &str) -> Result<Tree, MatError> {
    let phylo = PhyloTree::from_newick(newick).map_err(MatError::newick)?;
    let root = phylo.get_root().map_err(MatError::newick)?;

    // (name, index of the parent entry), parents always before children
    let mut entries: Vec<(Option<String>, Option<usize>)> =
        Vec::with_capacity(phylo.size());
    let mut stack = vec![(root, None)];
    while let Some((id, parent)) = stack.pop() {
        let node = phylo.get(&id).map_err(MatError::newick)?;
        let idx = entries.len();
        entries.push((node.name.clone(), parent));
        stack.extend(node.children.iter().rev().map(|&child| (child, Some(idx))));
    }

    Tree::from_preorder(assign_internal_names(entries))
}

fn assign_internal_names(
    entries: Vec<(Option<String>, Option<usize>)>,
) -> Vec<(String, Option<usize>)> {
    let taken: HashSet<String> = entries
        .iter()
        .filter_map(|(name, _)| name.clone())
        .collect();
    let mut counter = 0usize;
    entries
        .into_iter()
        .map(|(name, parent)| {
            let name = match name {
                Some(name) if !name.is_empty() => name,
                _ => loop {
                    counter += 1;
                    let candidate = format!("node_{counter}");
                    if !taken.contains(&candidate) {
                        break candidate;
                    }
                },
            };
            (name, parent)
        })
        .collect()
}

/// Writes the tree with every node label and, below the root, branch
/// lengths equal to the mutation count.
pub fn write(tree: &Tree) -> String {
    let mut out = String::new();
    // (node, index of the next child to emit)
    let mut stack: Vec<(NodeIdx, usize)> = vec![(tree.root(), 0)];

    while let Some((idx, next_child)) = stack.pop() {
        let node = &tree[idx];
        if next_child < node.children().len() {
            out.push(if next_child == 0 { '(' } else { ',' });
            stack.push((idx, next_child + 1));
            stack.push((node.children()[next_child], 0));
            continue;
        }
        if !node.is_leaf() {
            out.push(')');
        }
        out.push_str(node.id());
        if node.parent().is_some() {
            let _ = write!(out, ":{}", node.branch_length());
        }
    }
    out.push(';');
    out
}
