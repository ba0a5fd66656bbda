use indicatif::ProgressBar;
use std::collections::BTreeSet;
use tempfile::tempdir;

use spectrum_splits::mat::{newick, MatTree, Mutation, Tree};
use spectrum_splits::splits::{Direction, MaskingOptions, PositionIndex, SplitMasker};

fn muts(names: &[&str]) -> Vec<Mutation> {
    names.iter().map(|n| n.parse().unwrap()).collect()
}

fn set(tree: &mut Tree, id: &str, names: &[&str]) {
    let idx = tree.find(id).unwrap();
    tree.node_mut(idx).unwrap().set_mutations(muts(names));
}

/// R(1, 2) -> A(10 x5, 20) -> B(20 x5)
fn chain() -> Tree {
    let mut tree = newick::parse("((B)A)R;").unwrap();
    set(&mut tree, "R", &["A1G", "A2G"]);
    set(&mut tree, "A", &["A10G", "A10C", "A10T", "A10G", "A10C", "C20T"]);
    set(&mut tree, "B", &["C20T", "C20G", "C20A", "C20T", "C20G"]);
    tree
}

fn positions_in_subtree(tree: &Tree, id: &str) -> BTreeSet<u32> {
    tree.preorder_from(tree.find(id).unwrap())
        .into_iter()
        .flat_map(|idx| tree[idx].mutations().iter().filter_map(|m| m.position()))
        .collect()
}

#[test]
fn test_chain_masks_both_clustered_positions() {
    let mut tree = chain();
    let options = MaskingOptions::new(1, 1, 0.5, 4);

    let summary = SplitMasker::new(options).run(&mut tree, &ProgressBar::hidden()).unwrap();

    let first = &summary.rounds[0];
    let b = tree.find("B").unwrap();
    let p20 = first.decisions.iter().find(|d| d.position == 20).unwrap();
    assert_eq!((p20.node, p20.direction), (b, Direction::Below));
    assert!((p20.statistic - 6.285_267_857_1).abs() < 1e-6);

    // Position 10 never occurs under B, so B against the rest is its
    // strongest contrast.
    let p10 = first.decisions.iter().find(|d| d.position == 10).unwrap();
    assert_eq!((p10.node, p10.direction), (b, Direction::Above));
    assert!((p10.statistic - 2.780_781_25).abs() < 1e-6);

    assert!(!positions_in_subtree(&tree, "A").contains(&10));
    assert!(!positions_in_subtree(&tree, "B").contains(&20));

    // Round 2 rechecks position 20 alone (one copy left on A) and finds no
    // eligible split.
    assert_eq!(summary.rounds.len(), 2);
    assert_eq!(summary.rounds[1].decisions.len(), 1);
    assert_eq!(summary.rounds[1].decisions[0].statistic, 0.0);
    assert!(summary.rounds[1].masked.is_none());
    assert_eq!(summary.mutations_removed(), 12);

    let a = tree.find("A").unwrap();
    assert_eq!(tree[a].mutations(), muts(&["C20T"]).as_slice());
    assert_eq!(tree[a].branch_length(), 1.0);
}

#[test]
fn test_uniform_position_is_never_masked() {
    let mut tree = newick::parse("((b)a,c)R;").unwrap();
    set(&mut tree, "R", &["A7G", "A100G"]);
    set(&mut tree, "a", &["A7G", "A101G"]);
    set(&mut tree, "b", &["A7G", "A102G"]);
    set(&mut tree, "c", &["A7G", "A103G"]);

    for mask_chi in [1e-6, 0.5, 100.0] {
        let mut tree = tree.clone();
        let summary = SplitMasker::new(MaskingOptions::new(1, 1, mask_chi, 2))
            .run(&mut tree, &ProgressBar::hidden())
            .unwrap();
        for round in &summary.rounds {
            assert!(!round.directives.contains(7));
        }
        assert_eq!(PositionIndex::build(&tree).count(7), 4);
    }
}

#[test]
fn test_rounds_bounded_by_masked_positions() {
    // A caterpillar where every clade carries its own position.
    let mut tree = Tree::new("root");
    let mut parent = tree.root();
    for depth in 0..30u32 {
        let position = 100 + depth;
        let names: Vec<String> = (0..4).map(|_| format!("A{position}G")).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let spine = tree.add_child(parent, format!("s{depth}"), muts(&names)).unwrap();
        tree.add_child(parent, format!("l{depth}"), muts(&["A1G", "A2G", "A3G"])).unwrap();
        parent = spine;
    }

    let summary = SplitMasker::new(MaskingOptions::new(2, 2, 0.5, 8))
        .run(&mut tree, &ProgressBar::hidden())
        .unwrap();

    let ever_masked: BTreeSet<u32> = summary
        .rounds
        .iter()
        .flat_map(|r| r.directives.positions())
        .collect();
    assert!(summary.rounds.len() <= ever_masked.len() + 1);
    assert!(!summary.stopped_early);
}

#[test]
fn test_masked_tree_survives_save_and_reload() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.pb.gz");
    let output = dir.path().join("masked.pb");

    MatTree::new(chain()).save(&input).unwrap();
    let mut mat = MatTree::load(&input).unwrap();
    SplitMasker::new(MaskingOptions::new(1, 1, 0.5, 2))
        .run(&mut mat.tree, &ProgressBar::hidden())
        .unwrap();
    mat.save(&output).unwrap();

    let reloaded = MatTree::load(&output).unwrap();
    assert_eq!(
        PositionIndex::build(&reloaded.tree),
        PositionIndex::build(&mat.tree)
    );
    for (idx, node) in reloaded.tree.iter() {
        assert_eq!(node.id(), mat.tree[idx].id());
        assert_eq!(node.mutations(), mat.tree[idx].mutations());
    }
    assert!(!positions_in_subtree(&reloaded.tree, "B").contains(&20));
}
