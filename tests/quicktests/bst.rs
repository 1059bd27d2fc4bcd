use bintree::{properties, validation, Tree};

use std::collections::HashSet;

use quickcheck_macros::quickcheck;

fn tree_of(xs: &[i8]) -> Tree<i8> {
    xs.iter().copied().collect()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    for delete in &deletes {
        let size = tree.size();
        let removed = tree.delete(delete);
        // Size shrinks by exactly one when something was there.
        if tree.size() + usize::from(removed) != size {
            return false;
        }
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.search(x))
        && still_present.iter().all(|x| tree.search(x))
        && validation::is_valid_bst(tree.root())
}

#[quickcheck]
fn inorder_is_ascending(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    tree.inorder_traversal().windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn size_counts_distinct_values(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let distinct: HashSet<_> = xs.iter().collect();

    tree.size() == distinct.len() && tree.size() == properties::count_nodes(tree.root())
}

#[quickcheck]
fn full_scan_extremes_match_inorder(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let sorted = tree.inorder_traversal();

    properties::find_min(tree.root()) == sorted.first()
        && properties::find_max(tree.root()) == sorted.last()
}

#[quickcheck]
fn height_agrees_with_free_function(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    tree.height() == properties::height(tree.root())
}
