use bintree::construction::{
    build_bst_from_sorted_array, build_tree_from_inorder_postorder,
    build_tree_from_preorder_inorder, deserialize, serialize,
};
use bintree::parse::{build_tree_from_string, tree_to_string};
use bintree::{paths, properties, traversal, validation};

use quickcheck_macros::quickcheck;

use crate::{relabel, ArbTree};

#[quickcheck]
fn serialize_roundtrip(tree: ArbTree) -> bool {
    let root = tree.0.as_deref();

    match deserialize(&serialize(root)) {
        Ok(rebuilt) => properties::are_identical(rebuilt.as_deref(), root),
        Err(_) => false,
    }
}

#[quickcheck]
fn string_roundtrip(tree: ArbTree) -> bool {
    let root = tree.0.as_deref();
    let text = tree_to_string(root);

    match build_tree_from_string::<i8>(&text) {
        Ok(rebuilt) => properties::are_identical(rebuilt.as_deref(), root),
        Err(_) => false,
    }
}

#[quickcheck]
fn traversal_pairs_rebuild_the_tree(tree: ArbTree) -> bool {
    let labelled = relabel(&tree.0, &mut 0);
    let root = labelled.as_deref();
    let pre = traversal::preorder(root);
    let ino = traversal::inorder(root);
    let post = traversal::postorder(root);

    build_tree_from_preorder_inorder(&pre, &ino) == Ok(labelled.clone())
        && build_tree_from_inorder_postorder(&ino, &post) == Ok(labelled.clone())
}

#[quickcheck]
fn diameter_is_bounded_by_height(tree: ArbTree) -> bool {
    let root = tree.0.as_deref();
    let bound = 2 * (properties::height(root) + 1);

    (properties::diameter(root) as isize) <= bound
}

#[quickcheck]
fn counts_agree_with_traversals(tree: ArbTree) -> bool {
    let root = tree.0.as_deref();
    let n = properties::count_nodes(root);

    traversal::preorder(root).len() == n
        && traversal::postorder(root).len() == n
        && traversal::level_order(root).len() == n
        && traversal::inorder_iterative(root) == traversal::inorder(root)
        && paths::find_all_paths(root).len() == properties::count_leaves(root)
}

#[quickcheck]
fn sorted_array_builds_balanced_bst(mut xs: Vec<i8>) -> bool {
    xs.sort_unstable();
    xs.dedup();
    let root = build_bst_from_sorted_array(&xs);
    let root = root.as_deref();

    validation::is_valid_bst(root)
        && validation::is_balanced(root)
        && traversal::inorder(root) == xs
}

#[quickcheck]
fn every_tree_contains_its_subtrees(tree: ArbTree) -> bool {
    let root = tree.0.as_deref();

    let left = root.and_then(|node| node.left.as_deref());
    let right = root.and_then(|node| node.right.as_deref());
    validation::is_subtree(root, left) && validation::is_subtree(root, right)
}

#[quickcheck]
fn distance_to_self_is_zero(tree: ArbTree) -> bool {
    let root = tree.0.as_deref();

    traversal::preorder(root)
        .iter()
        .all(|x| paths::find_distance(root, x, x) == Some(0))
}
