//! Walks through the library on small example trees and prints what each
//! algorithm reports. Set `RUST_LOG=trace` to see the BST engine's decisions.

use bintree::construction::{build_bst_from_sorted_array, serialize};
use bintree::parse::tree_to_string;
use bintree::{paths, properties, traversal, validation, Node, Tree};

fn main() -> Result<(), bintree::Error> {
    pretty_env_logger::init();

    println!("Binary Tree Library Demo\n");

    println!("1. Creating a Binary Search Tree:");
    let values = [5, 3, 7, 1, 9, 4, 6];
    let mut bst: Tree<i32> = values.into_iter().collect();
    println!("   Inserted values: {values:?}");
    println!("   Inorder traversal (sorted): {:?}", bst.inorder_traversal());
    println!("   Tree height: {}", bst.height());
    println!("   Tree size: {}", bst.size());
    bst.delete(&5);
    println!("   After deleting 5: {}", tree_to_string(bst.root()));
    println!();

    println!("2. Tree Traversal Examples:");
    let root = Node::new(1)
        .with_left(Node::new(2).with_left(Node::new(4)).with_right(Node::new(5)))
        .with_right(Node::new(3));
    let tree = Some(&root);
    println!("   Tree structure:");
    println!("       1");
    println!("      / \\");
    println!("     2   3");
    println!("    / \\");
    println!("   4   5");
    println!();
    println!("   Inorder: {:?}", traversal::inorder(tree));
    println!("   Preorder: {:?}", traversal::preorder(tree));
    println!("   Postorder: {:?}", traversal::postorder(tree));
    println!("   Level-order: {:?}", traversal::level_order(tree));
    println!();

    println!("3. Tree Properties:");
    println!("   Height: {}", properties::height(tree));
    println!("   Node count: {}", properties::count_nodes(tree));
    println!("   Leaf count: {}", properties::count_leaves(tree));
    println!("   Min value: {:?}", properties::find_min(tree));
    println!("   Max value: {:?}", properties::find_max(tree));
    println!("   Diameter: {}", properties::diameter(tree));
    println!();

    println!("4. Tree Validation:");
    println!("   Is balanced: {}", validation::is_balanced(tree));
    println!("   Is complete: {}", validation::is_complete(tree));
    println!("   Is symmetric: {}", validation::is_symmetric(tree));
    println!();

    println!("5. Path Finding:");
    println!("   All root-to-leaf paths: {:?}", paths::find_all_paths(tree));
    println!("   Max path sum: {:?}", paths::max_path_sum(tree));
    println!("   Distance 4 -> 3: {:?}", paths::find_distance(tree, &4, &3));
    println!();

    println!("6. Tree Construction:");
    let sorted = [1, 2, 3, 4, 5, 6, 7];
    let balanced = build_bst_from_sorted_array(&sorted);
    println!("   Built balanced BST from sorted array: {sorted:?}");
    println!("   As text: {}", tree_to_string(balanced.as_deref()));
    println!("   Serialized: {:?}", serialize(balanced.as_deref()));
    println!("   Is valid BST: {}", validation::is_valid_bst(balanced.as_deref()));
    let adopted = Tree::try_from_root(balanced)?;
    println!("   Adopted as a search tree of height {}", adopted.height());

    Ok(())
}
