//! Random game trees and records, for benches and cross-algorithm tests.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::coretypes::{Player, Value};
use crate::tree::Node;

/// Range of values given to generated nodes.
pub const VALUE_RANGE: std::ops::RangeInclusive<Value> = -1000..=1000;

/// Generate a random tree no taller than `height`.
///
/// The root has between 1 and `max_branching` children when `height > 0`.
/// Every other interior node has between 0 and `max_branching` children, so
/// some branches end early. Moves are unique among siblings.
pub fn random_tree<R: Rng + ?Sized>(rng: &mut R, height: u32, max_branching: usize) -> Node {
    let mut root = Node::new(rng.gen_range(VALUE_RANGE), "");
    if height == 0 || max_branching == 0 {
        return root;
    }

    let mut stack: Vec<(&mut Node, u32)> = vec![(&mut root, 0)];
    while let Some((node, depth)) = stack.pop() {
        if depth == height {
            continue;
        }
        let min_children = if depth == 0 { 1 } else { 0 };
        let num_children = rng.gen_range(min_children..=max_branching);
        node.children = (0..num_children)
            .map(|index| {
                let move_ = format!("d{}n{}", depth + 1, index);
                Node::new(rng.gen_range(VALUE_RANGE), move_)
            })
            .collect();
        stack.extend(node.children.iter_mut().map(|child| (child, depth + 1)));
    }
    root
}

/// Generate a complete tree where every interior node has exactly `branching` children.
pub fn uniform_tree<R: Rng + ?Sized>(rng: &mut R, height: u32, branching: usize) -> Node {
    let mut root = Node::new(rng.gen_range(VALUE_RANGE), "");
    let mut stack: Vec<(&mut Node, u32)> = vec![(&mut root, 0)];

    while let Some((node, depth)) = stack.pop() {
        if depth == height {
            continue;
        }
        node.children = (0..branching)
            .map(|index| Node::new(rng.gen_range(VALUE_RANGE), format!("d{}n{}", depth + 1, index)))
            .collect();
        stack.extend(node.children.iter_mut().map(|child| (child, depth + 1)));
    }
    root
}

/// Replace every value of a tree with a distinct value, in random order.
/// No two subtrees can then propagate the same score.
pub fn distinct_values<R: Rng + ?Sized>(rng: &mut R, tree: &mut Node) {
    let count = tree.node_count() as Value;
    let mut values: Vec<Value> = (0..count).map(|value| value * 2 - count).collect();
    values.shuffle(rng);

    let mut stack = vec![tree];
    while let Some(node) = stack.pop() {
        node.value = values.pop().unwrap_or_default();
        stack.extend(node.children.iter_mut());
    }
}

/// Write a full record for `tree`: side line, dump lines and an oracle line if given.
pub fn record(player: Player, tree: &Node, oracle: Option<&str>) -> String {
    let mut record = format!("{}\n{}", player, tree);
    if let Some(oracle) = oracle {
        record.push_str(&format!("Best move: {}\n", oracle));
    }
    record
}
