//! Game tree reconstructed from a dump.
//!
//! A dump lists the tree in preorder with one node per line, the number of
//! leading dashes giving the depth of the node. A line is a child of the most
//! recent prior line with a strictly smaller depth.

use std::fmt::{self, Display};
use std::str::FromStr;

use log::{debug, warn};

use crate::coretypes::Value;
use crate::error::{self, ErrorKind};
use crate::line::{parse_lines, ParsedLine};

/// A node of a game tree. Every node exclusively owns its children.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Node {
    /// Heuristic value. Search only reads it at leaves and at the depth limit.
    pub value: Value,
    /// Move leading to this node from its parent. Empty at the root.
    pub move_: String,
    /// Children in dump order. Order decides tie-breaks and pruning.
    pub children: Vec<Node>,
}

impl Node {
    pub fn new<S: Into<String>>(value: Value, move_: S) -> Self {
        Self {
            value,
            move_: move_.into(),
            children: Vec::new(),
        }
    }

    /// Builder style append of a child.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append a leaf child and return a mutable reference to it.
    pub fn add_child<S: Into<String>>(&mut self, value: Value, move_: S) -> &mut Node {
        self.children.push(Node::new(value, move_));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the first child reached by the given move.
    pub fn child(&self, move_: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.move_ == move_)
    }

    /// Follow a path of child indices from this node.
    pub fn get(&self, path: &[usize]) -> Option<&Node> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    /// Number of edges on the longest path from this node to a leaf.
    pub fn height(&self) -> u32 {
        let mut max_height = 0;
        let mut stack = vec![(self, 0u32)];

        while let Some((node, height)) = stack.pop() {
            max_height = max_height.max(height);
            stack.extend(node.children.iter().map(|child| (child, height + 1)));
        }
        max_height
    }

    /// Total number of nodes in this tree, including this node.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of nodes on each level of the tree, starting with this node's level.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = Vec::new();
        let mut level: Vec<&Node> = vec![self];

        while !level.is_empty() {
            shape.push(level.len());
            level = level
                .iter()
                .flat_map(|node| node.children.iter())
                .collect();
        }
        shape
    }

    /// Leaves of this tree from left to right.
    pub fn leaves(&self) -> Vec<&Node> {
        self.iter().filter(|node| node.is_leaf()).collect()
    }

    /// Preorder iterator over this tree, parents before children, children in order.
    pub fn iter(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }
}

impl From<&ParsedLine> for Node {
    fn from(line: &ParsedLine) -> Self {
        Node::new(line.value, line.move_.clone())
    }
}

/// Preorder traversal using an explicit stack.
pub struct Preorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Node;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = Preorder<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes the tree in dump form, one node per line, so that the output parses
/// back into an identical tree.
///
/// A root with a move needs a dashes token in front of its value, so such a
/// tree is written one level deeper.
impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let root_depth = usize::from(!self.move_.is_empty());
        let mut stack = vec![(self, root_depth)];

        while let Some((node, depth)) = stack.pop() {
            if depth > 0 {
                write!(f, "{} ", "-".repeat(depth))?;
            }
            write!(f, "{},", node.value)?;
            if !node.move_.is_empty() {
                write!(f, " {}", node.move_)?;
            }
            writeln!(f)?;
            stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        }
        Ok(())
    }
}

impl FromStr for Node {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let lines = parse_lines(s.lines())?;
        parse_tree(&lines)
    }
}

/// Build the subtree rooted at `lines[start]`.
///
/// Returns the subtree and the index of the first line that is not part of it,
/// which is `lines.len()` if the subtree runs to the end of input. A line
/// descends from the active subtree root whenever its depth is greater,
/// however much greater. A line with depth less than or equal to an open
/// subtree root's depth closes that subtree.
pub fn build(lines: &[ParsedLine], start: usize) -> error::Result<(Node, usize)> {
    let root_line = lines
        .get(start)
        .ok_or((ErrorKind::EmptyTree, format!("no line at index {}", start)))?;

    // Open subtrees from the root down to the most recent line, with their depths.
    let mut open: Vec<(usize, Node)> = vec![(root_line.depth, Node::from(root_line))];
    let mut index = start + 1;

    while let Some(line) = lines.get(index) {
        while open.len() > 1 && line.depth <= open[open.len() - 1].0 {
            close_subtree(&mut open);
        }
        if open.len() == 1 && line.depth <= open[0].0 {
            break;
        }
        open.push((line.depth, Node::from(line)));
        index += 1;
    }

    while open.len() > 1 {
        close_subtree(&mut open);
    }
    let (_, root) = open.pop().ok_or(ErrorKind::EmptyTree)?;
    Ok((root, index))
}

/// Pop the most recent open subtree and append it to its parent.
fn close_subtree(open: &mut Vec<(usize, Node)>) {
    if let Some((_, node)) = open.pop() {
        if let Some((_, parent)) = open.last_mut() {
            parent.children.push(node);
        }
    }
}

/// Build the tree rooted at the first line.
/// Lines following the end of the root subtree are ignored.
pub fn parse_tree(lines: &[ParsedLine]) -> error::Result<Node> {
    let (root, next) = build(lines, 0)?;
    if next < lines.len() {
        warn!(
            "ignoring {} dump lines after the root subtree ends at line index {}",
            lines.len() - next,
            next
        );
    }
    debug!("tree shape: {:?}", root.shape());
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(depths_values: &[(usize, Value, &str)]) -> Vec<ParsedLine> {
        depths_values
            .iter()
            .map(|&(depth, value, move_)| ParsedLine::new(depth, value, move_))
            .collect()
    }

    /// Root with `a2a4 -> {a7a5, a7a6}` and `a2a3 -> {a7a6, a7a5}`.
    fn two_by_two() -> Node {
        Node::new(0, "")
            .with_child(
                Node::new(10, "a2a4")
                    .with_child(Node::new(0, "a7a5"))
                    .with_child(Node::new(5, "a7a6")),
            )
            .with_child(
                Node::new(5, "a2a3")
                    .with_child(Node::new(0, "a7a6"))
                    .with_child(Node::new(-5, "a7a5")),
            )
    }

    #[test]
    fn single_line_is_leaf_root() {
        let (root, next) = build(&lines(&[(0, 7, "")]), 0).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.value, 7);
        assert_eq!(next, 1);
    }

    #[test]
    fn empty_is_error() {
        assert_eq!(build(&[], 0).unwrap_err().kind(), ErrorKind::EmptyTree);
        assert_eq!(
            build(&lines(&[(0, 1, "")]), 1).unwrap_err().kind(),
            ErrorKind::EmptyTree
        );
    }

    #[test]
    fn siblings_and_pop_outs() {
        let parsed = lines(&[
            (0, 0, ""),
            (1, 10, "a2a4"),
            (2, 0, "a7a5"),
            (2, 5, "a7a6"),
            (1, 5, "a2a3"),
            (2, 0, "a7a6"),
            (2, -5, "a7a5"),
        ]);
        let (root, next) = build(&parsed, 0).unwrap();
        assert_eq!(next, 7);
        assert_eq!(root, two_by_two());
    }

    #[test]
    fn subtree_build_returns_resume_index() {
        let parsed = lines(&[
            (0, 0, ""),
            (1, 10, "a2a4"),
            (2, 0, "a7a5"),
            (1, 5, "a2a3"),
        ]);
        let (subtree, next) = build(&parsed, 1).unwrap();
        assert_eq!(subtree.move_, "a2a4");
        assert_eq!(subtree.children.len(), 1);
        assert_eq!(next, 3);
    }

    #[test]
    fn depth_jumps_are_lenient() {
        // Depth 3 directly under depth 0 is still a child of the root,
        // and depth 2 closes the depth 3 subtree, becoming its sibling.
        let parsed = lines(&[(0, 0, ""), (3, 1, "x"), (5, 2, "y"), (2, 3, "z")]);
        let (root, _) = build(&parsed, 0).unwrap();
        assert_eq!(root.shape(), vec![1, 2, 1]);
        assert_eq!(root.get(&[0, 0]).unwrap().move_, "y");
        assert_eq!(root.get(&[1]).unwrap().move_, "z");
    }

    #[test]
    fn multi_level_pop_out() {
        let parsed = lines(&[
            (0, 0, ""),
            (1, 1, "a"),
            (2, 2, "b"),
            (3, 3, "c"),
            (1, 4, "d"),
        ]);
        let (root, _) = build(&parsed, 0).unwrap();
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.get(&[0, 0, 0]).unwrap().move_, "c");
        assert_eq!(root.get(&[1]).unwrap().move_, "d");
    }

    #[test]
    fn trailing_lines_after_root_are_ignored() {
        let parsed = lines(&[(1, 0, "r"), (2, 1, "a"), (1, 2, "s"), (2, 3, "b")]);
        let (root, next) = build(&parsed, 0).unwrap();
        assert_eq!(next, 2);
        assert_eq!(root.node_count(), 2);
        assert_eq!(parse_tree(&parsed).unwrap(), root);
    }

    #[test]
    fn queries() {
        let root = two_by_two();
        assert_eq!(root.height(), 2);
        assert_eq!(root.node_count(), 7);
        assert_eq!(root.shape(), vec![1, 2, 4]);
        let leaf_values: Vec<Value> = root.leaves().iter().map(|leaf| leaf.value).collect();
        assert_eq!(leaf_values, vec![0, 5, 0, -5]);
        let moves: Vec<&str> = root.iter().map(|node| node.move_.as_str()).collect();
        assert_eq!(moves, vec!["", "a2a4", "a7a5", "a7a6", "a2a3", "a7a6", "a7a5"]);
        assert_eq!(root.get(&[1, 1]).unwrap().value, -5);
        assert_eq!(root.get(&[2]), None);
        assert_eq!(root.child("a2a3").unwrap().value, 5);
        assert_eq!(Node::new(3, "").height(), 0);
    }

    #[test]
    fn display_is_dump() {
        let dump = two_by_two().to_string();
        assert_eq!(
            dump,
            "0,\n- 10, a2a4\n-- 0, a7a5\n-- 5, a7a6\n- 5, a2a3\n-- 0, a7a6\n-- -5, a7a5\n"
        );
        assert_eq!(dump.parse::<Node>().unwrap(), two_by_two());
    }

    #[test]
    fn named_root_display_parses_back() {
        let root = Node::new(0, "r").with_child(Node::new(1, "a").with_child(Node::new(-2, "b")));
        let dump = root.to_string();
        assert_eq!(dump, "- 0, r\n-- 1, a\n--- -2, b\n");
        assert_eq!(dump.parse::<Node>().unwrap(), root);

        let parsed = lines(&[(1, 0, "r"), (2, 1, "a"), (1, 2, "s")]);
        let kept = parse_tree(&parsed).unwrap();
        assert_eq!(kept.to_string().parse::<Node>().unwrap(), kept);
    }

    #[test]
    fn add_child_returns_child() {
        let mut root = Node::new(0, "");
        root.add_child(1, "a").add_child(2, "b");
        root.add_child(3, "c");
        assert_eq!(root.shape(), vec![1, 2, 1]);
        assert_eq!(root.get(&[0, 0]).unwrap().value, 2);
    }
}
