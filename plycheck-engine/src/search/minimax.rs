//! Minimax implementation.

use std::cmp;

use crate::coretypes::{Depth, Player, Score};
use crate::search::walker::{Flow, Frame};
use crate::search::{search, Algorithm, SearchResult};
use crate::tree::Node;

/// Minimax search of a tree. White maxes and Black mins absolute values,
/// alternating every ply. No pruning is done, every node within depth is visited.
///
/// The score of the result is relative to `player`, like every other search.
pub fn minimax(tree: &Node, player: Player, depth: Depth) -> SearchResult {
    search(tree, player, depth, Algorithm::Minimax)
}

/// A maxing frame starts from the lowest score and a minning frame from the highest.
pub(super) fn open(mut frame: Frame) -> Frame {
    frame.best = match frame.player {
        Player::White => Score::MIN,
        Player::Black => Score::MAX,
    };
    frame
}

/// Minimax cannot prune any of its children directly because only one of
/// Alpha and Beta could be updated from a node's children, so the window is
/// never narrowed.
pub(super) fn window(_frame: &Frame) -> (Score, Score) {
    (Score::MIN, Score::MAX)
}

/// Child scores are absolute and are not negated.
pub(super) fn absorb(frame: &mut Frame, score: Score) -> Flow {
    frame.best = match frame.player {
        Player::White => cmp::max(frame.best, score),
        Player::Black => cmp::min(frame.best, score),
    };
    frame.advance()
}
