//! Negamax implementation of Minimax.

use std::cmp;

use crate::coretypes::{Depth, Player, Score};
use crate::search::walker::{Flow, Frame};
use crate::search::{search, Algorithm, SearchResult};
use crate::tree::Node;

/// Negamax search of a tree without pruning.
/// The player to move at a node is always treated as the maxing player,
/// so the score of every child is negated before it is compared.
pub fn negamax(tree: &Node, player: Player, depth: Depth) -> SearchResult {
    search(tree, player, depth, Algorithm::Negamax)
}

pub(super) fn open(mut frame: Frame) -> Frame {
    frame.best = Score::MIN;
    frame
}

/// The window is passed along unchanged and never used to cut.
pub(super) fn window(frame: &Frame) -> (Score, Score) {
    (-frame.beta, -frame.alpha)
}

pub(super) fn absorb(frame: &mut Frame, score: Score) -> Flow {
    frame.best = cmp::max(frame.best, score);
    frame.advance()
}
