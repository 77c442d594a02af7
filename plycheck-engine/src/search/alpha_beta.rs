//! Negamax wth Alpha-Beta pruning implementation.

use std::cmp;

use log::trace;

use crate::coretypes::{Depth, Player, Score};
use crate::search::walker::{Flow, Frame, Stats};
use crate::search::{search, Algorithm, SearchResult};
use crate::tree::Node;

/// Negamax search with alpha-beta pruning.
/// Returns the same best move and score as `negamax`, visiting fewer nodes.
///
/// Properties of Alpha-Beta pruning.
/// * Alpha is the best (greatest) guaranteed value for the player to move.
/// * Beta is the best (lowest) guaranteed value for the opposite player.
/// * Alpha and Beta are inherited from the parent as -Beta and -Alpha.
/// * When Alpha reaches Beta, the remaining children are not searched.
pub fn alpha_beta(tree: &Node, player: Player, depth: Depth) -> SearchResult {
    search(tree, player, depth, Algorithm::AlphaBeta)
}

pub(super) fn open(mut frame: Frame) -> Frame {
    frame.best = Score::MIN;
    frame
}

pub(super) fn window(frame: &Frame) -> (Score, Score) {
    (-frame.beta, -frame.alpha)
}

pub(super) fn absorb(frame: &mut Frame, score: Score, stats: &mut Stats) -> Flow {
    frame.best = cmp::max(frame.best, score);
    frame.alpha = cmp::max(frame.alpha, frame.best);

    if frame.alpha >= frame.beta {
        // Beta cutoff
        stats.cutoffs += 1;
        trace!(
            "cutoff at `{}` after {} of {} children, {} >= {}",
            frame.node.move_,
            frame.cursor + 1,
            frame.node.children.len(),
            frame.alpha,
            frame.beta
        );
        return Flow::Done(frame.best);
    }
    frame.advance()
}
