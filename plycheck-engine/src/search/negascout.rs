//! NegaScout, also known as Principal Variation Search.

use std::cmp;

use log::trace;

use crate::coretypes::{Depth, Player, Score};
use crate::search::walker::{Flow, Frame, Stats};
use crate::search::{search, Algorithm, SearchResult};
use crate::tree::Node;

/// NegaScout search. The first child of a node is searched with the node's full
/// window, every later child with the null window `(a, a + 1)` that only tells
/// whether it beats the best so far. A child that does beat it is searched
/// again with the window `(score, beta)` to learn its exact value.
///
/// Returns the same best move and score as `alpha_beta`, and visits fewer
/// distinct nodes when the best child of each node comes first.
pub fn negascout(tree: &Node, player: Player, depth: Depth) -> SearchResult {
    search(tree, player, depth, Algorithm::NegaScout)
}

/// `best` doubles as the running lower bound `a`, and `scout` as the bound `b`
/// handed to the next child.
pub(super) fn open(mut frame: Frame) -> Frame {
    frame.best = frame.alpha;
    frame.scout = frame.beta;
    frame
}

pub(super) fn window(frame: &Frame) -> (Score, Score) {
    match frame.probe {
        Some(probe) => (-frame.beta, -probe),
        None => (-frame.scout, -frame.best),
    }
}

pub(super) fn absorb(frame: &mut Frame, score: Score, stats: &mut Stats) -> Flow {
    match frame.probe.take() {
        Some(probe) => frame.best = cmp::max(score, probe),
        None if frame.cursor > 0 && frame.best < score && score < frame.beta => {
            stats.researches += 1;
            trace!(
                "re-search `{}` child {} in ({}, {})",
                frame.node.move_,
                frame.cursor,
                score,
                frame.beta
            );
            frame.probe = Some(score);
            return Flow::Continue;
        }
        None => frame.best = cmp::max(frame.best, score),
    }

    if frame.best >= frame.beta {
        stats.cutoffs += 1;
        return Flow::Done(frame.best);
    }
    frame.scout = frame.best + 1;
    frame.advance()
}
