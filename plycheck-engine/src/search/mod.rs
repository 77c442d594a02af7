//! Search functions.

mod alpha_beta;
mod minimax;
mod negamax;
mod negascout;
mod walker;

pub use alpha_beta::alpha_beta;
pub use minimax::minimax;
pub use negamax::negamax;
pub use negascout::negascout;

use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::debug;

use crate::coretypes::{Depth, Player, Score};
use crate::error::{self, ErrorKind};
use crate::tree::Node;
use walker::Walker;

/// The interchangeable search strategies. All of them agree on the best move
/// and score of any tree.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Algorithm {
    Minimax,
    Negamax,
    AlphaBeta,
    NegaScout,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Minimax,
        Algorithm::Negamax,
        Algorithm::AlphaBeta,
        Algorithm::NegaScout,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::Negamax => "negamax",
            Algorithm::AlphaBeta => "alpha-beta",
            Algorithm::NegaScout => "negascout",
        }
    }
}

impl FromStr for Algorithm {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "negamax" => Ok(Algorithm::Negamax),
            "alpha-beta" | "alphabeta" | "negamax-ab" => Ok(Algorithm::AlphaBeta),
            "negascout" | "pvs" => Ok(Algorithm::NegaScout),
            _ => Err((ErrorKind::UnknownAlgorithm, s).into()),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The results found from running a search on some root node.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SearchResult {
    /// Move of the root's best child. None when the root was not searched,
    /// because it is a leaf or the depth limit is 0.
    pub best_move: Option<String>,
    /// Score of making the best move, relative to `player`.
    pub score: Score,
    /// The player to move at the root.
    pub player: Player,
    /// Algorithm that produced this result.
    pub algorithm: Algorithm,
    /// Plies searched below the root, after resolving `Depth::Full`.
    pub depth: u32,
    /// Every root move with its exact score relative to `player`, in tree order.
    pub root_scores: Vec<(String, Score)>,
    /// Total number of nodes entered, including the root and re-search visits.
    pub nodes: u64,
    /// Number of nodes whose remaining children were cut off.
    pub cutoffs: u64,
    /// Number of children searched again after a failed null-window probe.
    pub researches: u64,
    /// Total time elapsed from the start to the end of a search.
    pub elapsed: Duration,
}

impl SearchResult {
    /// Score of the search relative to the root player.
    pub fn relative_score(&self) -> Score {
        self.score
    }

    /// Converts the score of the search into one that is absolute, with White as + and Black as -.
    pub fn absolute_score(&self) -> Score {
        self.score * self.player.sign()
    }

    /// Returns the player who is leading in the search of the root, or None if drawn.
    pub fn leading(&self) -> Option<Player> {
        match self.absolute_score().signum() {
            1 => Some(Player::White),
            -1 => Some(Player::Black),
            _ => None,
        }
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let best_move = self.best_move.as_deref().unwrap_or("(none)");
        let mut displayed = String::new();
        displayed.push_str("SearchResult {\n");
        displayed.push_str(&format!("    algorithm : {}\n", self.algorithm));
        displayed.push_str(&format!("    best_move : {}\n", best_move));
        displayed.push_str(&format!("    rel_score : {}\n", self.relative_score()));
        displayed.push_str(&format!("    abs_score : {}\n", self.absolute_score()));
        displayed.push_str(&format!("    player    : {}\n", self.player));
        displayed.push_str(&format!("    depth     : {}\n", self.depth));
        displayed.push_str(&format!("    nodes     : {}\n", self.nodes));
        displayed.push_str(&format!("    cutoffs   : {}\n", self.cutoffs));
        displayed.push_str(&format!("    researches: {}\n", self.researches));
        displayed.push_str(&format!(
            "    elapsed   : {}.{:03}s\n",
            self.elapsed.as_secs(),
            self.elapsed.subsec_millis()
        ));
        displayed.push_str("}\n");

        write!(f, "{displayed}")
    }
}

/// Plycheck Engine primary tree search function.
///
/// Searches `tree` with `player` to move at the root, to the given depth, and
/// returns the root's best move and its score. A root move only replaces the
/// best so far if its score is strictly greater, so ties go to the earliest
/// root move.
pub fn search(tree: &Node, player: Player, depth: Depth, algorithm: Algorithm) -> SearchResult {
    search_with(tree, player, depth, algorithm, false).0
}

/// Runs a search and returns every node it entered, in visit order.
/// Nodes re-searched by NegaScout appear once per visit.
pub fn trace(tree: &Node, player: Player, depth: Depth, algorithm: Algorithm) -> Vec<&Node> {
    search_with(tree, player, depth, algorithm, true).1
}

/// Root search shared by all algorithms.
///
/// Each root child is searched with the full window so that every root move
/// receives an exact score, for every algorithm.
fn search_with(
    tree: &Node,
    player: Player,
    depth: Depth,
    algorithm: Algorithm,
    tracing: bool,
) -> (SearchResult, Vec<&Node>) {
    let instant = Instant::now();
    let plies = depth.resolve(tree.height());
    let mut walker = Walker::new(algorithm, tracing);
    let mut best: Option<(usize, Score)> = None;
    let mut root_scores = Vec::with_capacity(tree.children.len());

    walker.enter(tree);
    let static_score = walker.terminal(tree, plies, player).map(|score| match algorithm {
        Algorithm::Minimax => score * player.sign(),
        _ => score,
    });

    if static_score.is_none() {
        for (index, child) in tree.children.iter().enumerate() {
            let value = walker.evaluate(child, plies - 1, !player, Score::MIN, Score::MAX);
            // Minimax values are absolute, negamax values belong to the child's player.
            let score = match algorithm {
                Algorithm::Minimax => value * player.sign(),
                _ => -value,
            };
            root_scores.push((child.move_.clone(), score));

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }
    }

    let (best_move, score) = match (best, static_score) {
        (Some((index, score)), _) => (Some(tree.children[index].move_.clone()), score),
        (None, Some(score)) => (None, score),
        (None, None) => unreachable!("searched root has at least one child"),
    };

    let stats = walker.stats();
    let result = SearchResult {
        best_move,
        score,
        player,
        algorithm,
        depth: plies,
        root_scores,
        nodes: stats.nodes,
        cutoffs: stats.cutoffs,
        researches: stats.researches,
        elapsed: instant.elapsed(),
    };
    debug!(
        "{} depth {}: best {:?} score {} nodes {} cutoffs {} researches {}",
        algorithm,
        plies,
        result.best_move,
        result.score,
        result.nodes,
        result.cutoffs,
        result.researches
    );
    for (move_, score) in &result.root_scores {
        debug!("    {} {}", move_, score);
    }

    (result, walker.into_trace())
}
