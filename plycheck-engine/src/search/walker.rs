//! Explicit-stack tree walker shared by every search algorithm.
//!
//! Each frame on the stack is one interior node being searched. The walker
//! picks the next child of the top frame, asks the frame's algorithm for the
//! child's window, and either pushes a frame for the child or hands its static
//! score straight back. When a frame finishes, its value is handed to the frame
//! below it, until the stack is empty.

use crate::coretypes::{Player, Score};
use crate::search::{alpha_beta, minimax, negamax, negascout, Algorithm};
use crate::tree::Node;

/// Counters collected while walking.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub(crate) struct Stats {
    /// Nodes entered, counting each re-search visit again.
    pub nodes: u64,
    /// Frames that stopped early because their score reached beta.
    pub cutoffs: u64,
    /// Children searched a second time with a widened window.
    pub researches: u64,
}

/// Outcome of giving a frame the score of one of its children.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(super) enum Flow {
    /// Search the child under the cursor next.
    Continue,
    /// The frame is finished and has this value.
    Done(Score),
}

/// One interior node under search.
#[derive(Debug, Clone)]
pub(super) struct Frame<'t> {
    pub node: &'t Node,
    /// Plies remaining below this node, at least 1.
    pub plies: u32,
    /// Player to move at this node.
    pub player: Player,
    pub alpha: Score,
    pub beta: Score,
    /// Upper bound of the window handed to the next child, for null-window probes.
    pub scout: Score,
    /// Best value found so far. Starts at the algorithm's neutral value.
    pub best: Score,
    /// Index of the child being searched.
    pub cursor: usize,
    /// Null-window score of the child under the cursor while it is re-searched.
    pub probe: Option<Score>,
}

impl<'t> Frame<'t> {
    fn new(node: &'t Node, plies: u32, player: Player, alpha: Score, beta: Score) -> Self {
        Self {
            node,
            plies,
            player,
            alpha,
            beta,
            scout: beta,
            best: Score::MIN,
            cursor: 0,
            probe: None,
        }
    }

    /// Move the cursor to the next child, finishing the frame after the last.
    pub fn advance(&mut self) -> Flow {
        self.cursor += 1;
        match self.cursor < self.node.children.len() {
            true => Flow::Continue,
            false => Flow::Done(self.best),
        }
    }
}

/// Walks subtrees for one algorithm, accumulating statistics across calls.
pub(crate) struct Walker<'t> {
    algorithm: Algorithm,
    stats: Stats,
    trace: Option<Vec<&'t Node>>,
}

impl<'t> Walker<'t> {
    pub fn new(algorithm: Algorithm, trace: bool) -> Self {
        Self {
            algorithm,
            stats: Stats::default(),
            trace: trace.then(Vec::new),
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Every node entered so far, in visit order. Empty unless tracing.
    pub fn into_trace(self) -> Vec<&'t Node> {
        self.trace.unwrap_or_default()
    }

    /// Record a visit to a node.
    pub fn enter(&mut self, node: &'t Node) {
        self.stats.nodes += 1;
        if let Some(trace) = self.trace.as_mut() {
            trace.push(node);
        }
    }

    /// Static score of a node that is not searched further, or None if it has
    /// children left to search.
    pub fn terminal(&self, node: &Node, plies: u32, player: Player) -> Option<Score> {
        (plies == 0 || node.is_leaf()).then(|| match self.algorithm {
            Algorithm::Minimax => Score::from(node.value),
            _ => Score::from(node.value) * player.sign(),
        })
    }

    /// Value of `node` with `plies` remaining and `player` to move, searched
    /// inside the window `(alpha, beta)`. The node itself is entered here.
    ///
    /// Minimax values are absolute, White maxing. All other values are relative
    /// to `player`.
    pub fn evaluate(
        &mut self,
        node: &'t Node,
        plies: u32,
        player: Player,
        alpha: Score,
        beta: Score,
    ) -> Score {
        self.enter(node);
        if let Some(score) = self.terminal(node, plies, player) {
            return score;
        }

        let mut stack = vec![self.open(Frame::new(node, plies, player, alpha, beta))];

        loop {
            let (child, plies, player, alpha, beta) = match stack.last() {
                Some(frame) => {
                    let parent: &'t Node = frame.node;
                    let (alpha, beta) = self.window(frame);
                    (
                        &parent.children[frame.cursor],
                        frame.plies - 1,
                        !frame.player,
                        alpha,
                        beta,
                    )
                }
                None => unreachable!("walker stack emptied without returning"),
            };

            self.enter(child);
            let mut returned = match self.terminal(child, plies, player) {
                Some(score) => score,
                None => {
                    stack.push(self.open(Frame::new(child, plies, player, alpha, beta)));
                    continue;
                }
            };

            // Hand the value down the stack until some frame wants another child.
            while let Some(frame) = stack.last_mut() {
                let score = match self.algorithm {
                    Algorithm::Minimax => returned,
                    _ => -returned,
                };
                match self.absorb(frame, score) {
                    Flow::Continue => break,
                    Flow::Done(value) => {
                        stack.pop();
                        if stack.is_empty() {
                            return value;
                        }
                        returned = value;
                    }
                }
            }
        }
    }

    fn open(&self, frame: Frame<'t>) -> Frame<'t> {
        match self.algorithm {
            Algorithm::Minimax => minimax::open(frame),
            Algorithm::Negamax => negamax::open(frame),
            Algorithm::AlphaBeta => alpha_beta::open(frame),
            Algorithm::NegaScout => negascout::open(frame),
        }
    }

    fn window(&self, frame: &Frame<'t>) -> (Score, Score) {
        match self.algorithm {
            Algorithm::Minimax => minimax::window(frame),
            Algorithm::Negamax => negamax::window(frame),
            Algorithm::AlphaBeta => alpha_beta::window(frame),
            Algorithm::NegaScout => negascout::window(frame),
        }
    }

    fn absorb(&mut self, frame: &mut Frame<'t>, score: Score) -> Flow {
        match self.algorithm {
            Algorithm::Minimax => minimax::absorb(frame, score),
            Algorithm::Negamax => negamax::absorb(frame, score),
            Algorithm::AlphaBeta => alpha_beta::absorb(frame, score, &mut self.stats),
            Algorithm::NegaScout => negascout::absorb(frame, score, &mut self.stats),
        }
    }
}
