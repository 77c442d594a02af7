//! Comparison of a search against the oracle answer of a dump record.
//!
//! A record is the text written by the engine under test:
//!
//! ```text
//! white
//! 0,
//! - 10, a2a4
//! -- 0, a7a5
//! ...
//! Best move: a2a4
//! ```
//!
//! The optional first line names the side to move, the optional last line ends
//! with the move the engine chose, and every line between is a dump line.

use std::fmt::{self, Display};

use log::debug;

use crate::coretypes::{Depth, Player};
use crate::error::{self, ErrorKind};
use crate::line::{is_tree_line, parse_line_at, ParsedLine};
use crate::search::{search, Algorithm, SearchResult};
use crate::tree::{parse_tree, Node};

/// A record split into side, dump lines and oracle move.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Record {
    /// Side to move at the root. White when the record has no side line.
    pub player: Player,
    /// Dump lines in input order.
    pub lines: Vec<ParsedLine>,
    /// Best move claimed by the oracle, if the record has an oracle line.
    pub oracle: Option<String>,
}

impl Record {
    /// Split a record into its parts.
    ///
    /// The first line is a side line unless it parses as a dump line. The last
    /// remaining line is an oracle line unless it parses as a dump line, and only
    /// its last whitespace separated token is kept. Blank lines are skipped.
    pub fn parse(input: &str) -> error::Result<Self> {
        let mut raw: Vec<(usize, &str)> = input
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();

        let player = match raw.first() {
            Some(&(_, first)) if !is_tree_line(first) => {
                raw.remove(0);
                Player::from_side_line(first)
            }
            _ => Player::White,
        };

        let oracle = match raw.last() {
            Some(&(_, last)) if !is_tree_line(last) => {
                raw.pop();
                last.split_whitespace().last().map(str::to_string)
            }
            _ => None,
        };

        if raw.is_empty() {
            return Err(ErrorKind::EmptyRecord.into());
        }
        let lines = raw
            .into_iter()
            .map(|(line_no, line)| parse_line_at(line_no, line))
            .collect::<error::Result<Vec<_>>>()?;

        debug!(
            "record: {} to move, {} dump lines, oracle {:?}",
            player,
            lines.len(),
            oracle
        );
        Ok(Self {
            player,
            lines,
            oracle,
        })
    }

    /// Reconstruct the tree of the record.
    pub fn tree(&self) -> error::Result<Node> {
        parse_tree(&self.lines)
    }

    /// Search `tree` and compare the best move found against the oracle.
    pub fn check(&self, tree: &Node, depth: Depth, algorithm: Algorithm) -> Comparison {
        let result = search(tree, self.player, depth, algorithm);
        let verdict = match (&self.oracle, &result.best_move) {
            (None, _) => Verdict::Unverified,
            (Some(oracle), Some(best_move)) if oracle == best_move => Verdict::Agree,
            (Some(_), _) => Verdict::Disagree,
        };

        Comparison {
            verdict,
            oracle: self.oracle.clone(),
            result,
        }
    }
}

/// Outcome of comparing a search against the oracle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Verdict {
    /// The search found exactly the oracle's move.
    Agree,
    /// The search found another move, or none at all.
    Disagree,
    /// The record carries no oracle move to compare against.
    Unverified,
}

/// A verdict with both moves kept for diagnostics.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Comparison {
    pub verdict: Verdict,
    pub oracle: Option<String>,
    pub result: SearchResult,
}

impl Comparison {
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Agree
    }

    /// Process exit code for this comparison, 0 on agreement and 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self.passed() {
            true => 0,
            false => 1,
        }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let found = self.result.best_move.as_deref().unwrap_or("(none)");
        let algorithm = self.result.algorithm;

        match (self.verdict, self.oracle.as_deref()) {
            (Verdict::Agree, _) => {
                writeln!(f, "{algorithm} and oracle agree that the best move is {found}")
            }
            (_, Some(oracle)) => {
                writeln!(f, "{algorithm} thinks the best move is {found}")?;
                writeln!(f, "oracle thinks the best move is {oracle}")
            }
            (_, None) => {
                writeln!(f, "{algorithm} thinks the best move is {found}")?;
                writeln!(f, "record has no oracle move")
            }
        }
    }
}

/// Parse a whole record, rebuild its tree and compare one search against its oracle.
pub fn compare(input: &str, depth: Depth, algorithm: Algorithm) -> error::Result<Comparison> {
    let record = Record::parse(input)?;
    let tree = record.tree()?;
    Ok(record.check(&tree, depth, algorithm))
}
