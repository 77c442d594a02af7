//! Offline verification of adversarial game-tree search.
//!
//! A game-tree dump produced by an engine under test is parsed into a `Node`
//! tree, searched with one of several interchangeable algorithms, and the best
//! move found is compared with the move the engine itself chose.

pub mod coretypes;
pub mod error;
pub mod generate;
pub mod harness;
pub mod line;
pub mod search;
pub mod tree;

pub use coretypes::{Depth, Player, Score, Value};
pub use harness::{compare, Comparison, Record, Verdict};
pub use search::{Algorithm, SearchResult};
pub use tree::Node;
