//! The fundamental and simple types of `plycheck_engine`.

use std::fmt::{self, Display};
use std::ops::{Add, Mul, Neg, Not};

/////////////////////////
// Data and Structures //
/////////////////////////

/// Raw heuristic value attached to a node in a dump.
pub type Value = i32;

/// Type alias to make changing Score inner type easy if needed.
/// Wider than `Value` so that a sign flip of any leaf value cannot overflow.
pub type ScoreKind = i64;

/// Score propagated by search, relative to some player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Score(pub ScoreKind);

/// Player can represent the side to move at any ply.
/// White is the maximizing player of absolute scores.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    White,
    Black,
}

/// How many plies a search descends below the root.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Depth {
    /// Search to the height of the tree being searched.
    #[default]
    Full,
    /// Stop after the given number of plies and use the static value there.
    Plies(u32),
}

//////////////////////
/// Implementations //
//////////////////////

impl Score {
    pub const MIN: Score = Self(ScoreKind::MIN + 1); // + 1 to avoid overflow error on negate.
    pub const MAX: Score = Self(ScoreKind::MAX);

    /// Returns the sign of Score value, either 1, -1, or 0.
    pub const fn signum(&self) -> ScoreKind {
        self.0.signum()
    }
}

impl From<Value> for Score {
    fn from(value: Value) -> Self {
        Self(ScoreKind::from(value))
    }
}

impl Add<ScoreKind> for Score {
    type Output = Self;
    fn add(self, rhs: ScoreKind) -> Self::Output {
        Self(self.0.saturating_add(rhs))
    }
}
impl Mul for Score {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}
impl Neg for Score {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Score::MIN => f.write_str("-inf"),
            Score::MAX => f.write_str("+inf"),
            Score(score) => write!(f, "{:+}", score),
        }
    }
}

impl Player {
    /// Returns the absolute sign of a Player as a Score.
    /// A positive value is good for White and a negative value is good for Black.
    pub const fn sign(&self) -> Score {
        match self {
            Player::White => Score(1),
            Player::Black => Score(-1),
        }
    }

    /// Interpret the side line of a record.
    /// Only `white`, in any case, names White. Anything else names Black.
    pub fn from_side_line(line: &str) -> Self {
        match line.trim().eq_ignore_ascii_case("white") {
            true => Player::White,
            false => Player::Black,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Player::White => "white",
            Player::Black => "black",
        }
    }
}

impl Not for Player {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Depth {
    /// Lenient conversion of a command line argument.
    /// Non-integers and negative integers select the full height of the tree.
    pub fn from_arg(arg: &str) -> Self {
        match arg.trim().parse::<i64>() {
            Ok(plies) if plies >= 0 => Depth::Plies(u32::try_from(plies).unwrap_or(u32::MAX)),
            _ => Depth::Full,
        }
    }

    /// Number of plies to search in a tree of the given height.
    pub const fn resolve(&self, height: u32) -> u32 {
        match *self {
            Depth::Full => height,
            Depth::Plies(plies) => plies,
        }
    }
}

impl Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Depth::Full => f.write_str("full"),
            Depth::Plies(plies) => write!(f, "{}", plies),
        }
    }
}
