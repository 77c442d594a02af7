//! Dump line parsing.
//!
//! A dump line is `dashes SP value [","] [SP move]`, where the number of dashes
//! is the depth of the node in the tree. Root lines may omit the dashes.

use arrayvec::ArrayVec;

use crate::coretypes::Value;
use crate::error::{self, ErrorKind};

/// The most tokens a dump line may hold: dashes, value, move.
pub const MAX_LINE_TOKENS: usize = 3;

/// One dump line, split into its fields.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ParsedLine {
    /// Number of dashes, the indentation depth of the node.
    pub depth: usize,
    /// Heuristic value of the node.
    pub value: Value,
    /// Move leading to the node from its parent. Empty when absent.
    pub move_: String,
}

impl ParsedLine {
    pub fn new<S: Into<String>>(depth: usize, value: Value, move_: S) -> Self {
        Self {
            depth,
            value,
            move_: move_.into(),
        }
    }
}

/// Parse a single dump line.
///
/// Surrounding whitespace is ignored, tokens are separated by single spaces.
/// * 1 token: `value`, at depth 0 with no move.
/// * 2 tokens: `dashes value`, with no move.
/// * 3 tokens: `dashes value move`.
pub fn parse_line(line: &str) -> error::Result<ParsedLine> {
    let mut tokens: ArrayVec<&str, MAX_LINE_TOKENS> = ArrayVec::new();
    for token in line.trim().split(' ') {
        tokens.try_push(token).map_err(|_| {
            (
                ErrorKind::LineTokenCount,
                format!("more than {} tokens in `{}`", MAX_LINE_TOKENS, line.trim()),
            )
        })?;
    }

    let (dashes, value, move_) = match tokens.as_slice() {
        [value] => ("", *value, ""),
        [dashes, value] => (*dashes, *value, ""),
        [dashes, value, move_] => (*dashes, *value, *move_),
        _ => return Err((ErrorKind::LineTokenCount, "no tokens").into()),
    };

    Ok(ParsedLine {
        depth: dashes.matches('-').count(),
        value: parse_value(value)?,
        move_: move_.to_string(),
    })
}

/// Parse a value token, which may carry one trailing comma.
fn parse_value(token: &str) -> error::Result<Value> {
    let digits = token.strip_suffix(',').unwrap_or(token);
    digits
        .parse()
        .map_err(|_| (ErrorKind::LineValue, format!("`{}`", token)).into())
}

/// Returns true if a line could be a dump line.
pub fn is_tree_line(line: &str) -> bool {
    parse_line(line).is_ok()
}

/// Parse every line of a dump, skipping blank lines.
/// Errors name the 1-based number of the offending line.
pub fn parse_lines<'a, I>(lines: I) -> error::Result<Vec<ParsedLine>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line_at(index + 1, line))
        .collect()
}

/// Parse a dump line known to be line `line_no` of its input.
/// The line number is added to the message of any error.
pub fn parse_line_at(line_no: usize, line: &str) -> error::Result<ParsedLine> {
    parse_line(line).map_err(|error| match error {
        error::Error::Simple(kind) => (kind, format!("line {}", line_no)).into(),
        error::Error::Message(kind, message) => {
            (kind, format!("line {}: {}", line_no, message)).into()
        }
        custom => custom,
    })
}
