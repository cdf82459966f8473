//! Command parsing for player input.
//!
//! Parsing is total: every input string maps to exactly one [`Command`].
//! Whether a move is legal or an item is actually present is decided by the
//! session, not here.

use crate::direction::Direction;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move in a compass direction.
    Move {
        /// The direction to move.
        direction: Direction,
    },
    /// Pick up an item by name.
    Get {
        /// The item name as typed, inner whitespace collapsed.
        item: String,
    },
    /// Anything else.
    Unknown {
        /// The original input, trimmed.
        input: String,
    },
}

/// Parse a player input string into a command.
///
/// Input is trimmed first. A bare direction word becomes [`Command::Move`];
/// `get` followed by at least one more word becomes [`Command::Get`]; all
/// other input, including a bare `get`, becomes [`Command::Unknown`].
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if let Some(direction) = Direction::parse(input) {
        return Command::Move { direction };
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    if let Some((verb, rest)) = words.split_first() {
        if verb.eq_ignore_ascii_case("get") && !rest.is_empty() {
            return Command::Get {
                item: rest.join(" "),
            };
        }
    }

    Command::Unknown {
        input: input.to_string(),
    }
}
