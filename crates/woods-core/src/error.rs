use crate::direction::Direction;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when loading or validating a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The world file is not valid JSON or does not match the schema.
    #[error("invalid world file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The world defines no rooms at all.
    #[error("world \"{0}\" has no rooms")]
    Empty(String),

    /// Two rooms share the same name (compared case-insensitively).
    #[error("duplicate room name: \"{0}\"")]
    DuplicateRoom(String),

    /// The same item is placed in more than one room.
    #[error("item \"{item}\" appears in both \"{first}\" and \"{second}\"")]
    DuplicateItem {
        /// The item name.
        item: String,
        /// The room where the item was first seen.
        first: String,
        /// The room where it appeared again.
        second: String,
    },

    /// An exit points at a room that does not exist.
    #[error("room \"{room}\" has a {direction} exit to unknown room \"{target}\"")]
    DanglingExit {
        /// The room holding the exit.
        room: String,
        /// The compass direction of the exit.
        direction: Direction,
        /// The name the exit points at.
        target: String,
    },

    /// The configured start room does not exist.
    #[error("start room \"{0}\" does not exist")]
    MissingStart(String),

    /// The configured final room does not exist.
    #[error("final room \"{0}\" does not exist")]
    MissingFinal(String),

    /// The configured warning room does not exist.
    #[error("warning room \"{0}\" does not exist")]
    MissingWarning(String),
}
