//! Core engine for Whispering Woods-style text adventures.
//!
//! This crate is content-driven: a [`World`] is loaded from JSON (rooms,
//! item placement, and every line of narrative text), validated up front,
//! and then driven by a [`Session`] whose input handling is total. The
//! built-in reference world ships embedded and loads through the same
//! path as user files.

/// Total command parsing for player input.
pub mod command;
/// The built-in reference world.
pub mod content;
/// Compass directions for movement.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Breadth-first path analysis over the room graph.
pub mod paths;
/// Narrative text as data.
pub mod script;
/// The game session state machine.
pub mod session;
/// The world model: rooms, exits, and item placement.
pub mod world;

/// Re-export command parsing.
pub use command::{Command, parse_command};
/// Re-export the direction type.
pub use direction::Direction;
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export the script type.
pub use script::Script;
/// Re-export session types.
pub use session::{Ending, Phase, Session};
/// Re-export world model types.
pub use world::{MapPos, Room, RoomId, World, WorldFile};
