//! The world model: a validated graph of rooms with item placement.
//!
//! Worlds are loaded from JSON ([`WorldFile`]) and validated before play:
//! every exit must name an existing room, room and item names must be
//! unique, and the configured start and final rooms must exist. Once
//! built, the only runtime mutation a [`World`] supports is
//! [`World::take_item`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};
use crate::script::Script;

/// Identifier for a room within its [`World`].
///
/// Ids are handed out by the world that owns the room and are stable for
/// the world's lifetime; rooms are never added or removed after loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(usize);

/// Grid position of a room on the map, as `[x, y]`.
///
/// `x` grows eastward, `y` grows southward. Coordinates may be negative;
/// the map renderer normalizes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPos(pub i32, pub i32);

/// A room as it appears in a world file.
///
/// Every room carries the same four direction slots; absent slots mean no
/// exit that way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomFile {
    /// The room's display name, unique within the world.
    pub name: String,
    /// One-line description shown in the status block.
    #[serde(default)]
    pub description: String,
    /// Name of the room to the north, if any.
    #[serde(default)]
    pub north: Option<String>,
    /// Name of the room to the south, if any.
    #[serde(default)]
    pub south: Option<String>,
    /// Name of the room to the east, if any.
    #[serde(default)]
    pub east: Option<String>,
    /// Name of the room to the west, if any.
    #[serde(default)]
    pub west: Option<String>,
    /// The item placed here, if any.
    #[serde(default)]
    pub item: Option<String>,
    /// Optional map position.
    #[serde(default)]
    pub pos: Option<MapPos>,
}

/// The raw, unvalidated shape of a world file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldFile {
    /// The world's display name.
    pub name: String,
    /// Name of the room the player starts in.
    pub start: String,
    /// Name of the room that ends the game on entry.
    pub final_room: String,
    /// Name of the room where the foreboding warning can appear.
    #[serde(default)]
    pub warning_room: Option<String>,
    /// All rooms, in display order.
    pub rooms: Vec<RoomFile>,
    /// Narrative text; missing fields fall back to plain defaults.
    #[serde(default)]
    pub script: Script,
}

/// A validated room with resolved exits.
#[derive(Debug, Clone)]
pub struct Room {
    /// The room's display name.
    pub name: String,
    /// One-line description shown in the status block.
    pub description: String,
    /// Optional map position.
    pub pos: Option<MapPos>,
    north: Option<RoomId>,
    south: Option<RoomId>,
    east: Option<RoomId>,
    west: Option<RoomId>,
    item: Option<String>,
}

impl Room {
    /// The exit in the given direction, if any.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// All exits in north/south/east/west order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.exit(d).map(|id| (d, id)))
    }

    /// The item currently in this room, if any.
    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }
}

/// The central world model. Owns all rooms and the narrative script.
#[derive(Debug, Clone)]
pub struct World {
    name: String,
    rooms: Vec<Room>,
    by_name_lower: HashMap<String, RoomId>,
    start: RoomId,
    final_room: RoomId,
    warning_room: Option<RoomId>,
    total_items: usize,
    script: Script,
}

impl World {
    /// Build and validate a world from its file form.
    pub fn new(file: WorldFile) -> WorldResult<Self> {
        if file.rooms.is_empty() {
            return Err(WorldError::Empty(file.name));
        }

        // Room names must be unique, compared case-insensitively.
        let mut by_name_lower = HashMap::new();
        for (i, room) in file.rooms.iter().enumerate() {
            if by_name_lower
                .insert(room.name.to_lowercase(), RoomId(i))
                .is_some()
            {
                return Err(WorldError::DuplicateRoom(room.name.clone()));
            }
        }

        // Each item may exist in exactly one room.
        let mut item_rooms: HashMap<String, &str> = HashMap::new();
        for room in &file.rooms {
            if let Some(item) = &room.item {
                if let Some(first) = item_rooms.insert(item.to_lowercase(), &room.name) {
                    return Err(WorldError::DuplicateItem {
                        item: item.clone(),
                        first: first.to_string(),
                        second: room.name.clone(),
                    });
                }
            }
        }
        let total_items = item_rooms.len();

        let mut rooms = Vec::with_capacity(file.rooms.len());
        for room in &file.rooms {
            rooms.push(Room {
                name: room.name.clone(),
                description: room.description.clone(),
                pos: room.pos,
                north: resolve_exit(&by_name_lower, room, Direction::North)?,
                south: resolve_exit(&by_name_lower, room, Direction::South)?,
                east: resolve_exit(&by_name_lower, room, Direction::East)?,
                west: resolve_exit(&by_name_lower, room, Direction::West)?,
                item: room.item.clone(),
            });
        }

        let start = *by_name_lower
            .get(&file.start.to_lowercase())
            .ok_or(WorldError::MissingStart(file.start))?;
        let final_room = *by_name_lower
            .get(&file.final_room.to_lowercase())
            .ok_or(WorldError::MissingFinal(file.final_room))?;
        let warning_room = match file.warning_room {
            None => None,
            Some(name) => Some(
                *by_name_lower
                    .get(&name.to_lowercase())
                    .ok_or(WorldError::MissingWarning(name))?,
            ),
        };

        Ok(Self {
            name: file.name,
            rooms,
            by_name_lower,
            start,
            final_room,
            warning_room,
            total_items,
            script: file.script,
        })
    }

    /// Parse and validate a world from JSON text.
    pub fn from_json(json: &str) -> WorldResult<Self> {
        let file: WorldFile = serde_json::from_str(json)?;
        Self::new(file)
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// The world's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a room by id.
    ///
    /// # Panics
    /// Panics if `id` did not come from this world.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// Find a room id by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.by_name_lower.get(&name.to_lowercase()).copied()
    }

    /// All rooms in file order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// The room the player starts in.
    pub fn start(&self) -> RoomId {
        self.start
    }

    /// The room that ends the game on entry.
    pub fn final_room(&self) -> RoomId {
        self.final_room
    }

    /// The room where the foreboding warning can appear, if configured.
    pub fn warning_room(&self) -> Option<RoomId> {
        self.warning_room
    }

    /// The narrative script for this world.
    pub fn script(&self) -> &Script {
        &self.script
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// Total distinct items defined at load time. The win condition
    /// compares the inventory against this.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Items still waiting in rooms.
    pub fn items_remaining(&self) -> usize {
        self.rooms.iter().filter(|r| r.item.is_some()).count()
    }

    /// Remove and return the item in a room. The only mutation a loaded
    /// world supports; the second call for a room returns `None`.
    pub fn take_item(&mut self, id: RoomId) -> Option<String> {
        self.rooms[id.0].item.take()
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of exits across all rooms.
    pub fn exit_count(&self) -> usize {
        self.rooms.iter().map(|r| r.exits().count()).sum()
    }
}

/// Resolve one of a room's exit slots against the name index.
fn resolve_exit(
    by_name_lower: &HashMap<String, RoomId>,
    room: &RoomFile,
    direction: Direction,
) -> WorldResult<Option<RoomId>> {
    let target = match direction {
        Direction::North => &room.north,
        Direction::South => &room.south,
        Direction::East => &room.east,
        Direction::West => &room.west,
    };
    match target {
        None => Ok(None),
        Some(name) => by_name_lower
            .get(&name.to_lowercase())
            .copied()
            .map(Some)
            .ok_or_else(|| WorldError::DanglingExit {
                room: room.name.clone(),
                direction,
                target: name.clone(),
            }),
    }
}
