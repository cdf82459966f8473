//! The built-in reference world.
//!
//! Shipped as a JSON string so it loads through the same parser and
//! validation as user-supplied world files, and so `woods init` can write
//! it out byte for byte as an editing starting point.

use crate::error::WorldResult;
use crate::world::World;

/// The Whispering Woods world file, exactly as shipped.
pub const WHISPERING_WOODS_JSON: &str = include_str!("../data/whispering_woods.json");

impl World {
    /// Load the built-in Whispering Woods world.
    pub fn whispering_woods() -> WorldResult<Self> {
        Self::from_json(WHISPERING_WOODS_JSON)
    }
}

#[cfg(test)]
mod tests {
    use crate::direction::Direction;
    use crate::world::World;

    #[test]
    fn reference_world_loads_clean() {
        let world = World::whispering_woods().unwrap();
        assert_eq!(world.name(), "Whispering Woods");
        assert_eq!(world.room_count(), 8);
        assert_eq!(world.total_items(), 6);
    }

    #[test]
    fn landmarks_are_wired_up() {
        let world = World::whispering_woods().unwrap();
        assert_eq!(world.room(world.start()).name, "Whispering Grove");
        assert_eq!(world.room(world.final_room()).name, "Shadow Hollow");
        let warning = world.warning_room().unwrap();
        assert_eq!(world.room(warning).name, "Moonlight Clearing");
    }

    #[test]
    fn the_grove_opens_in_all_four_directions() {
        let world = World::whispering_woods().unwrap();
        let grove = world.room(world.start());
        for direction in Direction::ALL {
            assert!(grove.exit(direction).is_some(), "{direction} is missing");
        }
    }

    #[test]
    fn the_axe_waits_in_dusky_hollow() {
        let world = World::whispering_woods().unwrap();
        let hollow = world.find("Dusky Hollow").unwrap();
        assert_eq!(world.room(hollow).item(), Some("Silver Axe"));
    }

    #[test]
    fn every_room_is_described_and_placed() {
        let world = World::whispering_woods().unwrap();
        for (_, room) in world.rooms() {
            assert!(!room.description.is_empty(), "{} lacks a description", room.name);
            assert!(room.pos.is_some(), "{} lacks a map position", room.name);
        }
    }
}
