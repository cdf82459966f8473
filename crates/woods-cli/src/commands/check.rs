//! World validation report: stats plus soft spots the loader tolerates.

use std::collections::HashSet;
use std::path::Path;

use colored::Colorize;
use woods_core::{RoomId, paths};

pub fn run(world: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world)?;

    println!("  All checks passed for '{}'.", world.name());
    println!(
        "  {} rooms, {} items, {} exits",
        world.room_count(),
        world.total_items(),
        world.exit_count()
    );

    let warning = match world.warning_room() {
        Some(id) => format!(" | warning: {}", world.room(id).name),
        None => String::new(),
    };
    println!(
        "  start: {} | final: {}{}",
        world.room(world.start()).name,
        world.room(world.final_room()).name,
        warning
    );
    println!();

    // The loader only rejects broken references. Rooms nobody can reach
    // and passages with no way back still load, so flag them here.
    let reachable: HashSet<RoomId> = paths::reachable(&world, world.start()).into_iter().collect();
    let mut warnings = 0;

    for (id, room) in world.rooms() {
        if !reachable.contains(&id) {
            println!(
                "  {} room \"{}\" cannot be reached from the start",
                "warning:".yellow(),
                room.name
            );
            warnings += 1;
        }
    }

    for (id, room) in world.rooms() {
        for (direction, target) in room.exits() {
            // The session ends on entering the final room, so passages into
            // it never need a way back.
            if target == world.final_room() {
                continue;
            }
            if !world.room(target).exits().any(|(_, back)| back == id) {
                println!(
                    "  {} one-way passage from \"{}\" {} to \"{}\"",
                    "warning:".yellow(),
                    room.name,
                    direction,
                    world.room(target).name
                );
                warnings += 1;
            }
        }
    }

    if warnings == 0 {
        println!("  No unreachable rooms, no one-way passages.");
    } else {
        println!(
            "  {} warning{}",
            warnings,
            if warnings == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
