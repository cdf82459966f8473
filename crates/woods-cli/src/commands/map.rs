//! ASCII map drawn from the rooms' optional grid positions.

use std::collections::HashMap;
use std::path::Path;

use colored::Colorize;
use woods_core::{MapPos, Room, RoomId, World};

const NAME_WIDTH: usize = 16;

pub fn run(world: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world)?;

    let mut placed: HashMap<(i32, i32), RoomId> = HashMap::new();
    let mut unplaced: Vec<&str> = Vec::new();
    for (id, room) in world.rooms() {
        match room.pos {
            Some(MapPos(x, y)) => {
                if placed.insert((x, y), id).is_some() {
                    return Err(format!("two rooms share map position [{x}, {y}]"));
                }
            }
            None => unplaced.push(&room.name),
        }
    }

    if placed.is_empty() {
        println!("  No rooms carry map positions.");
        return Ok(());
    }

    println!("  Map of '{}'", world.name());
    println!();

    let min_x = placed.keys().map(|&(x, _)| x).min().unwrap_or(0);
    let max_x = placed.keys().map(|&(x, _)| x).max().unwrap_or(0);
    let min_y = placed.keys().map(|&(_, y)| y).min().unwrap_or(0);
    let max_y = placed.keys().map(|&(_, y)| y).max().unwrap_or(0);

    for y in min_y..=max_y {
        let mut row = String::from("  ");
        for x in min_x..=max_x {
            match placed.get(&(x, y)) {
                Some(&id) => {
                    let room = world.room(id);
                    row.push_str(&format!(
                        "[{:<width$}{}] ",
                        shorten(&room.name),
                        marker(&world, id, room),
                        width = NAME_WIDTH
                    ));
                }
                None => row.push_str(&" ".repeat(NAME_WIDTH + 4)),
            }
        }
        println!("{}", row.trim_end());
    }

    println!();
    println!(
        "  {} start   {} final   {} item",
        "@".green(),
        "!".red(),
        "*".yellow()
    );
    if !unplaced.is_empty() {
        println!("  Unplaced: {}", unplaced.join(", "));
    }

    Ok(())
}

fn marker(world: &World, id: RoomId, room: &Room) -> char {
    if id == world.final_room() {
        '!'
    } else if id == world.start() {
        '@'
    } else if room.item().is_some() {
        '*'
    } else {
        ' '
    }
}

fn shorten(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(NAME_WIDTH - 1).collect();
        short.push('.');
        short
    }
}
