//! Shortest-path queries over the room graph.

use std::path::Path;

use woods_core::{RoomId, World, paths};

pub fn run(world: Option<&Path>, from: Option<&str>, to: Option<&str>) -> Result<(), String> {
    let world = super::load_world(world)?;

    let from = match from {
        Some(name) => find_room(&world, name)?,
        None => world.start(),
    };

    match to {
        Some(name) => {
            let to = find_room(&world, name)?;
            let Some(path) = paths::shortest_path(&world, from, to) else {
                return Err(format!(
                    "\"{}\" cannot be reached from \"{}\"",
                    world.room(to).name,
                    world.room(from).name
                ));
            };
            print_route(&world, &path);
        }
        None => {
            let routes = paths::nearest_items(&world, from);
            if routes.is_empty() {
                println!("  No items anywhere in reach.");
                return Ok(());
            }
            println!("  Nearest items from {}:", world.room(from).name);
            for path in &routes {
                let Some(&target) = path.last() else { continue };
                let Some(item) = world.room(target).item() else {
                    continue;
                };
                println!();
                println!("  {item}");
                print_route(&world, path);
            }
        }
    }

    Ok(())
}

fn find_room(world: &World, name: &str) -> Result<RoomId, String> {
    world
        .find(name)
        .ok_or_else(|| format!("room not found: \"{name}\""))
}

fn print_route(world: &World, path: &[RoomId]) {
    let Some(&first) = path.first() else { return };
    let directions = paths::directions(world, path);

    let mut line = format!("  [{}]", world.room(first).name);
    for (direction, id) in directions.iter().zip(path.iter().skip(1)) {
        line.push_str(&format!(" --{direction}--> [{}]", world.room(*id).name));
    }
    println!("{line}");
    println!(
        "  {} step{}",
        directions.len(),
        if directions.len() == 1 { "" } else { "s" }
    );
}
