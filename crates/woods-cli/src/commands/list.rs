//! Tabular room listing.

use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(world: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Room", "Item", "Exits"]);

    for (_, room) in world.rooms() {
        let exits: Vec<String> = room
            .exits()
            .map(|(direction, target)| format!("{direction} -> {}", world.room(target).name))
            .collect();
        let exits_cell = if exits.is_empty() {
            "—".to_string()
        } else {
            exits.join("\n")
        };
        let item_cell = room.item().unwrap_or("—").to_string();
        table.add_row(vec![&room.name, &item_cell, &exits_cell]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms, {} items", world.room_count(), world.total_items());

    Ok(())
}
