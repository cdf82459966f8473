//! Narrative text as data.
//!
//! Every line the game prints comes from a [`Script`], so a world file can
//! reskin the whole game without touching engine code. Templates may use
//! `{room}`, `{inventory}`, `{item}`, `{exits}`, and `{total}` slots; long
//! passages are arrays of lines. Missing fields fall back to plain
//! defaults, so a minimal world file stays playable.

use serde::{Deserialize, Serialize};

use crate::world::Room;

/// All narrative text for a world.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    /// Lines printed once before the first turn.
    pub intro: Vec<String>,
    /// Separator opening and closing the room/backpack block.
    pub status_banner: String,
    /// Current-room line; `{room}` is the room name.
    pub room_line: String,
    /// Inventory line; `{inventory}` is the bracketed item list.
    pub backpack_line: String,
    /// Warning block shown in the warning room while items are missing.
    pub foreboding: Vec<String>,
    /// Line shown when the room holds an item; `{item}` is its name.
    pub item_here: String,
    /// Line shown when the room holds no item.
    pub item_absent: String,
    /// Separator closing the status block.
    pub status_footer: String,
    /// Exits line; `{exits}` is the comma-joined direction list.
    pub exits_line: String,
    /// Rule printed under the exits line, if nonempty.
    pub exits_rule: String,
    /// Prompt printed before each command read.
    pub command_prompt: String,
    /// Lines acknowledging a successful pickup; `{item}` is the name.
    pub collected: Vec<String>,
    /// Lines for a `get` naming an item that is not here.
    pub no_such_item: Vec<String>,
    /// Lines for input that is neither a legal move nor a pickup.
    pub invalid_command: Vec<String>,
    /// Ending narrative when the player wins.
    pub victory: Vec<String>,
    /// Ending narrative when the player loses.
    pub defeat: Vec<String>,
    /// Prompt printed after either ending.
    pub replay_prompt: String,
    /// Farewell after a win when the player declines to replay.
    pub farewell_victory: Vec<String>,
    /// Farewell after a loss when the player declines to replay.
    pub farewell_defeat: Vec<String>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            intro: vec!["Collect every item, then head for the final room.".to_string()],
            status_banner: "========================================".to_string(),
            room_line: "You are in the {room}".to_string(),
            backpack_line: "Backpack: {inventory}".to_string(),
            foreboding: vec!["Something stirs ahead. Turn back if you are not ready.".to_string()],
            item_here: "There is a {item} here.".to_string(),
            item_absent: "There is nothing to pick up here.".to_string(),
            status_footer: "----------------------------------------".to_string(),
            exits_line: "Exits: {exits}".to_string(),
            exits_rule: String::new(),
            command_prompt: "Enter a direction or get (item name): ".to_string(),
            collected: vec!["You picked up the {item}.".to_string()],
            no_such_item: vec!["No such item here.".to_string()],
            invalid_command: vec!["Invalid command.".to_string()],
            victory: vec!["You collected all {total} items and won!".to_string()],
            defeat: vec!["You arrived unprepared and lost.".to_string()],
            replay_prompt: "Play again? (yes/no): ".to_string(),
            farewell_victory: vec!["Thanks for playing!".to_string()],
            farewell_defeat: vec!["Thanks for playing!".to_string()],
        }
    }
}

impl Script {
    /// The intro block printed at game start.
    pub fn intro(&self) -> String {
        self.intro.join("\n")
    }

    /// Render the per-turn status block for a room.
    ///
    /// `foreboding` is decided by the session (warning room entered with
    /// items still missing); the script only supplies the text.
    pub fn status_block(&self, room: &Room, inventory: &[String], foreboding: bool) -> String {
        let inventory_list = format!("[{}]", inventory.join(", "));
        let exits: Vec<&str> = room.exits().map(|(d, _)| d.name()).collect();

        let mut output = String::new();
        output.push_str(&self.status_banner);
        output.push('\n');
        output.push_str(&fill(&self.room_line, &[("room", &room.name)]));
        output.push('\n');
        if !room.description.is_empty() {
            output.push_str(&room.description);
            output.push('\n');
        }
        output.push_str(&fill(&self.backpack_line, &[("inventory", &inventory_list)]));
        output.push('\n');
        output.push_str(&self.status_banner);
        output.push('\n');

        if foreboding && !self.foreboding.is_empty() {
            output.push_str(&self.foreboding.join("\n"));
            output.push('\n');
        }

        match room.item() {
            Some(item) => output.push_str(&fill(&self.item_here, &[("item", item)])),
            None => output.push_str(&self.item_absent),
        }
        output.push('\n');
        output.push_str(&self.status_footer);
        output.push('\n');

        output.push_str(&fill(&self.exits_line, &[("exits", &exits.join(", "))]));
        if !self.exits_rule.is_empty() {
            output.push('\n');
            output.push_str(&self.exits_rule);
        }

        output
    }

    /// Acknowledge a successful pickup.
    pub fn collected(&self, item: &str) -> String {
        fill(&self.collected.join("\n"), &[("item", item)])
    }

    /// Respond to a `get` naming an item that is not in the room.
    pub fn no_such_item(&self) -> String {
        self.no_such_item.join("\n")
    }

    /// Respond to input that is neither a legal move nor a pickup.
    pub fn invalid_command(&self) -> String {
        self.invalid_command.join("\n")
    }

    /// The ending narrative for a win or a loss.
    pub fn ending(&self, won: bool, total: usize) -> String {
        let lines = if won { &self.victory } else { &self.defeat };
        fill(&lines.join("\n"), &[("total", &total.to_string())])
    }

    /// The farewell matching the ending just reached.
    pub fn farewell(&self, won: bool) -> String {
        let lines = if won {
            &self.farewell_victory
        } else {
            &self.farewell_defeat
        };
        lines.join("\n")
    }
}

/// Replace `{key}` slots in a template.
fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in slots {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::World;

    fn test_room() -> World {
        World::from_json(
            r#"{
                "name": "T",
                "start": "Shore",
                "final_room": "Shore",
                "rooms": [
                    {"name": "Shore", "description": "Wet sand.", "north": "Dune", "item": "Shell"},
                    {"name": "Dune"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn fill_replaces_slots() {
        assert_eq!(
            fill("a {x} and a {y}", &[("x", "b"), ("y", "c")]),
            "a b and a c"
        );
        assert_eq!(fill("no slots", &[("x", "b")]), "no slots");
    }

    #[test]
    fn status_block_shows_room_and_item() {
        let world = test_room();
        let script = Script::default();
        let shore = world.room(world.start());

        let block = script.status_block(shore, &["Rope".to_string()], false);
        assert!(block.contains("You are in the Shore"));
        assert!(block.contains("Wet sand."));
        assert!(block.contains("Backpack: [Rope]"));
        assert!(block.contains("There is a Shell here."));
        assert!(block.contains("Exits: North"));
    }

    #[test]
    fn status_block_without_item_or_foreboding() {
        let world = test_room();
        let script = Script::default();
        let dune = world.room(world.find("Dune").unwrap());

        let block = script.status_block(dune, &[], false);
        assert!(block.contains("Backpack: []"));
        assert!(block.contains(&script.item_absent));
        assert!(!block.contains("Something stirs"));
    }

    #[test]
    fn foreboding_appears_only_when_asked() {
        let world = test_room();
        let script = Script::default();
        let shore = world.room(world.start());

        let calm = script.status_block(shore, &[], false);
        let tense = script.status_block(shore, &[], true);
        assert!(!calm.contains("Something stirs"));
        assert!(tense.contains("Something stirs"));
    }

    #[test]
    fn endings_and_farewells_pick_the_right_variant() {
        let mut script = Script::default();
        script.farewell_victory = vec!["Guardian, rest.".to_string()];
        script.farewell_defeat = vec!["Come back stronger.".to_string()];

        assert!(script.ending(true, 6).contains("all 6 items"));
        assert!(script.ending(false, 6).contains("unprepared"));
        assert_eq!(script.farewell(true), "Guardian, rest.");
        assert_eq!(script.farewell(false), "Come back stronger.");
    }

    #[test]
    fn collected_fills_item_name() {
        let script = Script::default();
        assert_eq!(script.collected("Shell"), "You picked up the Shell.");
    }

    #[test]
    fn missing_script_fields_fall_back() {
        let script: Script = serde_json::from_str(r#"{"room_line": "Here: {room}"}"#).unwrap();
        assert_eq!(script.room_line, "Here: {room}");
        assert_eq!(script.replay_prompt, Script::default().replay_prompt);
    }
}
