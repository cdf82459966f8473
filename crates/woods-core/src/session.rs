//! Game session: the state machine driving a single playthrough.
//!
//! [`Session::process`] is total: every input line maps to exactly one
//! response and never fails. Moves along legal exits change the current
//! room; entering the final room evaluates the ending immediately; all
//! other input answers without touching state.

use crate::command::{Command, parse_command};
use crate::direction::Direction;
use crate::world::{Room, RoomId, World};

/// How a playthrough ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Entered the final room with every item collected.
    Victory,
    /// Entered the final room with items still missing.
    Defeat,
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting movement and pickup commands.
    Playing,
    /// An ending was reached; waiting for the play-again answer.
    AwaitingReplay(Ending),
    /// The player declined to replay.
    Terminated,
}

/// A single interactive playthrough of a world.
pub struct Session {
    /// Pristine copy used to restock items on replay.
    base: World,
    world: World,
    current: RoomId,
    inventory: Vec<String>,
    phase: Phase,
}

impl Session {
    /// Start a session at the world's configured start room.
    pub fn new(world: World) -> Self {
        let current = world.start();
        Self {
            base: world.clone(),
            world,
            current,
            inventory: Vec::new(),
            phase: Phase::Playing,
        }
    }

    /// The live world, with collected items cleared.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The room the player is in.
    pub fn current_room(&self) -> &Room {
        self.world.room(self.current)
    }

    /// Canonical names of collected items, in collection order.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// The prompt to print before the next input read.
    pub fn prompt(&self) -> &str {
        match self.phase {
            Phase::AwaitingReplay(_) => &self.world.script().replay_prompt,
            _ => &self.world.script().command_prompt,
        }
    }

    /// Render the status block for the current turn.
    pub fn status(&self) -> String {
        let room = self.world.room(self.current);
        let foreboding = self.world.warning_room() == Some(self.current)
            && self.inventory.len() < self.world.total_items();
        self.world
            .script()
            .status_block(room, &self.inventory, foreboding)
    }

    /// Feed one line of player input and get the response to print.
    ///
    /// An empty response means the turn spoke for itself (a normal move,
    /// or a replay reset); the caller shows the next status block.
    pub fn process(&mut self, input: &str) -> String {
        match self.phase {
            Phase::Playing => match parse_command(input) {
                Command::Move { direction } => self.do_move(direction),
                Command::Get { item } => self.do_get(&item),
                Command::Unknown { .. } => self.world.script().invalid_command(),
            },
            Phase::AwaitingReplay(ending) => self.do_replay_answer(input, ending),
            Phase::Terminated => String::new(),
        }
    }

    /// Move along an exit. A direction with no exit here is just another
    /// invalid command.
    fn do_move(&mut self, direction: Direction) -> String {
        let Some(destination) = self.world.room(self.current).exit(direction) else {
            return self.world.script().invalid_command();
        };
        self.current = destination;

        if destination == self.world.final_room() {
            let total = self.world.total_items();
            let won = self.inventory.len() == total;
            self.phase = Phase::AwaitingReplay(if won {
                Ending::Victory
            } else {
                Ending::Defeat
            });
            return self.world.script().ending(won, total);
        }
        String::new()
    }

    fn do_get(&mut self, item: &str) -> String {
        let here = self
            .world
            .room(self.current)
            .item()
            .is_some_and(|present| present.to_lowercase() == item.to_lowercase());
        if !here {
            return self.world.script().no_such_item();
        }
        let Some(name) = self.world.take_item(self.current) else {
            return self.world.script().no_such_item();
        };
        let reply = self.world.script().collected(&name);
        self.inventory.push(name);
        reply
    }

    fn do_replay_answer(&mut self, input: &str, ending: Ending) -> String {
        if input.trim().eq_ignore_ascii_case("yes") {
            self.reset();
            String::new()
        } else {
            self.phase = Phase::Terminated;
            self.world.script().farewell(ending == Ending::Victory)
        }
    }

    /// Back to the start room with an empty backpack and every item
    /// returned to its room.
    fn reset(&mut self) {
        self.world = self.base.clone();
        self.current = self.world.start();
        self.inventory.clear();
        self.phase = Phase::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn woods() -> Session {
        Session::new(World::whispering_woods().unwrap())
    }

    /// Collects all six items and stops one move short of the final room.
    fn collect_everything(session: &mut Session) {
        for step in [
            "West",
            "get silver axe",
            "East",
            "North",
            "get cloak",
            "East",
            "get sunlight elixir",
            "West",
            "South",
            "South",
            "get barkskin potion",
            "East",
            "get ancient rune",
            "West",
            "North",
            "East",
            "get druidic staff",
        ] {
            session.process(step);
        }
    }

    #[test]
    fn starts_at_the_grove() {
        let session = woods();
        assert_eq!(session.current_room().name, "Whispering Grove");
        assert!(session.inventory().is_empty());
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn west_axe_and_back_to_the_clearing() {
        let mut session = woods();

        assert_eq!(session.process("West"), "");
        assert_eq!(session.current_room().name, "Dusky Hollow");

        let reply = session.process("get silver axe");
        assert!(reply.contains("Silver Axe"));
        assert_eq!(session.inventory(), ["Silver Axe".to_string()]);
        assert_eq!(session.current_room().item(), None);

        assert_eq!(session.process("East"), "");
        assert_eq!(session.current_room().name, "Whispering Grove");

        assert_eq!(session.process("East"), "");
        assert_eq!(session.current_room().name, "Moonlight Clearing");
        assert!(session.status().contains("BOOM, BOOM, BOOM"));
    }

    #[test]
    fn foreboding_quiets_down_once_everything_is_carried() {
        let mut session = woods();
        collect_everything(&mut session);

        assert_eq!(session.current_room().name, "Moonlight Clearing");
        assert_eq!(session.inventory().len(), 6);
        assert!(!session.status().contains("BOOM, BOOM, BOOM"));
    }

    #[test]
    fn entering_the_hollow_prepared_wins() {
        let mut session = woods();
        collect_everything(&mut session);

        let reply = session.process("North");
        assert!(reply.contains("Congratulations"));
        assert_eq!(session.phase(), Phase::AwaitingReplay(Ending::Victory));
    }

    #[test]
    fn entering_the_hollow_unprepared_loses() {
        let mut session = woods();
        session.process("East");
        let reply = session.process("North");
        assert!(reply.contains("without all six items"));
        assert_eq!(session.phase(), Phase::AwaitingReplay(Ending::Defeat));
    }

    #[test]
    fn farewells_differ_by_ending() {
        let mut session = woods();
        collect_everything(&mut session);
        session.process("North");
        let farewell = session.process("no");
        assert!(farewell.contains("guardian"));
        assert_eq!(session.phase(), Phase::Terminated);

        let mut session = woods();
        session.process("East");
        session.process("North");
        let farewell = session.process("anything else");
        assert!(farewell.contains("come back soon"));
        assert_eq!(session.phase(), Phase::Terminated);
    }

    #[test]
    fn replay_restores_the_world() {
        let mut session = woods();
        session.process("West");
        session.process("get silver axe");
        session.process("East");
        session.process("East");
        session.process("North");
        assert_eq!(session.phase(), Phase::AwaitingReplay(Ending::Defeat));

        assert_eq!(session.process("  YES  "), "");
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.current_room().name, "Whispering Grove");
        assert!(session.inventory().is_empty());

        // The axe is back where it started.
        let hollow = session.world().find("Dusky Hollow").unwrap();
        assert_eq!(session.world().room(hollow).item(), Some("Silver Axe"));
    }

    #[test]
    fn replay_prompt_follows_the_phase() {
        let mut session = woods();
        assert!(session.prompt().contains("Enter a command"));
        session.process("East");
        session.process("North");
        assert!(session.prompt().contains("play again"));
    }

    #[test]
    fn invalid_commands_change_nothing() {
        let mut session = woods();
        let invalid = session.world().script().invalid_command();

        for input in ["fly", "n", "go north", "", "   ", "get", "get   "] {
            assert_eq!(session.process(input), invalid, "input: {input:?}");
            assert_eq!(session.current_room().name, "Whispering Grove");
            assert!(session.inventory().is_empty());
        }
    }

    #[test]
    fn illegal_direction_is_an_invalid_command() {
        let mut session = woods();
        session.process("West");
        // Dusky Hollow only has an East exit.
        let reply = session.process("North");
        assert_eq!(reply, session.world().script().invalid_command());
        assert_eq!(session.current_room().name, "Dusky Hollow");
    }

    #[test]
    fn get_misses_leave_state_alone() {
        let mut session = woods();
        let miss = session.world().script().no_such_item();

        // Wrong name in a room with an item.
        session.process("West");
        assert_eq!(session.process("get cloak"), miss);
        assert!(session.inventory().is_empty());

        // Right name, already taken.
        session.process("get silver axe");
        assert_eq!(session.process("get silver axe"), miss);
        assert_eq!(session.inventory().len(), 1);

        // A room with no item at all.
        session.process("East");
        assert_eq!(session.process("get anything"), miss);
    }

    #[test]
    fn get_matches_case_insensitively_but_stores_canonical() {
        let mut session = woods();
        session.process("North");
        session.process("get CLOAK");
        assert_eq!(session.inventory(), ["Cloak".to_string()]);
    }

    #[test]
    fn terminated_sessions_stay_silent() {
        let mut session = woods();
        session.process("East");
        session.process("North");
        session.process("no");
        assert_eq!(session.phase(), Phase::Terminated);
        assert_eq!(session.process("yes"), "");
        assert_eq!(session.phase(), Phase::Terminated);
    }

    proptest! {
        #[test]
        fn any_input_is_handled(input in ".*") {
            let mut session = woods();
            let before_room = session.current_room().name.clone();
            let before_items = session.inventory().len();

            let reply = session.process(&input);

            prop_assert!(session.inventory().len() <= session.world().total_items());
            if reply == session.world().script().invalid_command() {
                prop_assert_eq!(&session.current_room().name, &before_room);
                prop_assert_eq!(session.inventory().len(), before_items);
            }
        }
    }
}
