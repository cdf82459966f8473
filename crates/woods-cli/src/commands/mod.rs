//! One module per subcommand, each exposing a single `run` entry point.

pub mod check;
pub mod init;
pub mod list;
pub mod map;
pub mod play;
pub mod route;

use std::fs;
use std::path::Path;

use woods_core::World;

/// Load a world from a file, or the built-in Whispering Woods when no
/// file was given on the command line.
fn load_world(path: Option<&Path>) -> Result<World, String> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            World::from_json(&json).map_err(|e| e.to_string())
        }
        None => World::whispering_woods().map_err(|e| e.to_string()),
    }
}
