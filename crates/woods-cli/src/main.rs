//! Command line frontend for the Whispering Woods adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "woods",
    about = "Whispering Woods - a single-session text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a world interactively on stdin/stdout
    Play {
        /// World file to load instead of the built-in Whispering Woods
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Load a world and report its stats and soft spots
    Check {
        /// World file to load instead of the built-in Whispering Woods
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// List every room with its item and exits
    List {
        /// World file to load instead of the built-in Whispering Woods
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Draw the world as a grid from the rooms' map positions
    Map {
        /// World file to load instead of the built-in Whispering Woods
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Find the shortest route between two rooms, or to the nearest items
    Route {
        /// Room to start from (defaults to the world's start room)
        #[arg(long)]
        from: Option<String>,

        /// Destination room; leave out to route to the nearest items instead
        #[arg(long)]
        to: Option<String>,

        /// World file to load instead of the built-in Whispering Woods
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Write the built-in world out as a file to start editing from
    Init {
        /// File to create
        #[arg(default_value = "whispering-woods.json")]
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { world } => commands::play::run(world.as_deref()),
        Commands::Check { world } => commands::check::run(world.as_deref()),
        Commands::List { world } => commands::list::run(world.as_deref()),
        Commands::Map { world } => commands::map::run(world.as_deref()),
        Commands::Route { from, to, world } => {
            commands::route::run(world.as_deref(), from.as_deref(), to.as_deref())
        }
        Commands::Init { file } => commands::init::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
