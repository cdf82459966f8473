//! Interactive play loop over stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::Path;

use woods_core::{Phase, Session};

pub fn run(world: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world)?;
    let mut session = Session::new(world);

    println!("{}", session.world().script().intro());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        // The status block belongs to regular turns only. After the ending
        // narrative the replay question stands on its own.
        if session.phase() == Phase::Playing {
            println!("{}", session.status());
        }

        print!("{}", session.prompt());
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let reply = session.process(&line);
        if !reply.is_empty() {
            println!("{reply}");
        }
        if session.phase() == Phase::Terminated {
            break;
        }
    }

    Ok(())
}
