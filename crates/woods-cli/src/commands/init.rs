//! Write the built-in world out as an editable starting point.

use std::fs;
use std::path::Path;

use woods_core::content::WHISPERING_WOODS_JSON;

pub fn run(file: &Path) -> Result<(), String> {
    if file.exists() {
        return Err(format!("'{}' already exists", file.display()));
    }

    fs::write(file, WHISPERING_WOODS_JSON)
        .map_err(|e| format!("cannot write {}: {e}", file.display()))?;

    println!("Created world file '{}'", file.display());
    println!();
    println!("Get started:");
    println!("  woods play -w {}    # Play it", file.display());
    println!("  woods check -w {}   # Validate it after editing", file.display());
    println!("  woods map -w {}     # See the room layout", file.display());

    Ok(())
}
