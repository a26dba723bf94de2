pub mod extract;
pub mod render;
pub mod swaparr;
pub mod test_connection;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read a file, or all of stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
