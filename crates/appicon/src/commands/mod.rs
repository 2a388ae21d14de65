pub mod generate;
pub mod list;
pub mod preview;

use std::fs;
use std::path::Path;

/// Read the input image. Undecodable input is left for the pipeline to reject.
fn read_source(input: &Path) -> Result<Vec<u8>, String> {
    fs::read(input).map_err(|e| format!("Failed to read {}: {}", input.display(), e))
}
