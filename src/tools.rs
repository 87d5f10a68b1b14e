use std::fs::File;
use std::io::Read;

use crate::errors::{Error, Result};

/// Reads the full contents of a file into memory.
pub fn read_binary(path: &str) -> Result<Vec<u8>> {
    let mut f = File::open(path).map_err(|e| Error::RomLoad(format!("{}: {}", path, e)))?;
    let mut buffer: Vec<u8> = Vec::new();
    f.read_to_end(&mut buffer)
        .map_err(|e| Error::RomLoad(format!("{}: {}", path, e)))?;
    Ok(buffer)
}
