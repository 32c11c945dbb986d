use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};

const STDIN_MARKER: &str = "-";

/// Read a whole input file, or stdin when given `-`
pub fn read_input(input: &str) -> Result<Vec<u8>> {
    if input == STDIN_MARKER {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("could not read stdin")?;
        Ok(buf)
    } else {
        fs::read(input).with_context(|| format!("could not read {input}"))
    }
}
