//! Reading subject lists and article text.

use crate::error::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Split a subject list into titles: one per line, trailing `\r` removed,
/// blank lines skipped.
pub fn parse_titles(contents: &str) -> Vec<String> {
    contents
        .split('\n')
        .enumerate()
        .filter_map(|(index, line)| {
            let title = line.strip_suffix('\r').unwrap_or(line);
            if title.trim().is_empty() {
                debug!(line = index + 1, "skipping blank line");
                None
            } else {
                Some(title.to_string())
            }
        })
        .collect()
}

/// Read a subject list file.
pub fn read_titles(path: &Path) -> Result<Vec<String>> {
    Ok(parse_titles(&fs::read_to_string(path)?))
}

/// Read a text file, or stdin when no path is given.
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
