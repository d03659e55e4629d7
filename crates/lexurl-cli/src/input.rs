use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// URLs given on the command line followed by those read from `input`
/// (one per line, `-` for stdin). Blank lines are skipped, lines are trimmed.
pub fn collect_urls(args: Vec<String>, input: Option<&Path>) -> Result<Vec<String>> {
    let mut urls = args;

    if let Some(path) = input {
        let read = if path == Path::new("-") {
            read_lines(io::stdin().lock())
        } else {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            read_lines(BufReader::new(file))
        };
        urls.extend(read.with_context(|| format!("reading urls from {}", path.display()))?);
    }

    Ok(urls)
}

fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            urls.push(trimmed.to_string());
        }
    }
    Ok(urls)
}
