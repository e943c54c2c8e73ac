// src/bin/event_hash.rs
//! Hash newline-delimited JSON events and flag duplicates
//!
//! Usage: event-hash [FILE]...   (reads stdin when no files are given)

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use dedup::{load_config, Deduplicator};
use serde_json::json;
use tracing::info;

#[derive(Debug, Default)]
struct Summary {
    unique: usize,
    duplicate: usize,
    invalid: usize,
}

fn main() -> Result<()> {
    dedup::logging::init();

    let conf = load_config();
    let hasher = Deduplicator::from_config(conf);
    info!("event-hash using {}", hasher.algorithm());

    let mut seen = HashSet::new();
    let mut summary = Summary::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        let stdin = io::stdin();
        process(stdin.lock(), &hasher, &mut seen, &mut summary, &mut out)?;
    } else {
        for path in &paths {
            let file = File::open(path).with_context(|| format!("cannot open {path}"))?;
            process(BufReader::new(file), &hasher, &mut seen, &mut summary, &mut out)
                .with_context(|| format!("failed while reading {path}"))?;
        }
    }

    out.flush()?;
    info!(
        unique = summary.unique,
        duplicate = summary.duplicate,
        invalid = summary.invalid,
        "done"
    );
    Ok(())
}

fn process<R: BufRead, W: Write>(
    reader: R,
    hasher: &Deduplicator,
    seen: &mut HashSet<String>,
    summary: &mut Summary,
    out: &mut W,
) -> Result<()> {
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let record = match hasher.hash(line.as_bytes()) {
            Ok(hash) => {
                let duplicate = !seen.insert(hash.clone());
                if duplicate {
                    summary.duplicate += 1;
                } else {
                    summary.unique += 1;
                }
                json!({ "line": line_no, "hash": hash, "duplicate": duplicate })
            }
            Err(e) => {
                summary.invalid += 1;
                json!({ "line": line_no, "error": e.to_string() })
            }
        };
        writeln!(out, "{record}")?;
    }
    Ok(())
}
