//! Stats command implementation.

use super::CommandError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use wordhoard_core::{Config, DictionaryIndex, Statistics};

/// Statistics plus the per-tag definition counts.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    /// Summary figures.
    #[serde(flatten)]
    pub statistics: Statistics,
    /// Definitions per part of speech in use.
    pub usage: BTreeMap<String, usize>,
}

impl StatsReport {
    /// Builds the report for `index`.
    pub fn new(index: &DictionaryIndex) -> Self {
        Self {
            statistics: index.statistics(),
            usage: index
                .usage()
                .map(|(pos, count)| (pos.as_str().to_string(), count))
                .collect(),
        }
    }
}

/// Runs the stats command.
pub fn run(path: &Path, config: Config, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (_, index) = super::open_dictionary(path, config)?;
    let report = StatsReport::new(&index);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => {
            println!("{}", report.statistics);
            if !report.usage.is_empty() {
                println!();
                println!("usage:");
                for (tag, count) in &report.usage {
                    println!("  {tag:<8} {count}");
                }
            }
        }
        other => {
            return Err(CommandError::UnknownFormat {
                format: other.to_string(),
            }
            .into())
        }
    }

    Ok(())
}
