use std::fs;
use std::path::Path;

use tracing::{info, warn};
use trendboard_parser::{parse_trend_table, ParsedTable, RawObservation};

use crate::error::Result;

/// Reads and parses a trend table export from disk. Rows that fail row-level
/// validation are dropped and logged; anything else surfaces as a single
/// human-readable `PipelineError`.
pub fn load_trend_file(path: impl AsRef<Path>) -> Result<Vec<RawObservation>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let ParsedTable {
        observations,
        skipped,
    } = parse_trend_table(&content)?;

    for row in &skipped {
        warn!(line = row.line, reason = %row.reason, "dropped malformed trend row");
    }
    info!(
        path = %path.display(),
        rows = observations.len(),
        skipped = skipped.len(),
        "loaded trend table"
    );

    Ok(observations)
}
