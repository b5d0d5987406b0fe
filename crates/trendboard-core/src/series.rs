use tracing::debug;
use trendboard_parser::RawObservation;

use crate::reshape::reshape;
use crate::types::{AggregatedWeek, FilterSelection};

/// Orders aggregated weeks by ascending fiscal week and drops weeks that
/// carry no values at all. No further aggregation happens here; this is the
/// sequence handed to the rendering collaborator.
pub fn assemble(mut weeks: Vec<AggregatedWeek>) -> Vec<AggregatedWeek> {
    weeks.retain(AggregatedWeek::has_observations);
    weeks.sort_by_key(|week| week.fiscal_week);
    weeks
}

/// The full pipeline: filter, regroup, aggregate, order. A pure function of
/// (raw set, filter selection); identical inputs produce identical output, so
/// callers may memoize freely.
pub fn weekly_series(rows: &[RawObservation], filters: &FilterSelection) -> Vec<AggregatedWeek> {
    let series = assemble(reshape(rows, filters));
    debug!(
        input_rows = rows.len(),
        weeks = series.len(),
        "assembled weekly series"
    );
    series
}
