use std::collections::BTreeMap;

use trendboard_parser::{ComparisonAxis, Metric, RawObservation};

use crate::normalize::normalize;
use crate::types::{AggregatedWeek, FilterSelection};

/// Streaming sum/count accumulator. An accumulator that saw no values
/// reduces to `None`, never zero.
#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    sum: f64,
    count: u32,
}

impl Accumulator {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn sum(&self) -> Option<f64> {
        (self.count > 0).then_some(self.sum)
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / f64::from(self.count))
    }
}

/// One accumulator per (metric, axis) target field of the wide row.
#[derive(Debug, Default)]
struct WeekAccumulator {
    sales_focus: Accumulator,
    sales_comparison: Accumulator,
    asp_focus: Accumulator,
    asp_comparison: Accumulator,
    margin_focus: Accumulator,
    margin_comparison: Accumulator,
}

impl WeekAccumulator {
    fn slot(&mut self, metric: Metric, axis: ComparisonAxis) -> &mut Accumulator {
        match (metric, axis) {
            (Metric::Sales, ComparisonAxis::Focus) => &mut self.sales_focus,
            (Metric::Sales, ComparisonAxis::Comparison) => &mut self.sales_comparison,
            (Metric::Asp, ComparisonAxis::Focus) => &mut self.asp_focus,
            (Metric::Asp, ComparisonAxis::Comparison) => &mut self.asp_comparison,
            (Metric::GpPercent, ComparisonAxis::Focus) => &mut self.margin_focus,
            (Metric::GpPercent, ComparisonAxis::Comparison) => &mut self.margin_comparison,
        }
    }
}

/// Filters and regroups long-format rows into one wide row per fiscal week.
/// Sales fields reduce by sum, asp and margin fields by mean; observations
/// that fail normalization contribute neither value nor count. The output is
/// an unordered intermediate that may still contain weeks with no surviving
/// values; `series::assemble` owns ordering and the completeness trim.
pub fn reshape(rows: &[RawObservation], filters: &FilterSelection) -> Vec<AggregatedWeek> {
    // Representative end date per week comes from the unfiltered set; the
    // first occurrence in input order wins regardless of the active filters.
    let mut end_dates: BTreeMap<u32, &str> = BTreeMap::new();
    for row in rows {
        end_dates.entry(row.fiscal_week).or_insert(&row.end_date);
    }

    let mut weeks: BTreeMap<u32, WeekAccumulator> = BTreeMap::new();
    for row in rows {
        if !filters.banner.matches(&row.banner) || !filters.pack_size.matches(&row.pack_size) {
            continue;
        }

        let accumulator = weeks.entry(row.fiscal_week).or_default();
        if let Some(value) = normalize(&row.value) {
            accumulator.slot(row.metric, row.comparison).push(value);
        }
    }

    weeks
        .into_iter()
        .map(|(fiscal_week, accumulator)| AggregatedWeek {
            fiscal_week,
            period_end: end_dates
                .get(&fiscal_week)
                .copied()
                .filter(|date| !date.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Week {fiscal_week}")),
            sales_focus: accumulator.sales_focus.sum(),
            sales_comparison: accumulator.sales_comparison.sum(),
            asp_focus: accumulator.asp_focus.mean(),
            asp_comparison: accumulator.asp_comparison.mean(),
            margin_focus: accumulator.margin_focus.mean(),
            margin_comparison: accumulator.margin_comparison.mean(),
        })
        .collect()
}
