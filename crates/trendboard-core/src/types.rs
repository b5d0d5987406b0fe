// crates/trendboard-core/src/types.rs

use serde::{Deserialize, Serialize};
use trendboard_parser::RawObservation;

/// The option string a UI select box shows for "no constraint". Never a real
/// category value; the options helper strips look-alikes from the data.
pub const ALL_OPTION: &str = "all";

/// One fiscal week of the wide-format series. Each value field is
/// independently present or absent; `None` means no surviving observation,
/// which is distinct from a legitimate `Some(0.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedWeek {
    pub fiscal_week: u32,
    pub period_end: String,
    pub sales_focus: Option<f64>,
    pub sales_comparison: Option<f64>,
    pub asp_focus: Option<f64>,
    pub asp_comparison: Option<f64>,
    pub margin_focus: Option<f64>,
    pub margin_comparison: Option<f64>,
}

impl AggregatedWeek {
    /// True when at least one of the six value fields carries a value.
    pub fn has_observations(&self) -> bool {
        self.sales_focus.is_some()
            || self.sales_comparison.is_some()
            || self.asp_focus.is_some()
            || self.asp_comparison.is_some()
            || self.margin_focus.is_some()
            || self.margin_comparison.is_some()
    }
}

/// A categorical filter. `All` places no constraint and is distinct from
/// every real category value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Value(String),
}

impl CategoryFilter {
    /// Maps a UI option string back to the typed filter: the `all` sentinel
    /// in any casing means no constraint, anything else is an exact match.
    pub fn from_option(option: &str) -> Self {
        let trimmed = option.trim();
        if trimmed.eq_ignore_ascii_case(ALL_OPTION) {
            CategoryFilter::All
        } else {
            CategoryFilter::Value(trimmed.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Value(value) => value == category,
        }
    }
}

/// The active filter selection for one pipeline pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub banner: CategoryFilter,
    pub pack_size: CategoryFilter,
}

/// The categorical fields a filter can be derived for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Banner,
    PackSize,
}

impl CategoryField {
    pub fn value_of<'a>(&self, row: &'a RawObservation) -> &'a str {
        match self {
            CategoryField::Banner => &row.banner,
            CategoryField::PackSize => &row.pack_size,
        }
    }
}
