use std::collections::HashSet;

use trendboard_parser::RawObservation;

use crate::types::{CategoryField, ALL_OPTION};

/// Derives the option list for a category select box: distinct non-empty
/// values observed for the field, de-duplicated case-insensitively with the
/// first-seen casing kept, sorted, and the `all` sentinel prepended. Literal
/// "all" values in the data are excluded so the sentinel never appears twice.
pub fn filter_options(rows: &[RawObservation], field: CategoryField) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut values: Vec<String> = Vec::new();

    for row in rows {
        let value = field.value_of(row);
        if value.is_empty() {
            continue;
        }
        let key = value.to_ascii_lowercase();
        if key == ALL_OPTION || !seen.insert(key) {
            continue;
        }
        values.push(value.to_string());
    }

    values.sort();

    let mut options = Vec::with_capacity(values.len() + 1);
    options.push(ALL_OPTION.to_string());
    options.extend(values);
    options
}
