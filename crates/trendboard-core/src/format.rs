use chrono::NaiveDate;

const NOT_AVAILABLE: &str = "N/A";

/// Currency label: `$`-prefixed, thousands-grouped, zero decimal places.
/// Absent values render as `N/A`.
pub fn currency(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("${}", group_thousands(value.round() as i64)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Percentage label: ratio scaled to percent with one decimal place. Absent
/// values render as `N/A`.
pub fn percent(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.1}%", value * 100.0),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Short calendar label (`Jan 05`) for a `DD/MM/YYYY` date string. Falls back
/// to the input unchanged when it does not denote a real calendar date.
pub fn short_date(date: &str) -> String {
    match parse_dmy(date) {
        Some(parsed) => parsed.format("%b %d").to_string(),
        None => date.to_string(),
    }
}

fn parse_dmy(date: &str) -> Option<NaiveDate> {
    let mut parts = date.splitn(3, '/');
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}
