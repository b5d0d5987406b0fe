use trendboard_core::format::{currency, percent, short_date};

#[test]
fn currency_groups_thousands_with_no_decimals() {
    assert_eq!(currency(Some(1234567.0)), "$1,234,567");
    assert_eq!(currency(Some(12450.75)), "$12,451");
    assert_eq!(currency(Some(999.4)), "$999");
    assert_eq!(currency(Some(0.0)), "$0");
}

#[test]
fn currency_keeps_the_sign_inside_the_prefix() {
    assert_eq!(currency(Some(-1234.0)), "$-1,234");
}

#[test]
fn currency_renders_absent_as_not_available() {
    assert_eq!(currency(None), "N/A");
}

#[test]
fn percent_scales_the_ratio_to_one_decimal() {
    assert_eq!(percent(Some(0.245)), "24.5%");
    assert_eq!(percent(Some(1.0)), "100.0%");
    assert_eq!(percent(Some(0.0)), "0.0%");
    assert_eq!(percent(None), "N/A");
}

#[test]
fn short_date_renders_day_month_year_strings() {
    assert_eq!(short_date("05/01/2025"), "Jan 05");
    assert_eq!(short_date("13/10/2025"), "Oct 13");
}

#[test]
fn short_date_falls_back_to_the_original_text() {
    assert_eq!(short_date("Week 4"), "Week 4");
    assert_eq!(short_date("2025-01-05"), "2025-01-05");
    assert_eq!(short_date("32/01/2025"), "32/01/2025");
    assert_eq!(short_date("05/01"), "05/01");
}
