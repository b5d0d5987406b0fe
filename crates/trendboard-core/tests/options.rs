use trendboard_core::options::filter_options;
use trendboard_core::types::{CategoryField, CategoryFilter, ALL_OPTION};
use trendboard_parser::{ComparisonAxis, Metric, RawObservation, RawValue};

fn row(banner: &str, pack_size: &str) -> RawObservation {
    RawObservation {
        article_id: "100001".to_string(),
        banner: banner.to_string(),
        pack_size: pack_size.to_string(),
        fiscal_week: 1,
        start_date: String::new(),
        end_date: "05/01/2025".to_string(),
        metric: Metric::Sales,
        comparison: ComparisonAxis::Focus,
        value: RawValue::Text("10".to_string()),
    }
}

#[test]
fn options_are_distinct_sorted_and_prefixed_with_all() {
    let rows = vec![
        row("Village", "Single"),
        row("Metro", "Multipack"),
        row("Metro", "Single"),
        row("Express", "Single"),
    ];

    let banners = filter_options(&rows, CategoryField::Banner);
    assert_eq!(banners, vec!["all", "Express", "Metro", "Village"]);

    let pack_sizes = filter_options(&rows, CategoryField::PackSize);
    assert_eq!(pack_sizes, vec!["all", "Multipack", "Single"]);
}

#[test]
fn dedup_is_case_insensitive_and_keeps_first_seen_casing() {
    let rows = vec![row("Metro", "Single"), row("METRO", "single"), row("metro", "SINGLE")];

    assert_eq!(filter_options(&rows, CategoryField::Banner), vec!["all", "Metro"]);
    assert_eq!(filter_options(&rows, CategoryField::PackSize), vec!["all", "Single"]);
}

#[test]
fn literal_all_values_are_excluded_from_the_data() {
    let rows = vec![row("All", "Single"), row("ALL", "Single"), row("Metro", "Single")];

    let banners = filter_options(&rows, CategoryField::Banner);
    assert_eq!(banners, vec!["all", "Metro"]);
}

#[test]
fn empty_category_values_are_ignored() {
    let rows = vec![row("", "Single"), row("Metro", "")];

    assert_eq!(filter_options(&rows, CategoryField::Banner), vec!["all", "Metro"]);
    assert_eq!(filter_options(&rows, CategoryField::PackSize), vec!["all", "Single"]);
}

#[test]
fn empty_raw_set_still_offers_the_all_option() {
    let rows: Vec<RawObservation> = Vec::new();
    assert_eq!(filter_options(&rows, CategoryField::Banner), vec![ALL_OPTION]);
}

#[test]
fn selected_option_maps_back_to_a_typed_filter() {
    assert_eq!(CategoryFilter::from_option("all"), CategoryFilter::All);
    assert_eq!(CategoryFilter::from_option(" ALL "), CategoryFilter::All);
    assert_eq!(
        CategoryFilter::from_option("Metro"),
        CategoryFilter::Value("Metro".to_string())
    );
}
