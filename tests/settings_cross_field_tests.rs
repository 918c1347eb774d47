use cardforge::settings::validate_settings;
use cardforge::{ChartType, IssueCode, Severity};
use serde_json::json;

#[test]
fn region_maps_require_a_region() {
    let report = validate_settings(ChartType::Map, &json!({ "map.type": "region" }));
    assert!(!report.is_valid());
    let paths: Vec<&str> = report.errors().map(|issue| issue.path.as_str()).collect();
    assert!(paths.contains(&"/map.region"));

    let report = validate_settings(ChartType::Map, &json!({
        "map.type": "region",
        "map.region": "us_states",
    }));
    assert!(report.is_valid(), "{report}");
}

#[test]
fn pin_maps_require_coordinate_columns() {
    let report = validate_settings(ChartType::Map, &json!({
        "map.type": "pin",
        "map.latitude_column": "lat",
    }));
    assert!(!report.is_valid());
    let paths: Vec<&str> = report.errors().map(|issue| issue.path.as_str()).collect();
    assert!(paths.contains(&"/map.longitude_column"));
    assert!(!paths.contains(&"/map.latitude_column"));
}

#[test]
fn gauge_segments_must_be_nonempty_and_well_formed() {
    let report = validate_settings(ChartType::Gauge, &json!({ "gauge.segments": [] }));
    assert!(!report.is_valid());
    assert!(report.errors().any(|issue| issue.code == IssueCode::Constraint));

    let report = validate_settings(ChartType::Gauge, &json!({
        "gauge.segments": [
            { "min": 0, "max": 50, "color": "#ed6e6e", "label": "low" },
            { "min": 50, "max": 100, "color": "#84bb4c" },
        ],
    }));
    assert!(report.is_valid(), "{report}");

    let report = validate_settings(ChartType::Gauge, &json!({
        "gauge.segments": [{ "min": 50, "max": 10, "color": "#84bb4c" }],
    }));
    assert!(!report.is_valid());
}

#[test]
fn show_goal_requires_a_goal_value() {
    let report = validate_settings(ChartType::Bar, &json!({ "graph.show_goal": true }));
    assert!(!report.is_valid());
    assert_eq!(report.issues[0].path, "/graph.goal_value");

    let report = validate_settings(ChartType::Bar, &json!({
        "graph.show_goal": true,
        "graph.goal_value": 1000,
        "graph.goal_label": "Target",
    }));
    assert!(report.is_valid(), "{report}");
}

#[test]
fn waterfall_total_color_without_total_bar_is_a_warning() {
    let report = validate_settings(ChartType::Waterfall, &json!({
        "waterfall.show_total": false,
        "waterfall.total_color": "#4c5773",
    }));
    // A warning, not an error: the payload is still accepted.
    assert!(report.is_valid());
    let warning = report.warnings().next().unwrap();
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(warning.path, "/waterfall.total_color");
}

#[test]
fn scatter_bubble_must_name_a_column() {
    let report = validate_settings(ChartType::Scatter, &json!({ "scatter.bubble": "  " }));
    assert!(!report.is_valid());
    assert_eq!(report.issues[0].code, IssueCode::Constraint);
}
