use cardforge::settings::{check_settings, validate_settings};
use cardforge::{ChartType, IssueCode};
use serde_json::json;

#[test]
fn settings_must_be_an_object() {
    let report = validate_settings(ChartType::Table, &json!(["card.title"]));
    assert!(!report.is_valid());
    assert_eq!(report.issues[0].code, IssueCode::InvalidValue);
}

#[test]
fn empty_settings_are_valid_when_nothing_is_required() {
    for chart in [ChartType::Table, ChartType::Line, ChartType::Bar, ChartType::Scalar] {
        let report = validate_settings(chart, &json!({}));
        assert!(report.is_valid(), "{chart}: {report}");
    }
}

#[test]
fn unknown_keys_are_reported_per_chart_type() {
    let report = validate_settings(ChartType::Pie, &json!({
        "pie.dimension": "category",
        "pie.metric": "count",
        "gauge.segments": [],
    }));
    assert!(!report.is_valid());
    let issue = &report.issues[0];
    assert_eq!(issue.code, IssueCode::UnknownKey);
    assert_eq!(issue.path, "/gauge.segments");
}

#[test]
fn domain_mismatches_are_reported_with_paths() {
    let report = validate_settings(ChartType::Line, &json!({
        "graph.dimensions": ["created_at"],
        "graph.show_values": "yes",
        "graph.y_axis.scale": "cubic",
    }));
    assert!(!report.is_valid());
    let paths: Vec<&str> = report.errors().map(|issue| issue.path.as_str()).collect();
    assert!(paths.contains(&"/graph.show_values"));
    assert!(paths.contains(&"/graph.y_axis.scale"));
}

#[test]
fn explicit_null_counts_as_unset() {
    let report = validate_settings(ChartType::Line, &json!({
        "graph.goal_label": null,
        "stackable.stack_type": null,
    }));
    // stackable.stack_type is unknown on line charts even when null.
    assert!(!report.is_valid());
    assert_eq!(report.errors().count(), 1);
    assert_eq!(report.issues[0].path, "/stackable.stack_type");

    let report = validate_settings(ChartType::Bar, &json!({ "stackable.stack_type": null }));
    assert!(report.is_valid());
}

#[test]
fn required_keys_are_enforced() {
    let report = validate_settings(ChartType::Progress, &json!({}));
    assert!(!report.is_valid());
    assert_eq!(report.issues[0].code, IssueCode::MissingKey);
    assert_eq!(report.issues[0].path, "/progress.goal");

    let report = validate_settings(ChartType::Progress, &json!({
        "progress.goal": 10000,
        "progress.color": "#84bb4c",
    }));
    assert!(report.is_valid(), "{report}");
}

#[test]
fn funnel_and_pie_require_dimension_and_metric() {
    let report = validate_settings(ChartType::Funnel, &json!({ "funnel.type": "bar" }));
    let paths: Vec<&str> = report.errors().map(|issue| issue.path.as_str()).collect();
    assert!(paths.contains(&"/funnel.dimension"));
    assert!(paths.contains(&"/funnel.metric"));

    let report = validate_settings(ChartType::Pie, &json!({
        "pie.dimension": "status",
        "pie.metric": "count",
        "pie.percent_visibility": "legend",
    }));
    assert!(report.is_valid(), "{report}");
}

#[test]
fn color_keys_accept_only_hex_colors() {
    let report = validate_settings(ChartType::Waterfall, &json!({
        "waterfall.increase_color": "#84bb4c",
        "waterfall.decrease_color": "red",
    }));
    assert!(!report.is_valid());
    assert_eq!(report.errors().count(), 1);
    assert_eq!(report.issues[0].path, "/waterfall.decrease_color");
}

#[test]
fn check_settings_wraps_the_report_in_an_error() {
    assert!(check_settings(ChartType::Table, &json!({})).is_ok());

    let err = check_settings(ChartType::Progress, &json!({})).unwrap_err();
    assert!(err.to_string().contains("progress.goal"));
}
