//! Cross-field constraints that a flat key catalog cannot express.

use serde_json::{Map, Value};

use crate::registry::ChartType;
use crate::report::{Issue, IssueCode, ValidationReport};

pub(super) fn check_cross_field(
    chart: ChartType,
    settings: &Map<String, Value>,
    report: &mut ValidationReport,
) {
    match chart {
        ChartType::Map => check_map(settings, report),
        ChartType::Gauge => check_gauge(settings, report),
        ChartType::Scatter => check_scatter(settings, report),
        ChartType::Waterfall => check_waterfall(settings, report),
        _ => {}
    }
    check_goal_line(settings, report);
}

fn present<'a>(settings: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    settings.get(key).filter(|value| !value.is_null())
}

fn check_map(settings: &Map<String, Value>, report: &mut ValidationReport) {
    let Some(map_type) = present(settings, "map.type").and_then(Value::as_str) else {
        return;
    };
    match map_type {
        "region" => {
            if present(settings, "map.region").is_none() {
                report.push(Issue::error(
                    IssueCode::Constraint,
                    "/map.region",
                    "region maps require map.region",
                ));
            }
        }
        "pin" => {
            for key in ["map.latitude_column", "map.longitude_column"] {
                if present(settings, key).is_none() {
                    report.push(Issue::error(
                        IssueCode::Constraint,
                        format!("/{key}"),
                        "pin maps require latitude and longitude columns",
                    ));
                }
            }
        }
        _ => {}
    }
}

fn check_gauge(settings: &Map<String, Value>, report: &mut ValidationReport) {
    if let Some(segments) = present(settings, "gauge.segments").and_then(Value::as_array) {
        if segments.is_empty() {
            report.push(Issue::error(
                IssueCode::Constraint,
                "/gauge.segments",
                "gauge.segments must not be empty",
            ));
        }
    }
}

fn check_scatter(settings: &Map<String, Value>, report: &mut ValidationReport) {
    if let Some(bubble) = present(settings, "scatter.bubble").and_then(Value::as_str) {
        if bubble.trim().is_empty() {
            report.push(Issue::error(
                IssueCode::Constraint,
                "/scatter.bubble",
                "scatter.bubble must name a column",
            ));
        }
    }
}

fn check_waterfall(settings: &Map<String, Value>, report: &mut ValidationReport) {
    let show_total = present(settings, "waterfall.show_total").and_then(Value::as_bool);
    if show_total == Some(false) && present(settings, "waterfall.total_color").is_some() {
        report.push(Issue::warning(
            IssueCode::Constraint,
            "/waterfall.total_color",
            "total color has no effect while waterfall.show_total is false",
        ));
    }
}

fn check_goal_line(settings: &Map<String, Value>, report: &mut ValidationReport) {
    let show_goal = present(settings, "graph.show_goal").and_then(Value::as_bool);
    if show_goal == Some(true) && present(settings, "graph.goal_value").is_none() {
        report.push(Issue::error(
            IssueCode::Constraint,
            "/graph.goal_value",
            "graph.show_goal requires graph.goal_value",
        ));
    }
}
