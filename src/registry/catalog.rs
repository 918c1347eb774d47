//! Static allowed-key catalog, one [`ChartSpec`] per chart type.
//!
//! Key sets and enum value domains follow the product's visualization
//! settings reference. Shared key groups (card chrome, cartesian axes,
//! goal lines, stacking) are assembled per chart type below.

use std::sync::LazyLock;

use indexmap::IndexMap;

use super::chart_type::ChartType;
use super::key_spec::{ChartSpec, KeySpec, ValueDomain};

use ValueDomain::{
    Any, Bool, Color, Enum, FormattingRules, GaugeSegments, Integer, Number, SettingsMap, Text,
    TextArray,
};

static CATALOG: LazyLock<IndexMap<ChartType, ChartSpec>> = LazyLock::new(build_catalog);

/// Catalog entry for one chart type. Total over [`ChartType`].
#[must_use]
pub fn chart_spec(chart: ChartType) -> &'static ChartSpec {
    // build_catalog inserts every variant, so the lookup cannot miss.
    &CATALOG[&chart]
}

fn common_keys() -> Vec<KeySpec> {
    vec![
        KeySpec::optional("card.title", Text),
        KeySpec::optional("card.description", Text),
        KeySpec::optional("card.hide_empty", Bool),
        KeySpec::optional("column_settings", SettingsMap),
        KeySpec::optional("click_behavior", SettingsMap),
    ]
}

fn cartesian_keys() -> Vec<KeySpec> {
    vec![
        KeySpec::optional("graph.dimensions", TextArray),
        KeySpec::optional("graph.metrics", TextArray),
        KeySpec::optional("graph.series_order", Any),
        KeySpec::optional("series_settings", SettingsMap),
        KeySpec::optional("graph.x_axis.title_text", Text),
        KeySpec::optional("graph.x_axis.labels_enabled", Bool),
        KeySpec::optional("graph.x_axis.axis_enabled", Bool),
        KeySpec::optional("graph.y_axis.title_text", Text),
        KeySpec::optional("graph.y_axis.labels_enabled", Bool),
        KeySpec::optional("graph.y_axis.axis_enabled", Bool),
        KeySpec::optional("graph.y_axis.auto_range", Bool),
        KeySpec::optional("graph.y_axis.min", Number),
        KeySpec::optional("graph.y_axis.max", Number),
        KeySpec::optional("graph.y_axis.scale", Enum(&["linear", "pow", "log"])),
        KeySpec::optional("graph.show_values", Bool),
        KeySpec::optional(
            "graph.label_value_formatting",
            Enum(&["auto", "compact", "full"]),
        ),
        KeySpec::optional("legend.is_reversed", Bool),
    ]
}

fn goal_keys() -> Vec<KeySpec> {
    vec![
        KeySpec::optional("graph.show_goal", Bool),
        KeySpec::optional("graph.goal_value", Number),
        KeySpec::optional("graph.goal_label", Text),
    ]
}

fn stacking_keys() -> Vec<KeySpec> {
    vec![KeySpec::optional(
        "stackable.stack_type",
        Enum(&["stacked", "normalized"]),
    )]
}

fn line_keys() -> Vec<KeySpec> {
    vec![
        KeySpec::optional(
            "line.interpolate",
            Enum(&["linear", "cardinal", "step-after"]),
        ),
        KeySpec::optional("line.marker_enabled", Bool),
        KeySpec::optional("line.missing", Enum(&["zero", "none", "interpolate"])),
        KeySpec::optional("graph.show_trendline", Bool),
    ]
}

fn build_catalog() -> IndexMap<ChartType, ChartSpec> {
    let mut catalog = IndexMap::new();

    for chart in ChartType::ALL {
        let mut specs = common_keys();
        match chart {
            ChartType::Table => {
                specs.extend([
                    KeySpec::optional("table.columns", Any),
                    KeySpec::optional("table.pivot", Bool),
                    KeySpec::optional("table.pivot_column", Text),
                    KeySpec::optional("table.cell_column", Text),
                    KeySpec::optional("table.column_formatting", FormattingRules),
                ]);
            }
            ChartType::Line => {
                specs.extend(cartesian_keys());
                specs.extend(goal_keys());
                specs.extend(line_keys());
            }
            ChartType::Bar | ChartType::Row => {
                specs.extend(cartesian_keys());
                specs.extend(goal_keys());
                specs.extend(stacking_keys());
            }
            ChartType::Area => {
                specs.extend(cartesian_keys());
                specs.extend(goal_keys());
                specs.extend(stacking_keys());
                specs.extend(line_keys());
            }
            ChartType::Combo => {
                specs.extend(cartesian_keys());
                specs.extend(goal_keys());
                specs.extend(stacking_keys());
                specs.extend(line_keys());
            }
            ChartType::Pie => {
                specs.extend([
                    KeySpec::required("pie.dimension", Text),
                    KeySpec::required("pie.metric", Text),
                    KeySpec::optional("pie.show_legend", Bool),
                    KeySpec::optional("pie.show_total", Bool),
                    KeySpec::optional(
                        "pie.percent_visibility",
                        Enum(&["off", "legend", "inside", "both"]),
                    ),
                    KeySpec::optional("pie.decimal_places", Integer),
                    KeySpec::optional("pie.slice_threshold", Number),
                    KeySpec::optional("pie.colors", SettingsMap),
                ]);
            }
            ChartType::Object => {}
            ChartType::Funnel => {
                specs.extend([
                    KeySpec::required("funnel.dimension", Text),
                    KeySpec::required("funnel.metric", Text),
                    KeySpec::optional("funnel.type", Enum(&["funnel", "bar"])),
                ]);
            }
            ChartType::Gauge => {
                specs.extend([
                    KeySpec::optional("gauge.field", Text),
                    KeySpec::required("gauge.segments", GaugeSegments),
                ]);
            }
            ChartType::Progress => {
                specs.extend([
                    KeySpec::required("progress.goal", Number),
                    KeySpec::optional("progress.color", Color),
                ]);
            }
            ChartType::Sankey => {
                specs.extend([
                    KeySpec::optional("sankey.source", Text),
                    KeySpec::optional("sankey.target", Text),
                    KeySpec::optional("sankey.value", Text),
                    KeySpec::optional(
                        "sankey.node_align",
                        Enum(&["left", "right", "justify"]),
                    ),
                    KeySpec::optional("sankey.show_edge_labels", Bool),
                ]);
            }
            ChartType::Scalar => {
                specs.extend([
                    KeySpec::optional("scalar.field", Text),
                    KeySpec::optional("scalar.switch_positive_negative", Bool),
                    KeySpec::optional("scalar.decimals", Integer),
                    KeySpec::optional("scalar.prefix", Text),
                    KeySpec::optional("scalar.suffix", Text),
                    KeySpec::optional("scalar.scale", Number),
                ]);
            }
            ChartType::Scatter => {
                specs.extend(cartesian_keys());
                specs.push(KeySpec::optional("scatter.bubble", Text));
            }
            ChartType::SmartScalar => {
                specs.extend([
                    KeySpec::optional("scalar.field", Text),
                    KeySpec::optional("scalar.switch_positive_negative", Bool),
                    KeySpec::optional("scalar.comparisons", Any),
                ]);
            }
            ChartType::Map => {
                specs.extend([
                    KeySpec::required("map.type", Enum(&["region", "pin"])),
                    KeySpec::optional("map.region", Text),
                    KeySpec::optional("map.latitude_column", Text),
                    KeySpec::optional("map.longitude_column", Text),
                    KeySpec::optional("map.metric", Text),
                    KeySpec::optional("map.dimension", Text),
                    KeySpec::optional(
                        "map.pin_type",
                        Enum(&["tiles", "markers", "heat", "grid"]),
                    ),
                    KeySpec::optional("map.zoom", Number),
                    KeySpec::optional("map.center_latitude", Number),
                    KeySpec::optional("map.center_longitude", Number),
                ]);
            }
            ChartType::Waterfall => {
                specs.extend(cartesian_keys());
                specs.extend(goal_keys());
                specs.extend([
                    KeySpec::optional("waterfall.increase_color", Color),
                    KeySpec::optional("waterfall.decrease_color", Color),
                    KeySpec::optional("waterfall.total_color", Color),
                    KeySpec::optional("waterfall.show_total", Bool),
                ]);
            }
        }
        catalog.insert(chart, ChartSpec::from_specs(specs));
    }

    catalog
}
