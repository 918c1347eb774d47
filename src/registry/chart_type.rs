use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, ForgeResult};

/// Visualization display types, named after the product's API vocabulary.
///
/// Three types are spelled differently in the product UI than on the wire:
/// `object` ("detail"), `scalar` ("number") and `smartscalar` ("trend").
/// [`ChartType::parse`] accepts either spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Table,
    Line,
    Bar,
    Combo,
    Pie,
    Row,
    Area,
    Object,
    Funnel,
    Gauge,
    Progress,
    Sankey,
    Scalar,
    Scatter,
    SmartScalar,
    Map,
    Waterfall,
}

impl ChartType {
    pub const ALL: [ChartType; 17] = [
        Self::Table,
        Self::Line,
        Self::Bar,
        Self::Combo,
        Self::Pie,
        Self::Row,
        Self::Area,
        Self::Object,
        Self::Funnel,
        Self::Gauge,
        Self::Progress,
        Self::Sankey,
        Self::Scalar,
        Self::Scatter,
        Self::SmartScalar,
        Self::Map,
        Self::Waterfall,
    ];

    /// Wire/API spelling of the display type.
    #[must_use]
    pub fn api_name(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Combo => "combo",
            Self::Pie => "pie",
            Self::Row => "row",
            Self::Area => "area",
            Self::Object => "object",
            Self::Funnel => "funnel",
            Self::Gauge => "gauge",
            Self::Progress => "progress",
            Self::Sankey => "sankey",
            Self::Scalar => "scalar",
            Self::Scatter => "scatter",
            Self::SmartScalar => "smartscalar",
            Self::Map => "map",
            Self::Waterfall => "waterfall",
        }
    }

    /// Spelling shown in the product UI. Differs from [`Self::api_name`] for
    /// `object`, `scalar` and `smartscalar`.
    #[must_use]
    pub fn ui_name(self) -> &'static str {
        match self {
            Self::Object => "detail",
            Self::Scalar => "number",
            Self::SmartScalar => "trend",
            other => other.api_name(),
        }
    }

    /// Parses a display type from either the API or the UI spelling.
    pub fn parse(input: &str) -> ForgeResult<Self> {
        let normalized = input.trim().to_ascii_lowercase();
        let resolved = Self::ALL.into_iter().find(|chart| {
            chart.api_name() == normalized || chart.ui_name() == normalized
        });
        resolved.ok_or_else(|| ForgeError::UnsupportedChartType {
            requested: input.to_owned(),
            supported: Self::supported_names().join(", "),
        })
    }

    /// Every accepted spelling, sorted, for error messages.
    #[must_use]
    pub fn supported_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Self::ALL.iter().map(|c| c.api_name()).collect();
        names.extend(
            Self::ALL
                .iter()
                .filter(|c| c.ui_name() != c.api_name())
                .map(|c| c.ui_name()),
        );
        names.sort_unstable();
        names
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}
