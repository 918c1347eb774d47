use serde_json::Value;
use tracing::debug;

use crate::error::{ForgeError, ForgeResult};
use crate::registry::{ChartSpec, ChartType, chart_spec};
use crate::report::{Issue, IssueCode, ValidationReport};

use super::constraints::check_cross_field;
use super::domains::check_domain;

/// Validates candidate visualization settings for one chart type.
///
/// The validator never mutates the payload; normalization of settings is not
/// needed because the product accepts sparse settings objects as-is.
#[derive(Debug, Clone, Copy)]
pub struct SettingsValidator {
    chart: ChartType,
    spec: &'static ChartSpec,
}

impl SettingsValidator {
    #[must_use]
    pub fn new(chart: ChartType) -> Self {
        Self {
            chart,
            spec: chart_spec(chart),
        }
    }

    #[must_use]
    pub fn chart(&self) -> ChartType {
        self.chart
    }

    /// Collects every issue in the settings object: unknown keys, domain
    /// mismatches, missing required keys and cross-field constraint breaks.
    #[must_use]
    pub fn validate(&self, settings: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();

        let Some(entries) = settings.as_object() else {
            report.push(Issue::error(
                IssueCode::InvalidValue,
                "/",
                "visualization settings must be a JSON object",
            ));
            return report;
        };

        for (key, value) in entries {
            let Some(key_spec) = self.spec.key_spec(key) else {
                report.push(Issue::error(
                    IssueCode::UnknownKey,
                    format!("/{key}"),
                    format!("unknown setting for {} charts", self.chart),
                ));
                continue;
            };
            if value.is_null() {
                // Explicit null means "unset"; required-key handling below
                // treats it the same as absent.
                continue;
            }
            if let Err(message) = check_domain(key_spec.domain, value) {
                report.push(Issue::error(
                    IssueCode::InvalidValue,
                    format!("/{key}"),
                    message,
                ));
            }
        }

        for key_spec in self.spec.required_keys() {
            let missing = entries
                .get(key_spec.key)
                .is_none_or(|value| value.is_null());
            if missing {
                report.push(Issue::error(
                    IssueCode::MissingKey,
                    format!("/{}", key_spec.key),
                    format!("{} charts require {}", self.chart, key_spec.key),
                ));
            }
        }

        check_cross_field(self.chart, entries, &mut report);

        debug!(
            chart = %self.chart,
            issue_count = report.issues.len(),
            "validated visualization settings"
        );
        report
    }
}

/// One-shot settings validation.
#[must_use]
pub fn validate_settings(chart: ChartType, settings: &Value) -> ValidationReport {
    SettingsValidator::new(chart).validate(settings)
}

/// Validates and converts failures into a [`ForgeError`] for callers that
/// only need pass/fail.
pub fn check_settings(chart: ChartType, settings: &Value) -> ForgeResult<()> {
    let report = validate_settings(chart, settings);
    if report.is_valid() {
        Ok(())
    } else {
        Err(ForgeError::InvalidSettings(report))
    }
}
