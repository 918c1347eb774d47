//! Dashboard parameter validation and normalization.
//!
//! Dashboards accept the same wire shape as cards plus `sectionId` routing
//! and location filters. Location types are stored as their string twins;
//! only `sectionId` remembers they are locations. Dashboard ids are 8-char
//! alphanumeric strings rather than UUIDs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ForgeError, ForgeResult};
use crate::report::{Issue, IssueCode, ValidationReport};

use super::ident::new_dashboard_parameter_id;
use super::model::Parameter;
use super::slug::{slugify, unique_slug};
use super::types::{ParameterFamily, ParameterType, TemporalUnit};
use super::values_source::ValuesSource;

/// `tab` is reserved for dashboard tab routing in the product's URLs.
const RESERVED_NAMES: [&str; 1] = ["tab"];

#[must_use]
pub fn validate_dashboard_parameters(parameters: &[Parameter]) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut seen_names: HashSet<&str> = HashSet::new();

    for (index, param) in parameters.iter().enumerate() {
        if param.name.trim().is_empty() {
            report.push(Issue::error(
                IssueCode::MissingKey,
                format!("/{index}/name"),
                "parameter name must not be empty",
            ));
        } else if RESERVED_NAMES.contains(&param.name.as_str()) {
            report.push(Issue::error(
                IssueCode::ReservedName,
                format!("/{index}/name"),
                format!("name {:?} is reserved for dashboard tabs", param.name),
            ));
        } else if !seen_names.insert(&param.name) {
            report.push(Issue::error(
                IssueCode::DuplicateName,
                format!("/{index}/name"),
                format!("duplicate parameter name {:?}", param.name),
            ));
        }

        if let Some(id) = param.id.as_deref().filter(|id| !id.is_empty()) {
            if !seen_ids.insert(id) {
                report.push(Issue::error(
                    IssueCode::DuplicateId,
                    format!("/{index}/id"),
                    format!("duplicate parameter id {id:?}"),
                ));
            }
        }

        check_multi_select(index, param, &mut report);
        check_temporal_units(index, param, &mut report);
        check_default_format(index, param, &mut report);
        check_required_default(index, param, &mut report);

        if param.param_type == ParameterType::TemporalUnit
            && param
                .section_id
                .as_deref()
                .is_some_and(|section| section != "temporal-unit")
        {
            report.push(Issue::error(
                IssueCode::Constraint,
                format!("/{index}/sectionId"),
                "temporal-unit parameters must have sectionId \"temporal-unit\"",
            ));
        }
    }

    report
}

fn check_multi_select(index: usize, param: &Parameter, report: &mut ValidationReport) {
    if param.effective_multi_select() && param.param_type.forbids_multi_select() {
        report.push(Issue::error(
            IssueCode::Constraint,
            format!("/{index}/isMultiSelect"),
            format!(
                "multi-select is not supported for parameter type {:?}",
                param.param_type.as_str()
            ),
        ));
    }
}

fn check_temporal_units(index: usize, param: &Parameter, report: &mut ValidationReport) {
    if param.param_type != ParameterType::TemporalUnit {
        return;
    }
    if param
        .temporal_units
        .as_ref()
        .is_none_or(|units| units.is_empty())
    {
        report.push(Issue::error(
            IssueCode::Constraint,
            format!("/{index}/temporal_units"),
            "temporal-unit parameters require a non-empty temporal_units array",
        ));
    }
}

fn is_numberish(value: &Value) -> bool {
    value.is_number()
}

fn is_idish(value: &Value) -> bool {
    value.is_string() || value.is_number()
}

fn check_default_format(index: usize, param: &Parameter, report: &mut ValidationReport) {
    let Some(default) = param.default.as_ref().filter(|value| !value.is_null()) else {
        return;
    };
    let path = format!("/{index}/default");
    let multi = param.effective_multi_select();

    if multi && !default.is_array() {
        report.push(Issue::error(
            IssueCode::InvalidValue,
            path,
            "multi-select parameter default must be an array",
        ));
        return;
    }

    let push = |report: &mut ValidationReport, message: &str| {
        report.push(Issue::error(
            IssueCode::InvalidValue,
            format!("/{index}/default"),
            message,
        ));
    };

    match param.param_type.family() {
        ParameterFamily::Number => {
            if multi {
                let ok = default
                    .as_array()
                    .is_some_and(|items| items.iter().all(is_numberish));
                if !ok {
                    push(report, "multi-select number parameter default must be an array of numbers");
                }
            } else if param.param_type == ParameterType::NumberBetween {
                let ok = default
                    .as_array()
                    .is_some_and(|items| items.len() == 2 && items.iter().all(is_numberish));
                if !ok {
                    push(report, "number/between default must be an array of two numbers");
                }
            } else if !default.is_number() {
                push(report, "number parameter default must be a number");
            }
        }
        ParameterFamily::Date => {
            // Date types never multi-select; the flag check above already
            // fired if one slipped through.
            if !default.is_string() {
                push(report, "date parameter default must be a string");
            }
        }
        ParameterFamily::Id => {
            if multi {
                let ok = default
                    .as_array()
                    .is_some_and(|items| items.iter().all(is_idish));
                if !ok {
                    push(report, "multi-select id parameter default must be an array of strings or numbers");
                }
            } else if !is_idish(default) {
                push(report, "id parameter default must be a string or number");
            }
        }
        ParameterFamily::Text | ParameterFamily::Location | ParameterFamily::Category => {
            if multi {
                let ok = default
                    .as_array()
                    .is_some_and(|items| items.iter().all(Value::is_string));
                if !ok {
                    push(report, "multi-select text parameter default must be an array of strings");
                }
            } else if !default.is_string() {
                push(report, "text parameter default must be a string");
            }
        }
        ParameterFamily::TemporalUnit => {
            let ok = default
                .as_str()
                .is_some_and(|unit| TemporalUnit::parse(unit).is_ok());
            if !ok {
                push(report, "temporal-unit parameter default must be a valid temporal unit");
            }
        }
    }
}

fn check_required_default(index: usize, param: &Parameter, report: &mut ValidationReport) {
    if param.required != Some(true) {
        return;
    }
    if !param.has_nonempty_default() {
        report.push(Issue::error(
            IssueCode::Constraint,
            format!("/{index}/default"),
            "required parameters must have a non-empty default value",
        ));
    }
}

/// Validates, then fills ids and slugs, routes section ids and translates
/// location filters to their wire twins.
pub fn normalize_dashboard_parameters(
    parameters: Vec<Parameter>,
) -> ForgeResult<Vec<Parameter>> {
    let report = validate_dashboard_parameters(&parameters);
    if !report.is_valid() {
        return Err(ForgeError::InvalidParameters(report));
    }

    let mut rng = rand::thread_rng();
    let mut existing_ids: HashSet<String> = parameters
        .iter()
        .filter_map(|param| param.id.clone())
        .filter(|id| !id.is_empty())
        .collect();
    let mut taken_slugs = HashSet::new();

    let mut normalized = Vec::with_capacity(parameters.len());
    for mut param in parameters {
        if param.id.as_deref().is_none_or(str::is_empty) {
            let mut id = new_dashboard_parameter_id(&mut rng);
            while existing_ids.contains(&id) {
                id = new_dashboard_parameter_id(&mut rng);
            }
            existing_ids.insert(id.clone());
            param.id = Some(id);
        }

        param.slug = Some(unique_slug(&slugify(&param.name), &mut taken_slugs));

        // sectionId keeps the location identity even after the type is
        // rewritten to its string twin.
        let section = param.param_type.section_id();
        if param.section_id.is_none() {
            param.section_id = Some(section.to_owned());
        }
        param.param_type = param.param_type.as_string_type();

        normalized.push(param);
    }

    debug!(parameter_count = normalized.len(), "normalized dashboard parameters");
    Ok(normalized)
}

/// Author-facing dashboard parameter plan, the simplified shape accepted by
/// dashboard tooling. Ids are only set when updating an existing filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardParameterPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParameterType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(rename = "isMultiSelect", default, skip_serializing_if = "Option::is_none")]
    pub is_multi_select: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal_units: Option<Vec<TemporalUnit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values_source: Option<ValuesSource>,
}

impl DashboardParameterPlan {
    #[must_use]
    pub fn new(name: impl Into<String>, param_type: ParameterType) -> Self {
        Self {
            id: None,
            name: name.into(),
            param_type,
            default: None,
            required: None,
            is_multi_select: None,
            temporal_units: None,
            values_source: None,
        }
    }

    fn as_parameter(&self) -> Parameter {
        Parameter {
            id: self.id.clone(),
            name: self.name.clone(),
            slug: None,
            param_type: self.param_type,
            target: None,
            default: self.default.clone(),
            required: self.required,
            is_multi_select: self.is_multi_select,
            section_id: None,
            temporal_units: self.temporal_units.clone(),
            values_query_type: None,
            values_source_type: None,
            values_source_config: None,
        }
    }
}

#[must_use]
pub fn validate_dashboard_parameter_plans(plans: &[DashboardParameterPlan]) -> ValidationReport {
    let wire: Vec<Parameter> = plans.iter().map(DashboardParameterPlan::as_parameter).collect();
    let mut report = validate_dashboard_parameters(&wire);

    for (index, plan) in plans.iter().enumerate() {
        if let Some(source) = &plan.values_source {
            source.validate(&format!("/{index}/values_source"), &mut report);
            if matches!(source, ValuesSource::Connected) && !plan.param_type.is_field_filter() {
                report.push(Issue::error(
                    IssueCode::Constraint,
                    format!("/{index}/values_source"),
                    "connected values sources only work for field filters",
                ));
            }
        }
    }

    report
}

/// Expands plans into wire-shaped dashboard parameters, deriving the values
/// source wiring on top of [`normalize_dashboard_parameters`].
pub fn build_dashboard_parameters(
    plans: &[DashboardParameterPlan],
) -> ForgeResult<Vec<Parameter>> {
    let report = validate_dashboard_parameter_plans(plans);
    if !report.is_valid() {
        return Err(ForgeError::InvalidParameters(report));
    }

    let mut wire: Vec<Parameter> = plans.iter().map(DashboardParameterPlan::as_parameter).collect();
    for (plan, param) in plans.iter().zip(&mut wire) {
        let query_type = plan
            .values_source
            .as_ref()
            .map_or(super::model::ValuesQueryType::None, ValuesSource::values_query_type);
        param.values_query_type = Some(query_type);
        if let Some(source) = &plan.values_source {
            if !matches!(source, ValuesSource::Connected) {
                let (source_type, source_config) = source.to_wire_config();
                param.values_source_type = source_type.map(str::to_owned);
                param.values_source_config = source_config;
            }
        }
    }

    normalize_dashboard_parameters(wire)
}
