//! Author-facing card parameter plans.
//!
//! A plan is the simplified shape an author writes: a name, a filter type,
//! and optionally a widget, a values source and a bound database field.
//! [`build_card_parameters`] expands plans into the full wire payload,
//! generating every id, slug, target and template tag.

use std::collections::HashSet;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::{ForgeError, ForgeResult};
use crate::report::{Issue, IssueCode, ValidationReport};

use super::card::NormalizedCard;
use super::ident::new_card_parameter_id;
use super::model::{Parameter, TemplateTag, UiWidget, ValuesQueryType};
use super::slug::slugify;
use super::target::ParameterTarget;
use super::types::{ParameterFamily, ParameterType, TemplateTagType};
use super::values_source::ValuesSource;

/// Plan names double as template tag names inside `{{...}}`, so they must be
/// SQL-identifier-shaped.
static PLAN_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap_or_else(|_| unreachable!()));

/// Database field a field-filter plan binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRef {
    pub database_id: i64,
    pub table_id: i64,
    pub field_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardParameterPlan {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParameterType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_widget: Option<UiWidget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values_source: Option<ValuesSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldRef>,
}

impl CardParameterPlan {
    #[must_use]
    pub fn new(name: impl Into<String>, param_type: ParameterType) -> Self {
        Self {
            name: name.into(),
            param_type,
            display_name: None,
            default: None,
            required: None,
            ui_widget: None,
            values_source: None,
            field: None,
        }
    }

    fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// The dropdown-on-a-number quirk: the product stores the default of a
    /// static number dropdown as a singleton string array.
    fn number_dropdown_default(&self) -> Option<Value> {
        let default = self.default.as_ref()?;
        let is_number_dropdown = self.param_type == ParameterType::NumberEq
            && self.ui_widget == Some(UiWidget::Dropdown)
            && matches!(self.values_source, Some(ValuesSource::Static { .. }));
        if is_number_dropdown && !default.is_array() {
            let text = match default {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            Some(json!([text]))
        } else {
            Some(default.clone())
        }
    }
}

fn search_widget_allowed(param_type: ParameterType) -> bool {
    matches!(
        param_type,
        ParameterType::Category
            | ParameterType::StringContains
            | ParameterType::StringStartsWith
            | ParameterType::StringEndsWith
    )
}

#[must_use]
pub fn validate_card_parameter_plans(plans: &[CardParameterPlan]) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut seen_names: HashSet<&str> = HashSet::new();

    for (index, plan) in plans.iter().enumerate() {
        if !PLAN_NAME_RE.is_match(&plan.name) {
            report.push(Issue::error(
                IssueCode::InvalidValue,
                format!("/{index}/name"),
                format!(
                    "parameter name {:?} must start with a letter and contain only letters, numbers and underscores",
                    plan.name
                ),
            ));
        } else if !seen_names.insert(&plan.name) {
            report.push(Issue::error(
                IssueCode::DuplicateName,
                format!("/{index}/name"),
                format!("duplicate parameter name {:?}", plan.name),
            ));
        }

        match plan.ui_widget {
            Some(UiWidget::Search) if !search_widget_allowed(plan.param_type) => {
                report.push(Issue::error(
                    IssueCode::IncompatibleWidget,
                    format!("/{index}/ui_widget"),
                    format!(
                        "search widget is not compatible with type {:?}",
                        plan.param_type.as_str()
                    ),
                ));
            }
            Some(UiWidget::Dropdown)
                if plan.param_type.family() == ParameterFamily::Date
                    && plan.param_type != ParameterType::DateSingle =>
            {
                report.push(Issue::error(
                    IssueCode::IncompatibleWidget,
                    format!("/{index}/ui_widget"),
                    format!(
                        "dropdown widget is not compatible with date field filter type {:?}",
                        plan.param_type.as_str()
                    ),
                ));
            }
            _ => {}
        }

        if plan.required == Some(true) && plan.default.is_none() {
            report.push(Issue::error(
                IssueCode::Constraint,
                format!("/{index}/default"),
                "required parameters must have a default value",
            ));
        }

        if plan.param_type.is_field_filter() && plan.field.is_none() {
            report.push(Issue::error(
                IssueCode::Constraint,
                format!("/{index}/field"),
                format!(
                    "field filter type {:?} requires a bound database field",
                    plan.param_type.as_str()
                ),
            ));
        }

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

/// Expands plans into the full card payload (parameters + template tags).
pub fn build_card_parameters(plans: &[CardParameterPlan]) -> ForgeResult<NormalizedCard> {
    let report = validate_card_parameter_plans(plans);
    if !report.is_valid() {
        return Err(ForgeError::InvalidParameters(report));
    }

    let mut parameters = Vec::with_capacity(plans.len());
    let mut template_tags = IndexMap::new();

    for plan in plans {
        let id = new_card_parameter_id();
        let is_field_filter = plan.param_type.is_field_filter();
        let target = if is_field_filter {
            ParameterTarget::Dimension {
                tag: plan.name.clone(),
            }
        } else {
            ParameterTarget::Variable {
                tag: plan.name.clone(),
            }
        };

        let values_query_type = plan
            .ui_widget
            .map_or(ValuesQueryType::None, UiWidget::values_query_type);

        let mut parameter = Parameter {
            id: Some(id.clone()),
            name: plan.display_name().to_owned(),
            slug: Some(slugify(&plan.name)),
            param_type: plan.param_type,
            target: Some(target),
            default: plan.number_dropdown_default(),
            required: plan.required,
            is_multi_select: None,
            section_id: None,
            temporal_units: None,
            values_query_type: Some(values_query_type),
            values_source_type: None,
            values_source_config: None,
        };

        if matches!(values_query_type, ValuesQueryType::List | ValuesQueryType::Search) {
            if let Some(source) = &plan.values_source {
                let (source_type, source_config) = source.to_card_wire_config();
                parameter.values_source_type = source_type.map(str::to_owned);
                parameter.values_source_config = source_config;
            }
        }

        let tag = plan_template_tag(plan, &id);
        template_tags.insert(tag.name.clone(), tag);
        parameters.push(parameter);
    }

    debug!(plan_count = plans.len(), "built card parameters from plans");
    Ok(NormalizedCard {
        parameters,
        template_tags,
    })
}

fn plan_template_tag(plan: &CardParameterPlan, id: &str) -> TemplateTag {
    let mut tag = TemplateTag {
        tag_type: TemplateTagType::Text,
        name: plan.name.clone(),
        id: id.to_owned(),
        display_name: plan.display_name().to_owned(),
        default: plan.number_dropdown_default(),
        required: plan.required,
        dimension: None,
        widget_type: None,
    };

    if plan.param_type.is_field_filter() {
        tag.tag_type = TemplateTagType::Dimension;
        // validate_card_parameter_plans guarantees the field is present
        if let Some(field) = plan.field {
            tag.dimension = Some(json!(["field", field.field_id, null]));
        }
        tag.widget_type = Some(plan.param_type.as_str().to_owned());
    } else {
        tag.tag_type = match plan.param_type {
            ParameterType::NumberEq => TemplateTagType::Number,
            ParameterType::DateSingle => TemplateTagType::Date,
            _ => TemplateTagType::Text,
        };
    }

    tag
}
