use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::target::ParameterTarget;
use super::types::{ParameterType, TemplateTagType, TemporalUnit};

/// A card or dashboard filter parameter in its wire shape.
///
/// Candidate payloads usually omit `id`, `slug` and `target`; the
/// normalizers fill those in. Serialization skips every absent field so the
/// output matches what the product emits itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(rename = "type")]
    pub param_type: ParameterType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ParameterTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(rename = "isMultiSelect", default, skip_serializing_if = "Option::is_none")]
    pub is_multi_select: Option<bool>,
    #[serde(rename = "sectionId", default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal_units: Option<Vec<TemporalUnit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values_query_type: Option<ValuesQueryType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values_source_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values_source_config: Option<Value>,
}

impl Parameter {
    /// Minimal parameter as an author would write it: name and type only.
    #[must_use]
    pub fn new(name: impl Into<String>, param_type: ParameterType) -> Self {
        Self {
            id: None,
            name: name.into(),
            slug: None,
            param_type,
            target: None,
            default: None,
            required: None,
            is_multi_select: None,
            section_id: None,
            temporal_units: None,
            values_query_type: None,
            values_source_type: None,
            values_source_config: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: ParameterTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Multi-select state after applying the per-type default.
    #[must_use]
    pub fn effective_multi_select(&self) -> bool {
        self.param_type.effective_multi_select(self.is_multi_select)
    }

    /// A default counts as empty when it is null, `""` or `[]`.
    #[must_use]
    pub fn has_nonempty_default(&self) -> bool {
        match &self.default {
            None | Some(Value::Null) => false,
            Some(Value::String(text)) => !text.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(_) => true,
        }
    }
}

/// Template tag entry for a native query's `template-tags` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateTag {
    #[serde(rename = "type")]
    pub tag_type: TemplateTagType,
    pub name: String,
    pub id: String,
    #[serde(rename = "display-name")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Field reference for dimension tags, e.g. `["field", 42, null]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<Value>,
    #[serde(rename = "widget-type", default, skip_serializing_if = "Option::is_none")]
    pub widget_type: Option<String>,
}

/// How the filter widget sources its suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuesQueryType {
    None,
    List,
    Search,
}

/// Input widget an author asks for; maps onto [`ValuesQueryType`] on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiWidget {
    Input,
    Dropdown,
    Search,
}

impl UiWidget {
    #[must_use]
    pub fn values_query_type(self) -> ValuesQueryType {
        match self {
            Self::Input => ValuesQueryType::None,
            Self::Dropdown => ValuesQueryType::List,
            Self::Search => ValuesQueryType::Search,
        }
    }
}
