//! Card parameter validation and normalization.
//!
//! Normalization fills auto-generated fields (UUID ids, name-derived slugs,
//! variable targets) and derives the native query's template-tag map so the
//! two stay wired together.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{ForgeError, ForgeResult};
use crate::report::{Issue, IssueCode, ValidationReport};

use super::ident::new_card_parameter_id;
use super::model::{Parameter, TemplateTag};
use super::slug::{slugify, unique_slug};
use super::target::ParameterTarget;
use super::types::{ParameterFamily, ParameterType, TemplateTagType};

/// Canonical card parameter payload: the parameter list plus the template
/// tags the card's native query must declare. Tag order follows parameter
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCard {
    pub parameters: Vec<Parameter>,
    pub template_tags: IndexMap<String, TemplateTag>,
}

/// String filter types where multi-select makes no sense on cards (substring
/// matching takes exactly one pattern).
fn multi_select_forbidden_on_cards(param_type: ParameterType) -> bool {
    matches!(
        param_type,
        ParameterType::StringContains
            | ParameterType::StringDoesNotContain
            | ParameterType::StringStartsWith
            | ParameterType::StringEndsWith
    )
}

#[must_use]
pub fn validate_card_parameters(parameters: &[Parameter]) -> ValidationReport {
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

        if let Some(ParameterTarget::TextTag { tag }) = &param.target {
            if tag.trim().is_empty() {
                report.push(Issue::error(
                    IssueCode::InvalidTarget,
                    format!("/{index}/target"),
                    "text-tag target must carry a tag name",
                ));
            }
        }

        if param.required == Some(true) && !param.has_nonempty_default() {
            report.push(Issue::error(
                IssueCode::Constraint,
                format!("/{index}/default"),
                "required parameters must have a non-empty default value",
            ));
        }

        if param.is_multi_select == Some(true) && multi_select_forbidden_on_cards(param.param_type)
        {
            report.push(Issue::error(
                IssueCode::Constraint,
                format!("/{index}/isMultiSelect"),
                format!(
                    "isMultiSelect cannot be true for type {:?}",
                    param.param_type.as_str()
                ),
            ));
        }

        if param.param_type == ParameterType::TemporalUnit
            && param
                .temporal_units
                .as_ref()
                .is_none_or(|units| units.is_empty())
        {
            report.push(Issue::error(
                IssueCode::Constraint,
                format!("/{index}/temporal_units"),
                "temporal-unit parameters must list at least one temporal unit",
            ));
        }
    }

    report
}

/// Validates, then fills ids/slugs/targets and derives the template-tag map.
///
/// Provided slugs are discarded; slugs always come from the name, uniqued
/// with `_1`-style suffixes when names collide after slugification.
pub fn normalize_card_parameters(parameters: Vec<Parameter>) -> ForgeResult<NormalizedCard> {
    let report = validate_card_parameters(&parameters);
    if !report.is_valid() {
        return Err(ForgeError::InvalidParameters(report));
    }

    let mut existing_ids: HashSet<String> = parameters
        .iter()
        .filter_map(|param| param.id.clone())
        .filter(|id| !id.is_empty())
        .collect();
    let mut taken_slugs = HashSet::new();

    let mut normalized = Vec::with_capacity(parameters.len());
    let mut template_tags = IndexMap::new();

    for mut param in parameters {
        if param.id.as_deref().is_none_or(str::is_empty) {
            let mut id = new_card_parameter_id();
            while existing_ids.contains(&id) {
                id = new_card_parameter_id();
            }
            existing_ids.insert(id.clone());
            param.id = Some(id);
        }

        let slug = unique_slug(&slugify(&param.name), &mut taken_slugs);
        param.slug = Some(slug.clone());

        if param.target.is_none() {
            param.target = Some(ParameterTarget::Variable { tag: slug.clone() });
        }

        let tag = derive_template_tag(&param, &slug);
        trace!(name = %param.name, tag = %tag.name, "derived template tag");
        template_tags.insert(tag.name.clone(), tag);
        normalized.push(param);
    }

    debug!(
        parameter_count = normalized.len(),
        tag_count = template_tags.len(),
        "normalized card parameters"
    );
    Ok(NormalizedCard {
        parameters: normalized,
        template_tags,
    })
}

fn derive_template_tag(param: &Parameter, slug: &str) -> TemplateTag {
    let tag_name = param
        .target
        .as_ref()
        .map(|target| target.tag_name().to_owned())
        .filter(|tag| !tag.is_empty())
        .unwrap_or_else(|| slug.to_owned());

    let is_dimension_target = param
        .target
        .as_ref()
        .is_some_and(ParameterTarget::is_dimension);
    let tag_type = match param.param_type.family() {
        ParameterFamily::Date => TemplateTagType::Date,
        ParameterFamily::Number => TemplateTagType::Number,
        _ if is_dimension_target => TemplateTagType::Dimension,
        _ => TemplateTagType::Text,
    };

    TemplateTag {
        tag_type,
        name: tag_name,
        // normalize_card_parameters fills the id before deriving tags
        id: param.id.clone().unwrap_or_default(),
        display_name: param.name.clone(),
        default: param.default.clone(),
        required: param.required,
        dimension: None,
        widget_type: (tag_type == TemplateTagType::Dimension).then(|| "none".to_owned()),
    }
}
