//! Template-tag scanning and parameter/tag reconciliation.
//!
//! Native queries reference parameters through `{{name}}` tags and may wrap
//! whole SQL fragments in `[[ ... ]]` optional blocks that only render when
//! every tag inside has a value. The linker checks that the parameter list,
//! the template-tag map and the SQL body all agree.

mod scan;

pub use scan::{TagScan, scan_template_tags};

use indexmap::IndexMap;
use tracing::debug;

use crate::params::{Parameter, TemplateTag, TemplateTagType};
use crate::report::{Issue, IssueCode, ValidationReport};

/// Tag types a parameter may bind to through its target.
///
/// Date and number families match their value tags even behind a dimension
/// target, because card normalization types those tags by family first;
/// plan-built field filters use `dimension` tags instead, so both spellings
/// are accepted there.
fn allowed_tag_types(param: &Parameter) -> &'static [TemplateTagType] {
    use crate::params::ParameterFamily;

    let dimension = param.target.as_ref().is_some_and(|t| t.is_dimension());
    match (param.param_type.family(), dimension) {
        (ParameterFamily::Date, true) => &[TemplateTagType::Date, TemplateTagType::Dimension],
        (ParameterFamily::Date, false) => &[TemplateTagType::Date],
        (ParameterFamily::Number, true) => &[TemplateTagType::Number, TemplateTagType::Dimension],
        (ParameterFamily::Number, false) => &[TemplateTagType::Number],
        (_, true) => &[TemplateTagType::Dimension],
        (_, false) => &[TemplateTagType::Text],
    }
}

/// Reconciles parameters, the template-tag map and the scanned SQL body.
///
/// Errors: a parameter targeting a tag that the map or the SQL does not
/// know, a scanned tag with no map entry, and parameter/tag type clashes.
/// Warnings: map entries the SQL never references, and required parameters
/// whose tag only appears inside optional blocks (the block defeats the
/// required flag).
#[must_use]
pub fn link_parameters(
    parameters: &[Parameter],
    template_tags: &IndexMap<String, TemplateTag>,
    scan: &TagScan,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.issues.extend(scan.issues.iter().cloned());

    for (index, param) in parameters.iter().enumerate() {
        let Some(target) = &param.target else {
            report.push(Issue::error(
                IssueCode::UnboundParameter,
                format!("/{index}/target"),
                format!("parameter {:?} has no target", param.name),
            ));
            continue;
        };
        let tag_name = target.tag_name();

        let Some(tag) = template_tags.get(tag_name) else {
            report.push(Issue::error(
                IssueCode::UnboundParameter,
                format!("/{index}/target"),
                format!(
                    "parameter {:?} targets template tag {tag_name:?}, which is not declared",
                    param.name
                ),
            ));
            continue;
        };

        if !scan.references(tag_name) {
            report.push(Issue::error(
                IssueCode::UnboundParameter,
                format!("/{index}/target"),
                format!(
                    "parameter {:?} targets template tag {tag_name:?}, which the query never references",
                    param.name
                ),
            ));
        }

        if !allowed_tag_types(param).contains(&tag.tag_type) {
            report.push(Issue::error(
                IssueCode::TagTypeMismatch,
                format!("/{index}/target"),
                format!(
                    "parameter type {:?} cannot bind to tag {tag_name:?} of type {:?}",
                    param.param_type.as_str(),
                    tag.tag_type
                ),
            ));
        }

        if param.required == Some(true) && scan.is_optional_only(tag_name) {
            report.push(Issue::warning(
                IssueCode::Constraint,
                format!("/{index}/required"),
                format!(
                    "required parameter {:?} only appears inside optional blocks",
                    param.name
                ),
            ));
        }
    }

    for tag_name in scan.tags() {
        if !template_tags.contains_key(tag_name) {
            report.push(Issue::error(
                IssueCode::UnboundTag,
                "/sql",
                format!("query references template tag {tag_name:?} with no declaration"),
            ));
        }
    }

    for tag_name in template_tags.keys() {
        if !scan.references(tag_name) {
            report.push(Issue::warning(
                IssueCode::UnboundTag,
                "/template-tags",
                format!("declared template tag {tag_name:?} is never referenced by the query"),
            ));
        }
    }

    debug!(
        parameter_count = parameters.len(),
        tag_count = template_tags.len(),
        issue_count = report.issues.len(),
        "linked parameters against query tags"
    );
    report
}
