use cardforge::linker::{link_parameters, scan_template_tags};
use cardforge::params::{
    CardParameterPlan, FieldRef, Parameter, ParameterTarget, ParameterType,
    build_card_parameters, normalize_card_parameters,
};
use cardforge::{IssueCode, Severity};

#[test]
fn a_fully_wired_card_links_clean() {
    let card = normalize_card_parameters(vec![
        Parameter::new("Status", ParameterType::Category),
        Parameter::new("Min Total", ParameterType::NumberGte),
    ])
    .unwrap();

    let scan = scan_template_tags(
        "SELECT * FROM orders WHERE status = {{status}} AND total >= {{min_total}}",
    );
    let report = link_parameters(&card.parameters, &card.template_tags, &scan);
    assert!(report.is_valid(), "{report}");
    assert_eq!(report.warnings().count(), 0);
}

#[test]
fn a_parameter_without_a_target_is_unbound() {
    let card = normalize_card_parameters(vec![Parameter::new("Status", ParameterType::Category)])
        .unwrap();
    let mut parameters = card.parameters;
    parameters[0].target = None;

    let scan = scan_template_tags("SELECT * FROM orders WHERE status = {{status}}");
    let report = link_parameters(&parameters, &card.template_tags, &scan);
    assert!(report.errors().any(|issue| issue.code == IssueCode::UnboundParameter));
}

#[test]
fn a_target_without_a_declared_tag_is_unbound() {
    let card = normalize_card_parameters(vec![Parameter::new("Status", ParameterType::Category)])
        .unwrap();
    let mut parameters = card.parameters;
    parameters[0].target = Some(ParameterTarget::Variable { tag: "other".into() });

    let scan = scan_template_tags("SELECT * FROM orders WHERE status = {{status}}");
    let report = link_parameters(&parameters, &card.template_tags, &scan);
    assert!(report.errors().any(|issue| issue.code == IssueCode::UnboundParameter));
}

#[test]
fn a_tag_the_query_never_references_is_unbound() {
    let card = normalize_card_parameters(vec![Parameter::new("Status", ParameterType::Category)])
        .unwrap();

    let scan = scan_template_tags("SELECT * FROM orders");
    let report = link_parameters(&card.parameters, &card.template_tags, &scan);
    let codes: Vec<(IssueCode, Severity)> = report
        .issues
        .iter()
        .map(|issue| (issue.code, issue.severity))
        .collect();
    // The parameter is broken (error) and its declared tag goes stale (warning).
    assert!(codes.contains(&(IssueCode::UnboundParameter, Severity::Error)));
    assert!(codes.contains(&(IssueCode::UnboundTag, Severity::Warning)));
}

#[test]
fn a_scanned_tag_without_a_declaration_is_an_error() {
    let card = normalize_card_parameters(vec![Parameter::new("Status", ParameterType::Category)])
        .unwrap();

    let scan = scan_template_tags(
        "SELECT * FROM orders WHERE status = {{status}} AND region = {{region}}",
    );
    let report = link_parameters(&card.parameters, &card.template_tags, &scan);
    assert!(!report.is_valid());
    let issue = report
        .errors()
        .find(|issue| issue.code == IssueCode::UnboundTag)
        .unwrap();
    assert!(issue.message.contains("region"));
}

#[test]
fn tag_type_mismatches_are_reported() {
    let card = normalize_card_parameters(vec![Parameter::new("Total", ParameterType::NumberGte)])
        .unwrap();
    let mut parameters = card.parameters;
    // Flip the parameter to a date type so it disagrees with the number tag.
    parameters[0].param_type = ParameterType::DateSingle;

    let scan = scan_template_tags("SELECT * FROM orders WHERE total >= {{total}}");
    let report = link_parameters(&parameters, &card.template_tags, &scan);
    assert!(report.errors().any(|issue| issue.code == IssueCode::TagTypeMismatch));
}

#[test]
fn normalized_date_field_filters_link_clean() {
    // Normalization types date-family tags as date even behind a dimension
    // target; the linker must accept its own output.
    let card = normalize_card_parameters(vec![
        Parameter::new("Created", ParameterType::DateAllOptions)
            .with_target(ParameterTarget::Dimension { tag: "created".into() }),
    ])
    .unwrap();

    let scan = scan_template_tags("SELECT * FROM orders WHERE {{created}}");
    let report = link_parameters(&card.parameters, &card.template_tags, &scan);
    assert!(report.is_valid(), "{report}");
    assert_eq!(report.warnings().count(), 0);
}

#[test]
fn plan_built_field_filters_link_clean() {
    // Plan expansion gives date and number field filters dimension tags.
    let mut created = CardParameterPlan::new("created", ParameterType::DateRange);
    created.field = Some(FieldRef {
        database_id: 1,
        table_id: 5,
        field_id: 42,
    });
    let mut total = CardParameterPlan::new("total", ParameterType::NumberBetween);
    total.field = Some(FieldRef {
        database_id: 1,
        table_id: 5,
        field_id: 43,
    });
    let card = build_card_parameters(&[created, total]).unwrap();

    let scan = scan_template_tags("SELECT * FROM orders WHERE {{created}} AND {{total}}");
    let report = link_parameters(&card.parameters, &card.template_tags, &scan);
    assert!(report.is_valid(), "{report}");
}

#[test]
fn required_parameters_inside_optional_blocks_warn() {
    let card = normalize_card_parameters(vec![
        Parameter::new("Status", ParameterType::Category)
            .with_required(true)
            .with_default(serde_json::json!("open")),
    ])
    .unwrap();

    let scan = scan_template_tags("SELECT * FROM orders WHERE 1=1 [[AND status = {{status}}]]");
    let report = link_parameters(&card.parameters, &card.template_tags, &scan);
    assert!(report.is_valid());
    let warning = report.warnings().next().unwrap();
    assert_eq!(warning.code, IssueCode::Constraint);
    assert_eq!(warning.path, "/0/required");
}

#[test]
fn scan_issues_surface_in_the_link_report() {
    let card = normalize_card_parameters(vec![Parameter::new("Status", ParameterType::Category)])
        .unwrap();

    let scan = scan_template_tags("SELECT * FROM orders WHERE status = {{status");
    let report = link_parameters(&card.parameters, &card.template_tags, &scan);
    assert!(report.issues.iter().any(|issue| issue.path == "/sql"));
}
