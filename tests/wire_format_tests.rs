use cardforge::params::{
    Parameter, ParameterTarget, ParameterType, TemplateTag, TemplateTagType, ValuesQueryType,
    normalize_card_parameters,
};
use serde_json::{Value, json};

#[test]
fn parameters_deserialize_from_product_payloads() {
    let payload = json!({
        "id": "c2d3e4f5-0000-1111-2222-333344445555",
        "name": "Order Status",
        "slug": "order_status",
        "type": "string/=",
        "sectionId": "string",
        "isMultiSelect": false,
        "target": ["variable", ["template-tag", "order_status"]],
        "default": ["open"]
    });

    let param: Parameter = serde_json::from_value(payload).unwrap();
    assert_eq!(param.param_type, ParameterType::StringEq);
    assert_eq!(param.section_id.as_deref(), Some("string"));
    assert_eq!(param.is_multi_select, Some(false));
    assert_eq!(
        param.target,
        Some(ParameterTarget::Variable { tag: "order_status".into() })
    );
}

#[test]
fn serialization_skips_absent_fields() {
    let param = Parameter::new("Status", ParameterType::Category);
    let wire = serde_json::to_value(&param).unwrap();
    assert_eq!(wire, json!({ "name": "Status", "type": "category" }));
}

#[test]
fn serialization_uses_wire_field_names() {
    let mut param = Parameter::new("Status", ParameterType::StringEq);
    param.is_multi_select = Some(true);
    param.section_id = Some("string".into());
    param.values_query_type = Some(ValuesQueryType::List);

    let wire = serde_json::to_value(&param).unwrap();
    assert_eq!(wire["type"], json!("string/="));
    assert_eq!(wire["isMultiSelect"], json!(true));
    assert_eq!(wire["sectionId"], json!("string"));
    assert_eq!(wire["values_query_type"], json!("list"));
    assert!(wire.get("is_multi_select").is_none());
}

#[test]
fn targets_serialize_to_wire_arrays() {
    let variable = ParameterTarget::Variable { tag: "status".into() };
    assert_eq!(
        serde_json::to_value(&variable).unwrap(),
        json!(["variable", ["template-tag", "status"]])
    );

    let dimension = ParameterTarget::Dimension { tag: "created".into() };
    assert_eq!(
        serde_json::to_value(&dimension).unwrap(),
        json!(["dimension", ["template-tag", "created"]])
    );

    let text = ParameterTarget::TextTag { tag: "title".into() };
    assert_eq!(serde_json::to_value(&text).unwrap(), json!(["text-tag", "title"]));
}

#[test]
fn malformed_targets_fail_deserialization() {
    for wire in [
        json!(["variable"]),
        json!(["variable", ["field", 3]]),
        json!(["unknown", ["template-tag", "x"]]),
        json!(42),
    ] {
        assert!(serde_json::from_value::<ParameterTarget>(wire.clone()).is_err(), "{wire}");
    }
}

#[test]
fn template_tags_use_hyphenated_field_names() {
    let tag = TemplateTag {
        tag_type: TemplateTagType::Dimension,
        name: "created".into(),
        id: "tag-id".into(),
        display_name: "Created".into(),
        default: None,
        required: None,
        dimension: Some(json!(["field", 42, null])),
        widget_type: Some("date/all-options".into()),
    };

    let wire = serde_json::to_value(&tag).unwrap();
    assert_eq!(wire["type"], json!("dimension"));
    assert_eq!(wire["display-name"], json!("Created"));
    assert_eq!(wire["widget-type"], json!("date/all-options"));
    assert!(wire.get("display_name").is_none());

    let back: TemplateTag = serde_json::from_value(wire).unwrap();
    assert_eq!(back, tag);
}

#[test]
fn unknown_parameter_types_fail_deserialization() {
    let payload = json!({ "name": "Status", "type": "string/equals" });
    assert!(serde_json::from_value::<Parameter>(payload).is_err());
}

#[test]
fn normalized_cards_serialize_like_product_payloads() {
    let card = normalize_card_parameters(vec![Parameter::new(
        "Order Status",
        ParameterType::Category,
    )])
    .unwrap();

    let wire = serde_json::to_value(&card.parameters).unwrap();
    let Value::Array(parameters) = wire else {
        panic!("expected an array");
    };
    let param = &parameters[0];
    assert_eq!(param["slug"], json!("order_status"));
    assert_eq!(
        param["target"],
        json!(["variable", ["template-tag", "order_status"]])
    );
    // Absent optionals stay off the wire entirely.
    assert!(param.get("isMultiSelect").is_none());
    assert!(param.get("values_query_type").is_none());
}
