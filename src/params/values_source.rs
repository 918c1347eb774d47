//! Filter-widget value sources and their wire translation.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::report::{Issue, IssueCode, ValidationReport};

use super::model::ValuesQueryType;

/// Where a filter widget's suggestion values come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ValuesSource {
    /// Fixed list provided by the author.
    Static { values: Vec<Value> },
    /// Distinct values of a column returned by another saved card.
    Card {
        card_id: i64,
        value_field: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label_field: Option<Value>,
    },
    /// Values of the connected database field (field filters only).
    Connected,
}

impl ValuesSource {
    /// Query type the product derives from the source kind.
    #[must_use]
    pub fn values_query_type(&self) -> ValuesQueryType {
        match self {
            Self::Static { .. } => ValuesQueryType::List,
            Self::Card { .. } => ValuesQueryType::Search,
            Self::Connected => ValuesQueryType::None,
        }
    }

    /// Builds the `values_source_type` / `values_source_config` pair for
    /// dashboard parameters. Static lists always become singleton string
    /// rows here.
    ///
    /// Connected sources produce a null type with an empty config object,
    /// which tells the product to read the field's own values.
    #[must_use]
    pub fn to_wire_config(&self) -> (Option<&'static str>, Option<Value>) {
        match self {
            Self::Static { values } => (
                Some("static-list"),
                Some(json!({ "values": static_value_rows(values) })),
            ),
            Self::Card {
                card_id,
                value_field,
                label_field,
            } => {
                let mut config = json!({
                    "card_id": card_id,
                    "value_field": field_wrap(value_field),
                });
                if let Some(label_field) = label_field {
                    config["label_field"] = field_wrap(label_field);
                }
                (Some("card"), Some(config))
            }
            Self::Connected => (None, Some(json!({}))),
        }
    }

    /// Builds the config pair for card parameters. Cards keep string-only
    /// static lists flat; only lists that start with a number get the
    /// singleton-string-row treatment.
    #[must_use]
    pub fn to_card_wire_config(&self) -> (Option<&'static str>, Option<Value>) {
        match self {
            Self::Static { values } => (
                Some("static-list"),
                Some(json!({ "values": card_static_values(values) })),
            ),
            other => other.to_wire_config(),
        }
    }

    /// Shape checks that the serde model cannot express.
    pub fn validate(&self, path: &str, report: &mut ValidationReport) {
        match self {
            Self::Static { values } => {
                if values.is_empty() {
                    report.push(Issue::error(
                        IssueCode::InvalidValue,
                        format!("{path}/values"),
                        "static values source requires a non-empty values array",
                    ));
                }
            }
            Self::Card { value_field, .. } => {
                if value_field.is_null() {
                    report.push(Issue::error(
                        IssueCode::InvalidValue,
                        format!("{path}/value_field"),
                        "card values source requires a value_field",
                    ));
                }
            }
            Self::Connected => {}
        }
    }
}

/// The product stores static suggestion lists as rows of single strings:
/// `[1, "b"]` becomes `[["1"], ["b"]]`.
#[must_use]
pub fn static_value_rows(values: &[Value]) -> Vec<Value> {
    values
        .iter()
        .map(|value| {
            let text = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            json!([text])
        })
        .collect()
}

fn card_static_values(values: &[Value]) -> Vec<Value> {
    if values.first().is_some_and(Value::is_number) {
        static_value_rows(values)
    } else {
        values.to_vec()
    }
}

fn field_wrap(field: &Value) -> Value {
    json!(["field", field, { "base-type": "type/Text" }])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_rows_stringify_every_value() {
        let rows = static_value_rows(&[json!(10), json!("pending"), json!(2.5)]);
        assert_eq!(rows, vec![json!(["10"]), json!(["pending"]), json!(["2.5"])]);
    }

    #[test]
    fn card_static_lists_stay_flat_unless_numeric() {
        let strings = ValuesSource::Static {
            values: vec![json!("open"), json!("closed")],
        };
        let (_, config) = strings.to_card_wire_config();
        assert_eq!(config.unwrap()["values"], json!(["open", "closed"]));

        let numbers = ValuesSource::Static {
            values: vec![json!(10), json!(42)],
        };
        let (_, config) = numbers.to_card_wire_config();
        assert_eq!(config.unwrap()["values"], json!([["10"], ["42"]]));
    }

    #[test]
    fn card_source_wraps_fields_in_references() {
        let source = ValuesSource::Card {
            card_id: 41,
            value_field: json!(7),
            label_field: Some(json!(9)),
        };
        let (source_type, config) = source.to_wire_config();
        assert_eq!(source_type, Some("card"));
        let config = config.unwrap();
        assert_eq!(config["value_field"], json!(["field", 7, { "base-type": "type/Text" }]));
        assert_eq!(config["label_field"], json!(["field", 9, { "base-type": "type/Text" }]));
    }
}
