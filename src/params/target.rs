use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Value, json};

/// Where a parameter's value lands inside a native query.
///
/// Wire shapes:
/// - `["variable", ["template-tag", name]]` — plain value substitution
/// - `["dimension", ["template-tag", name]]` — field filter condition
/// - `["text-tag", name]` — text replacement in headings/descriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterTarget {
    Variable { tag: String },
    Dimension { tag: String },
    TextTag { tag: String },
}

impl ParameterTarget {
    /// Name of the template tag the target points at.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        match self {
            Self::Variable { tag } | Self::Dimension { tag } | Self::TextTag { tag } => tag,
        }
    }

    #[must_use]
    pub fn is_dimension(&self) -> bool {
        matches!(self, Self::Dimension { .. })
    }

    #[must_use]
    pub fn to_wire(&self) -> Value {
        match self {
            Self::Variable { tag } => json!(["variable", ["template-tag", tag]]),
            Self::Dimension { tag } => json!(["dimension", ["template-tag", tag]]),
            Self::TextTag { tag } => json!(["text-tag", tag]),
        }
    }

    /// Parses the wire array, rejecting malformed shapes.
    pub fn from_wire(value: &Value) -> Result<Self, String> {
        let Some(parts) = value.as_array() else {
            return Err("parameter target must be an array".to_owned());
        };
        let kind = parts
            .first()
            .and_then(Value::as_str)
            .ok_or("parameter target must start with a target type string")?;
        match kind {
            "variable" | "dimension" => {
                let inner = parts
                    .get(1)
                    .and_then(Value::as_array)
                    .ok_or_else(|| format!("{kind} target must wrap a template-tag array"))?;
                if inner.first().and_then(Value::as_str) != Some("template-tag") {
                    return Err(format!("{kind} target must reference a template-tag"));
                }
                let tag = inner
                    .get(1)
                    .and_then(Value::as_str)
                    .ok_or_else(|| format!("{kind} target is missing the template tag name"))?
                    .to_owned();
                if kind == "variable" {
                    Ok(Self::Variable { tag })
                } else {
                    Ok(Self::Dimension { tag })
                }
            }
            "text-tag" => {
                let tag = parts
                    .get(1)
                    .and_then(Value::as_str)
                    .ok_or("text-tag target must carry a tag name string")?
                    .to_owned();
                Ok(Self::TextTag { tag })
            }
            other => Err(format!("invalid target type {other:?}")),
        }
    }
}

impl Serialize for ParameterTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ParameterTarget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_wire(&value).map_err(serde::de::Error::custom)
    }
}
