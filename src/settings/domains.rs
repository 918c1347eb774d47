//! Per-value domain checks for setting keys.

use serde_json::Value;

use crate::registry::ValueDomain;

/// Checks a present, non-null value against its declared domain.
/// Returns a human-readable description of the mismatch on failure.
pub(super) fn check_domain(domain: ValueDomain, value: &Value) -> Result<(), String> {
    match domain {
        ValueDomain::Any => Ok(()),
        ValueDomain::Bool => expect(value.is_boolean(), "a boolean", value),
        ValueDomain::Integer => expect(value.is_i64() || value.is_u64(), "an integer", value),
        ValueDomain::Number => expect(value.is_number(), "a number", value),
        ValueDomain::Text => expect(value.is_string(), "a string", value),
        ValueDomain::Color => check_color(value),
        ValueDomain::Enum(allowed) => check_enum(allowed, value),
        ValueDomain::TextArray => check_array(value, "strings", |item| item.is_string()),
        ValueDomain::NumberArray => check_array(value, "numbers", |item| item.is_number()),
        ValueDomain::GaugeSegments => check_gauge_segments(value),
        ValueDomain::FormattingRules => check_formatting_rules(value),
        ValueDomain::SettingsMap => expect(value.is_object(), "an object", value),
    }
}

fn expect(ok: bool, wanted: &str, value: &Value) -> Result<(), String> {
    if ok {
        Ok(())
    } else {
        Err(format!("expected {wanted}, got {}", kind_of(value)))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(super) fn is_hex_color(text: &str) -> bool {
    let Some(digits) = text.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn check_color(value: &Value) -> Result<(), String> {
    match value.as_str() {
        Some(text) if is_hex_color(text) => Ok(()),
        Some(text) => Err(format!("expected a hex color like #509ee3, got {text:?}")),
        None => Err(format!("expected a hex color string, got {}", kind_of(value))),
    }
}

fn check_enum(allowed: &[&str], value: &Value) -> Result<(), String> {
    match value.as_str() {
        Some(text) if allowed.contains(&text) => Ok(()),
        Some(text) => Err(format!(
            "expected one of [{}], got {text:?}",
            allowed.join(", ")
        )),
        None => Err(format!(
            "expected one of [{}], got {}",
            allowed.join(", "),
            kind_of(value)
        )),
    }
}

fn check_array(value: &Value, item_kind: &str, item_ok: impl Fn(&Value) -> bool) -> Result<(), String> {
    let Some(items) = value.as_array() else {
        return Err(format!("expected an array of {item_kind}, got {}", kind_of(value)));
    };
    for (index, item) in items.iter().enumerate() {
        if !item_ok(item) {
            return Err(format!(
                "expected an array of {item_kind}, item {index} is {}",
                kind_of(item)
            ));
        }
    }
    Ok(())
}

fn check_gauge_segments(value: &Value) -> Result<(), String> {
    let Some(segments) = value.as_array() else {
        return Err(format!(
            "expected an array of segment objects, got {}",
            kind_of(value)
        ));
    };
    for (index, segment) in segments.iter().enumerate() {
        let Some(fields) = segment.as_object() else {
            return Err(format!("segment {index} is not an object"));
        };
        let min = fields.get("min").and_then(Value::as_f64);
        let max = fields.get("max").and_then(Value::as_f64);
        match (min, max) {
            (Some(min), Some(max)) if min < max => {}
            (Some(_), Some(_)) => {
                return Err(format!("segment {index} must have min < max"));
            }
            _ => {
                return Err(format!("segment {index} must have numeric min and max"));
            }
        }
        match fields.get("color").and_then(Value::as_str) {
            Some(color) if is_hex_color(color) => {}
            _ => return Err(format!("segment {index} must have a hex color")),
        }
        if let Some(label) = fields.get("label") {
            if !label.is_string() && !label.is_null() {
                return Err(format!("segment {index} label must be a string"));
            }
        }
    }
    Ok(())
}

fn check_formatting_rules(value: &Value) -> Result<(), String> {
    let Some(rules) = value.as_array() else {
        return Err(format!("expected an array of rule objects, got {}", kind_of(value)));
    };
    for (index, rule) in rules.iter().enumerate() {
        let Some(fields) = rule.as_object() else {
            return Err(format!("rule {index} is not an object"));
        };
        match fields.get("columns") {
            Some(columns) if columns.is_array() => {}
            _ => return Err(format!("rule {index} must list target columns")),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hex_colors_accept_short_and_long_forms() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#509ee3"));
        assert!(!is_hex_color("509ee3"));
        assert!(!is_hex_color("#509ee"));
        assert!(!is_hex_color("#gggggg"));
    }

    #[test]
    fn gauge_segments_enforce_min_below_max() {
        let good = json!([{"min": 0, "max": 10, "color": "#84bb4c"}]);
        assert!(check_domain(ValueDomain::GaugeSegments, &good).is_ok());

        let inverted = json!([{"min": 10, "max": 0, "color": "#84bb4c"}]);
        assert!(check_domain(ValueDomain::GaugeSegments, &inverted).is_err());
    }
}
