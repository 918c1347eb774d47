use indexmap::IndexMap;

/// Value domain a setting key accepts.
///
/// `null` is accepted for any non-required key; the product treats an
/// explicit null as "unset".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDomain {
    Bool,
    Integer,
    Number,
    Text,
    /// Hex color, `#rgb` or `#rrggbb`.
    Color,
    Enum(&'static [&'static str]),
    TextArray,
    NumberArray,
    /// Array of `{min, max, color, label?}` objects for gauge charts.
    GaugeSegments,
    /// Array of conditional-formatting rule objects for tables.
    FormattingRules,
    /// Nested settings object keyed by column or series, not validated deeply.
    SettingsMap,
    Any,
}

#[derive(Debug, Clone, Copy)]
pub struct KeySpec {
    pub key: &'static str,
    pub domain: ValueDomain,
    pub required: bool,
}

impl KeySpec {
    #[must_use]
    pub const fn optional(key: &'static str, domain: ValueDomain) -> Self {
        Self {
            key,
            domain,
            required: false,
        }
    }

    #[must_use]
    pub const fn required(key: &'static str, domain: ValueDomain) -> Self {
        Self {
            key,
            domain,
            required: true,
        }
    }
}

/// Allowed-key catalog for one chart type. Key order is insertion order so
/// reports walk the catalog deterministically.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    keys: IndexMap<&'static str, KeySpec>,
}

impl ChartSpec {
    #[must_use]
    pub fn from_specs(specs: impl IntoIterator<Item = KeySpec>) -> Self {
        let mut keys = IndexMap::new();
        for spec in specs {
            keys.insert(spec.key, spec);
        }
        Self { keys }
    }

    #[must_use]
    pub fn key_spec(&self, key: &str) -> Option<&KeySpec> {
        self.keys.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &KeySpec> {
        self.keys.values()
    }

    pub fn required_keys(&self) -> impl Iterator<Item = &KeySpec> {
        self.keys.values().filter(|spec| spec.required)
    }
}
