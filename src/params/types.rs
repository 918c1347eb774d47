use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ForgeError, ForgeResult};

/// Broad parameter family, used for section routing and default-value checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterFamily {
    Category,
    Text,
    Location,
    Number,
    Date,
    Id,
    TemporalUnit,
}

/// Filter parameter types, named after the product's wire vocabulary
/// (`string/=`, `date/all-options`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterType {
    Category,
    Id,
    TemporalUnit,
    StringEq,
    StringNeq,
    StringContains,
    StringDoesNotContain,
    StringStartsWith,
    StringEndsWith,
    LocationEq,
    LocationNeq,
    LocationContains,
    LocationDoesNotContain,
    LocationStartsWith,
    LocationEndsWith,
    NumberEq,
    NumberNeq,
    NumberBetween,
    NumberGte,
    NumberLte,
    DateSingle,
    DateRange,
    DateRelative,
    DateMonthYear,
    DateQuarterYear,
    DateAllOptions,
}

impl ParameterType {
    pub const ALL: [ParameterType; 26] = [
        Self::Category,
        Self::Id,
        Self::TemporalUnit,
        Self::StringEq,
        Self::StringNeq,
        Self::StringContains,
        Self::StringDoesNotContain,
        Self::StringStartsWith,
        Self::StringEndsWith,
        Self::LocationEq,
        Self::LocationNeq,
        Self::LocationContains,
        Self::LocationDoesNotContain,
        Self::LocationStartsWith,
        Self::LocationEndsWith,
        Self::NumberEq,
        Self::NumberNeq,
        Self::NumberBetween,
        Self::NumberGte,
        Self::NumberLte,
        Self::DateSingle,
        Self::DateRange,
        Self::DateRelative,
        Self::DateMonthYear,
        Self::DateQuarterYear,
        Self::DateAllOptions,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Id => "id",
            Self::TemporalUnit => "temporal-unit",
            Self::StringEq => "string/=",
            Self::StringNeq => "string/!=",
            Self::StringContains => "string/contains",
            Self::StringDoesNotContain => "string/does-not-contain",
            Self::StringStartsWith => "string/starts-with",
            Self::StringEndsWith => "string/ends-with",
            Self::LocationEq => "location/=",
            Self::LocationNeq => "location/!=",
            Self::LocationContains => "location/contains",
            Self::LocationDoesNotContain => "location/does-not-contain",
            Self::LocationStartsWith => "location/starts-with",
            Self::LocationEndsWith => "location/ends-with",
            Self::NumberEq => "number/=",
            Self::NumberNeq => "number/!=",
            Self::NumberBetween => "number/between",
            Self::NumberGte => "number/>=",
            Self::NumberLte => "number/<=",
            Self::DateSingle => "date/single",
            Self::DateRange => "date/range",
            Self::DateRelative => "date/relative",
            Self::DateMonthYear => "date/month-year",
            Self::DateQuarterYear => "date/quarter-year",
            Self::DateAllOptions => "date/all-options",
        }
    }

    pub fn parse(input: &str) -> ForgeResult<Self> {
        Self::ALL
            .into_iter()
            .find(|pt| pt.as_str() == input)
            .ok_or_else(|| {
                ForgeError::InvalidData(format!("unknown parameter type: {input:?}"))
            })
    }

    #[must_use]
    pub fn family(self) -> ParameterFamily {
        match self {
            Self::Category => ParameterFamily::Category,
            Self::Id => ParameterFamily::Id,
            Self::TemporalUnit => ParameterFamily::TemporalUnit,
            Self::StringEq
            | Self::StringNeq
            | Self::StringContains
            | Self::StringDoesNotContain
            | Self::StringStartsWith
            | Self::StringEndsWith => ParameterFamily::Text,
            Self::LocationEq
            | Self::LocationNeq
            | Self::LocationContains
            | Self::LocationDoesNotContain
            | Self::LocationStartsWith
            | Self::LocationEndsWith => ParameterFamily::Location,
            Self::NumberEq | Self::NumberNeq | Self::NumberBetween | Self::NumberGte
            | Self::NumberLte => ParameterFamily::Number,
            Self::DateSingle
            | Self::DateRange
            | Self::DateRelative
            | Self::DateMonthYear
            | Self::DateQuarterYear
            | Self::DateAllOptions => ParameterFamily::Date,
        }
    }

    /// Whether the product offers multi-select for this type. When supported
    /// and not set explicitly, multi-select defaults to on.
    #[must_use]
    pub fn supports_multi_select(self) -> bool {
        matches!(
            self.family(),
            ParameterFamily::Text | ParameterFamily::Location | ParameterFamily::Id
        ) || matches!(self, Self::NumberEq | Self::NumberNeq)
    }

    /// Types where enabling multi-select is an error (range-like filters and
    /// everything date-shaped).
    #[must_use]
    pub fn forbids_multi_select(self) -> bool {
        matches!(self.family(), ParameterFamily::Date | ParameterFamily::TemporalUnit)
            || matches!(self, Self::NumberBetween | Self::NumberGte | Self::NumberLte)
    }

    /// Effective multi-select state given the explicit flag, applying the
    /// per-type default.
    #[must_use]
    pub fn effective_multi_select(self, explicit: Option<bool>) -> bool {
        explicit.unwrap_or_else(|| self.supports_multi_select())
    }

    /// Field filters substitute a whole SQL condition and bind to a database
    /// column through a `dimension` template tag.
    #[must_use]
    pub fn is_field_filter(self) -> bool {
        match self.family() {
            ParameterFamily::Text | ParameterFamily::Location => true,
            ParameterFamily::Number => self != Self::NumberEq,
            ParameterFamily::Date => self != Self::DateSingle,
            ParameterFamily::Category | ParameterFamily::Id | ParameterFamily::TemporalUnit => {
                false
            }
        }
    }

    /// Dashboard filter section the type belongs to.
    #[must_use]
    pub fn section_id(self) -> &'static str {
        match self.family() {
            ParameterFamily::Location => "location",
            ParameterFamily::Number => "number",
            ParameterFamily::Date => "date",
            ParameterFamily::Id => "id",
            ParameterFamily::TemporalUnit => "temporal-unit",
            ParameterFamily::Text | ParameterFamily::Category => "string",
        }
    }

    /// Location filters are stored as their string twins on the wire; the
    /// `location` identity survives only in `sectionId`.
    #[must_use]
    pub fn as_string_type(self) -> Self {
        match self {
            Self::LocationEq => Self::StringEq,
            Self::LocationNeq => Self::StringNeq,
            Self::LocationContains => Self::StringContains,
            Self::LocationDoesNotContain => Self::StringDoesNotContain,
            Self::LocationStartsWith => Self::StringStartsWith,
            Self::LocationEndsWith => Self::StringEndsWith,
            other => other,
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ParameterType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ParameterType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Time buckets a `temporal-unit` parameter may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
    MinuteOfHour,
    HourOfDay,
    DayOfWeek,
    DayOfMonth,
    DayOfYear,
    WeekOfYear,
    MonthOfYear,
    QuarterOfYear,
}

impl TemporalUnit {
    pub const ALL: [TemporalUnit; 15] = [
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Quarter,
        Self::Year,
        Self::MinuteOfHour,
        Self::HourOfDay,
        Self::DayOfWeek,
        Self::DayOfMonth,
        Self::DayOfYear,
        Self::WeekOfYear,
        Self::MonthOfYear,
        Self::QuarterOfYear,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
            Self::MinuteOfHour => "minute-of-hour",
            Self::HourOfDay => "hour-of-day",
            Self::DayOfWeek => "day-of-week",
            Self::DayOfMonth => "day-of-month",
            Self::DayOfYear => "day-of-year",
            Self::WeekOfYear => "week-of-year",
            Self::MonthOfYear => "month-of-year",
            Self::QuarterOfYear => "quarter-of-year",
        }
    }

    pub fn parse(input: &str) -> ForgeResult<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str() == input)
            .ok_or_else(|| ForgeError::InvalidData(format!("invalid temporal unit: {input:?}")))
    }
}

impl fmt::Display for TemporalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TemporalUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemporalUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Template tag kinds the product recognizes in native queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateTagType {
    Text,
    Number,
    Date,
    Dimension,
}
