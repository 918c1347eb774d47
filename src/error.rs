use thiserror::Error;

use crate::report::ValidationReport;

pub type ForgeResult<T> = Result<T, ForgeError>;

#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("unsupported chart type: {requested}. Supported types: {supported}")]
    UnsupportedChartType { requested: String, supported: String },

    #[error("invalid visualization settings:\n{0}")]
    InvalidSettings(ValidationReport),

    #[error("invalid parameters:\n{0}")]
    InvalidParameters(ValidationReport),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
