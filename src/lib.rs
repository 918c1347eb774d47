//! cardforge: validation and normalization for dashboard card configuration.
//!
//! This crate checks candidate JSON payloads against the configuration
//! surface of a dashboarding product (visualization card settings and
//! card/dashboard filter parameters) and rewrites them into the canonical
//! wire shape the product accepts. It does not talk to the product itself;
//! transport and persistence belong to the host application.

pub mod error;
pub mod linker;
pub mod params;
pub mod registry;
pub mod report;
pub mod settings;
pub mod telemetry;

pub use error::{ForgeError, ForgeResult};
pub use registry::ChartType;
pub use report::{Issue, IssueCode, Severity, ValidationReport};
