//! Visualization settings validation against the type registry.

mod constraints;
mod domains;
mod validator;

pub use validator::{SettingsValidator, check_settings, validate_settings};
