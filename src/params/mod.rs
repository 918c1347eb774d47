//! Filter parameter model, validators and normalizers for cards and
//! dashboards.

mod card;
mod dashboard;
mod ident;
mod model;
mod plan;
mod slug;
mod target;
mod types;
mod values_source;

pub use card::{NormalizedCard, normalize_card_parameters, validate_card_parameters};
pub use dashboard::{
    DashboardParameterPlan, build_dashboard_parameters, normalize_dashboard_parameters,
    validate_dashboard_parameter_plans, validate_dashboard_parameters,
};
pub use ident::{new_card_parameter_id, new_dashboard_parameter_id};
pub use model::{Parameter, TemplateTag, UiWidget, ValuesQueryType};
pub use plan::{CardParameterPlan, FieldRef, build_card_parameters, validate_card_parameter_plans};
pub use slug::slugify;
pub use target::ParameterTarget;
pub use types::{ParameterFamily, ParameterType, TemplateTagType, TemporalUnit};
pub use values_source::{ValuesSource, static_value_rows};
