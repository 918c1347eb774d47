//! Type registry: maps every visualization type to its allowed setting keys,
//! value domains, and the constraint set the settings validator enforces.

mod catalog;
mod chart_type;
mod key_spec;

pub use catalog::chart_spec;
pub use chart_type::ChartType;
pub use key_spec::{ChartSpec, KeySpec, ValueDomain};
