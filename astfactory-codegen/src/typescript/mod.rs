//! TypeScript factory and visitor generation.

pub mod factory;
pub mod visitor;

pub use factory::FactoryGenerator;
pub use visitor::{DispatchArm, VisitorGenerator};

/// Renders a possibly absent schema value the way the target language prints
/// a missing value.
pub(crate) fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("undefined")
}
