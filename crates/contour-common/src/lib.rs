//! Common types shared across the contour services.

pub mod bbox;
pub mod error;
pub mod variable;

pub use bbox::BoundingBox;
pub use error::{ContourError, ContourResult};
pub use variable::VariableFamily;
