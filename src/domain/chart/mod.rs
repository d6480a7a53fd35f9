//! Chart aggregate: points, scaling and pixel geometry.

pub mod services;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;
