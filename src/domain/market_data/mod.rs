//! Market data: currency catalog, instruments, price and rate series.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
