//! Dynamic record model for the tabula data engine.
//!
//! `tabula-core` holds the value and record types the grid engine operates
//! on, plus the error types for field access and caller configuration.

pub mod error;
pub mod model;

pub use error::{ConfigError, FieldError};
pub use model::{Record, Value};
