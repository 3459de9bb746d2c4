//! SCM Shared Types
//!
//! Value types and validation primitives shared by every configuration
//! schema: the validation error kind, address parsing helpers, the
//! compiled-regex field validator and container reference handling.

pub mod address;
pub mod container;
pub mod error;
pub mod validate;

pub use address::{IpAddress, MacAddr};
pub use container::ContainerScope;
pub use error::{SharedResult, ValidationError};
pub use validate::FieldValidator;
