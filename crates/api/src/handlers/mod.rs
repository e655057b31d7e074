//! Request handlers, one module per resource.

pub mod actor;
pub mod greeting;
pub mod movie;
