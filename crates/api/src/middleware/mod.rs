//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the verified caller from a JWT Bearer token.
//! - [`rbac::Require`] -- Requires one specific permission in the caller's token.

pub mod auth;
pub mod rbac;
