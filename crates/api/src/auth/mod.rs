//! Token verification primitives.
//!
//! - [`jwt`] -- claims, verification keys, and token validation.
//! - [`jwks`] -- download of the identity provider's published keys.

pub mod jwks;
pub mod jwt;
