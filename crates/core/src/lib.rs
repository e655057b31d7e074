//! Domain primitives shared by the casting agency crates.
//!
//! Nothing in this crate performs I/O. It holds the error taxonomy, the
//! permission catalogue, and the input rules applied to request bodies.

pub mod error;
pub mod fields;
pub mod permissions;
pub mod release_date;
pub mod types;
