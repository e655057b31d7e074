//! Permission catalogue and the capability set carried by an access token.
//!
//! Every protected endpoint requires exactly one [`Permission`]. A token grants
//! a [`CapabilitySet`]; authorization is a plain membership test with no role
//! hierarchy.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// One of the eight permission strings recognised by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    GetActors,
    PostActors,
    PatchActors,
    DeleteActors,
    GetMovies,
    PostMovies,
    PatchMovies,
    DeleteMovies,
}

impl Permission {
    pub const ALL: [Permission; 8] = [
        Permission::GetActors,
        Permission::PostActors,
        Permission::PatchActors,
        Permission::DeleteActors,
        Permission::GetMovies,
        Permission::PostMovies,
        Permission::PatchMovies,
        Permission::DeleteMovies,
    ];

    /// The claim string as it appears in the token's `permissions` array.
    pub const fn as_str(self) -> &'static str {
        match self {
            Permission::GetActors => "get:actors",
            Permission::PostActors => "post:actors",
            Permission::PatchActors => "patch:actors",
            Permission::DeleteActors => "delete:actors",
            Permission::GetMovies => "get:movies",
            Permission::PostMovies => "post:movies",
            Permission::PatchMovies => "patch:movies",
            Permission::DeleteMovies => "delete:movies",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known permission claims.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown permission '{0}'")]
pub struct UnknownPermission(pub String);

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

/// The set of permissions granted by a validated token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet(HashSet<Permission>);

impl CapabilitySet {
    /// Build from raw claim strings. Strings that do not name a known
    /// permission grant nothing and are dropped.
    pub fn from_claims<I, S>(claims: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            claims
                .into_iter()
                .filter_map(|s| s.as_ref().parse().ok())
                .collect(),
        )
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Permission> for CapabilitySet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
