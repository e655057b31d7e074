//! Permission-based access control extractors.
//!
//! [`Require<P>`] wraps [`AuthUser`] and rejects requests whose token lacks
//! the permission named by the marker type `P`. Each handler declares its one
//! required permission in its signature:
//!
//! ```ignore
//! async fn create(_: Require<PostActors>, ...) -> AppResult<Json<Value>> { ... }
//! ```

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use casting_core::error::CoreError;
use casting_core::permissions::Permission;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Marker naming the permission an endpoint requires.
pub trait RequiredPermission: Send + Sync + 'static {
    const PERMISSION: Permission;
}

macro_rules! permission_markers {
    ($($name:ident => $variant:ident),* $(,)?) => {
        $(
            #[doc = concat!("Marker for [`Permission::", stringify!($variant), "`].")]
            pub struct $name;

            impl RequiredPermission for $name {
                const PERMISSION: Permission = Permission::$variant;
            }
        )*
    };
}

permission_markers! {
    GetActors => GetActors,
    PostActors => PostActors,
    PatchActors => PatchActors,
    DeleteActors => DeleteActors,
    GetMovies => GetMovies,
    PostMovies => PostMovies,
    PatchMovies => PatchMovies,
    DeleteMovies => DeleteMovies,
}

/// Authenticated caller holding the permission `P`.
///
/// Rejects with 401 when authentication fails and 403 when the token is valid
/// but does not grant `P`.
pub struct Require<P: RequiredPermission>(pub AuthUser, PhantomData<P>);

impl<P: RequiredPermission> Require<P> {
    pub fn user(&self) -> &AuthUser {
        &self.0
    }
}

impl<P: RequiredPermission> FromRequestParts<AppState> for Require<P> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.capabilities.contains(P::PERMISSION) {
            return Err(AppError::Core(CoreError::Forbidden(format!(
                "Permission '{}' required",
                P::PERMISSION
            ))));
        }
        Ok(Require(user, PhantomData))
    }
}
