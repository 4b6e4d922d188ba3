//! Identity boundary and session context.
//! Sign-in, sign-up and sign-out live in the host application; the core only
//! needs a stable user identifier and an authenticated/unauthenticated
//! signal, which the `Identity` trait provides.

use crate::errors::{AppError, AppResult};

/// External identity collaborator, reduced to the surface the core needs.
pub trait Identity {
    /// Stable identifier of the signed-in user, or None when signed out.
    fn current_user(&self) -> Option<String>;
}

/// Explicit per-user context passed to every operation that touches user
/// data. Opened after a successful sign-in, dropped on sign-out; never a
/// global.
#[derive(Debug, Clone)]
pub struct Session {
    user_id: String,
}

impl Session {
    pub fn open(identity: &dyn Identity) -> AppResult<Self> {
        let user_id = identity.current_user().ok_or(AppError::NotAuthenticated)?;
        tracing::debug!(user_id = %user_id, "session opened");
        Ok(Self { user_id })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}
