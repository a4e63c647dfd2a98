//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix cookie session so handlers only persist, read or clear the
//! signed-in account.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::Error;
use crate::domain::ports::AuthenticatedUser;

pub(crate) const ACCOUNT_KEY: &str = "account";

/// Account stored in the session cookie after login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Provider account id.
    pub id: String,
    /// Account email.
    pub email: String,
}

impl From<AuthenticatedUser> for SessionUser {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// Newtype wrapper exposing account-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist `user` and rotate the session id.
    pub fn persist_user(&self, user: &SessionUser) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(ACCOUNT_KEY, user)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Signed-in account, if any.
    ///
    /// An undecodable cookie value counts as signed out.
    pub fn user(&self) -> Option<SessionUser> {
        self.0
            .get::<SessionUser>(ACCOUNT_KEY)
            .unwrap_or_else(|error| {
                warn!(%error, "discarding unreadable session account");
                None
            })
    }

    /// Signed-in account or `401 Unauthorized`.
    pub fn require_user(&self) -> Result<SessionUser, Error> {
        self.user()
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Drop every session value.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
