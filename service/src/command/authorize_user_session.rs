//! [`Command`] for authorizing a stored [`Session`] token.

use common::DateTime;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::user::session::{self, Session, Token},
    Service,
};

use super::Command;

/// [`Command`] for authorizing a stored [`Session`] token.
///
/// Evaluated once per guarded invocation, not continuously: decodes the
/// token's claims client-side and compares the embedded expiry to the
/// current time. There is no token renewal.
#[derive(Clone, Debug, From)]
pub struct AuthorizeUserSession {
    /// [`Session`] token to authorize.
    pub token: Token,
}

impl<G> Command<AuthorizeUserSession> for Service<G> {
    type Ok = Session;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AuthorizeUserSession,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AuthorizeUserSession { token } = cmd;

        let session = session::decode_unverified(&token)
            .map_err(tracerr::from_and_wrap!(=> E))?;

        if session.is_expired_at(DateTime::now()) {
            return Err(tracerr::new!(E::Expired));
        }

        Ok(session)
    }
}

/// Error of [`AuthorizeUserSession`] [`Command`] execution.
///
/// Both variants mean the same thing to the user: there is no session, so
/// the stored unit must be purged and the login screen shown. Neither is
/// surfaced as an error message.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Token cannot be decoded as a JSON Web Token.
    #[display("Failed to decode a JSON Web Token: {_0}")]
    JsonWebTokenDecodeError(jsonwebtoken::errors::Error),

    /// Token is well-formed but its [`Session`] has expired.
    #[display("`Session` has expired")]
    Expired,
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::DateTime;

    use crate::{
        domain::user::session::{Session, Token},
        share, Config, Service,
    };

    use super::{AuthorizeUserSession, Command as _, ExecutionError};

    fn service() -> Service<()> {
        Service::new(
            Config {
                contact: share::Contact {
                    name: "Sunrise Holidays".to_owned(),
                    phone: "+91 98765 43210".to_owned(),
                    email: "hello@sunrise.example".to_owned(),
                },
            },
            (),
        )
    }

    fn token(expires_in: i64) -> Token {
        let now = DateTime::now();
        let expires_at = if expires_in >= 0 {
            now + Duration::from_secs(expires_in.unsigned_abs())
        } else {
            now - Duration::from_secs(expires_in.unsigned_abs())
        };
        jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &Session {
                user_id: 42.into(),
                expires_at: expires_at.coerce(),
            },
            &jsonwebtoken::EncodingKey::from_secret(b"server-only"),
        )
        .unwrap()
        .parse()
        .unwrap()
    }

    #[tokio::test]
    async fn live_token_authorizes() {
        let session = service()
            .execute(AuthorizeUserSession {
                token: token(1800),
            })
            .await
            .unwrap();
        assert_eq!(session.user_id, 42.into());
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let err = service()
            .execute(AuthorizeUserSession { token: token(-1) })
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::Expired));
    }

    #[tokio::test]
    async fn malformed_token_is_rejected() {
        let err = service()
            .execute(AuthorizeUserSession {
                token: "not-a-jwt".parse().unwrap(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::JsonWebTokenDecodeError(_),
        ));
    }
}
