//! [`Command`] for creating a [`Session`] by logging in.

use common::operations::Insert;
use derive_more::{Display, Error, From};
use secrecy::SecretBox;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::user::session::Token;
use crate::{
    domain::{
        user::{
            self,
            session::{self, Credentials, Session, TokenPair},
        },
        User,
    },
    infra::{gateway, Gateway},
    Service,
};

use super::Command;

/// [`Command`] for creating a [`Session`] by exchanging credentials for a
/// token pair.
#[derive(Debug)]
pub struct CreateUserSession {
    /// [`user::Username`] to log in as.
    pub username: user::Username,

    /// [`user::Password`] to log in with.
    pub password: SecretBox<user::Password>,
}

/// Output of [`CreateUserSession`] [`Command`].
#[derive(Clone, Debug)]
pub struct Output {
    /// Issued access and refresh [`Token`]s.
    pub tokens: TokenPair,

    /// Decoded [`Session`] of the access token.
    pub session: Session,

    /// Snapshot of the logged-in [`User`].
    pub user: User,
}

impl<G> Command<CreateUserSession> for Service<G>
where
    G: Gateway<
        Insert<Credentials>,
        Ok = TokenPair,
        Err = Traced<gateway::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateUserSession,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateUserSession { username, password } = cmd;

        let tokens = self
            .gateway()
            .execute(Insert(Credentials {
                username: username.clone(),
                password,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let session = session::decode_unverified(&tokens.access)
            .map_err(tracerr::from_and_wrap!(=> E))?;

        Ok(Output {
            user: User {
                id: session.user_id,
                username,
            },
            session,
            tokens,
        })
    }
}

/// Error of [`CreateUserSession`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Gateway`] error.
    #[display("`Gateway` operation failed: {_0}")]
    Gateway(gateway::Error),

    /// Issued access token cannot be decoded.
    #[display("Failed to decode the issued access token: {_0}")]
    JsonWebTokenDecodeError(jsonwebtoken::errors::Error),
}
