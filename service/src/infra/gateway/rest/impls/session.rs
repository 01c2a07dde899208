//! Session-related [`Gateway`] implementations.

use common::operations::Insert;
use tracerr::Traced;

use crate::{
    domain::user::session::{Credentials, TokenPair},
    infra::{
        gateway::{self, rest::wire, Rest},
        Gateway,
    },
};

impl Gateway<Insert<Credentials>> for Rest {
    type Ok = TokenPair;
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Insert(credentials): Insert<Credentials>,
    ) -> Result<Self::Ok, Self::Err> {
        let pair: wire::TokenPair = self
            .post_json("token/", &wire::CredentialsBody::from(&credentials))
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))?;
        Ok(pair.into())
    }
}
