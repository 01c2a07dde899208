//! [`User`]-related [`Gateway`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{user, User},
    infra::{
        gateway::{self, rest::wire, Rest},
        Gateway,
    },
};

impl Gateway<Select<By<Vec<User>, ()>>> for Rest {
    type Ok = Vec<User>;
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<User>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let rows: Vec<wire::User> = self
            .get_json("users/", &[])
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))?;
        // Rows with malformed usernames are dropped at the boundary.
        Ok(rows.into_iter().filter_map(|row| row.try_into().ok()).collect())
    }
}

impl Gateway<Insert<user::Draft>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<user::Draft>,
    ) -> Result<Self::Ok, Self::Err> {
        self.post_created("users/", &wire::UserBody::from(&draft))
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Update<By<User, (user::Id, user::Draft)>>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<User, (user::Id, user::Draft)>>,
    ) -> Result<Self::Ok, Self::Err> {
        let (id, draft) = by.into_inner();
        self.put_json(&format!("users/{id}/"), &wire::UserBody::from(&draft))
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Delete<By<User, user::Id>>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<User, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.delete(&format!("users/{id}/"))
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}
