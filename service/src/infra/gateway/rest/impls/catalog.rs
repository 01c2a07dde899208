//! Catalog-related [`Gateway`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{listing, Listing},
    infra::{
        gateway::{self, rest::wire, Rest},
        Gateway,
    },
};

impl Gateway<Select<By<Vec<Listing>, ()>>> for Rest {
    type Ok = Vec<Listing>;
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Listing>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let rows: Vec<wire::Package> = self
            .get_json("packages/", &[])
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))?;
        Ok(rows.into_iter().map(Listing::from).collect())
    }
}

impl Gateway<Select<By<Option<Listing>, listing::Id>>> for Rest {
    type Ok = Option<Listing>;
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Listing>, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let result: Result<wire::Package, _> =
            self.get_json(&format!("packages/{id}/"), &[]).await;

        match result {
            Ok(row) => Ok(Some(Listing::from(row))),
            Err(gateway::rest::Error::Status { status: 404, .. }) => Ok(None),
            Err(e) => {
                Err(tracerr::from_and_wrap!(=> gateway::Error)(e))
            }
        }
    }
}

impl Gateway<Insert<listing::Draft>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<listing::Draft>,
    ) -> Result<Self::Ok, Self::Err> {
        self.post_created("packages/", &wire::PackageBody::from(&draft))
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Update<By<Listing, (listing::Id, listing::Draft)>>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<Listing, (listing::Id, listing::Draft)>>,
    ) -> Result<Self::Ok, Self::Err> {
        // PUT replaces the full resource representation.
        let (id, draft) = by.into_inner();
        self.put_json(
            &format!("packages/{id}/"),
            &wire::PackageBody::from(&draft),
        )
        .await
        .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Delete<By<Listing, listing::Id>>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Listing, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.delete(&format!("packages/{id}/"))
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}
