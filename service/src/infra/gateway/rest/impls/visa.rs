//! [`Visa`]-related [`Gateway`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{visa, Visa},
    infra::{
        gateway::{self, rest::wire, Rest},
        Gateway,
    },
};

impl Gateway<Select<By<Vec<Visa>, Option<String>>>> for Rest {
    type Ok = Vec<Visa>;
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Visa>, Option<String>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let country = by.into_inner();
        let query = country
            .as_deref()
            .map(|c| vec![("country", c)])
            .unwrap_or_default();

        let rows: Vec<wire::Visa> = self
            .get_json("visas/", &query)
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))?;
        Ok(rows.into_iter().map(Visa::from).collect())
    }
}

impl Gateway<Insert<visa::Draft>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<visa::Draft>,
    ) -> Result<Self::Ok, Self::Err> {
        self.post_created("visas/", &wire::VisaBody::from(&draft))
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Update<By<Visa, (visa::Id, visa::Draft)>>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<Visa, (visa::Id, visa::Draft)>>,
    ) -> Result<Self::Ok, Self::Err> {
        let (id, draft) = by.into_inner();
        self.put_json(&format!("visas/{id}/"), &wire::VisaBody::from(&draft))
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Delete<By<Visa, visa::Id>>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Visa, visa::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.delete(&format!("visas/{id}/"))
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Insert<visa::DetailsEmail>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Insert(email): Insert<visa::DetailsEmail>,
    ) -> Result<Self::Ok, Self::Err> {
        self.post_ok(
            "send-visa-details/",
            &wire::VisaDetailsBody::from(&email),
        )
        .await
        .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}
