//! Reference-data [`Gateway`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::refdata::{
        self, Destination, DestinationDraft, Nationality, NationalityDraft,
        StartingCity, StartingCityDraft, UmrahDestination,
    },
    infra::{
        gateway::{self, rest::wire, Rest},
        Gateway,
    },
};

impl Gateway<Select<By<Vec<Destination>, ()>>> for Rest {
    type Ok = Vec<Destination>;
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Destination>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let rows: Vec<wire::Destination> = self
            .get_json("destinations/", &[])
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))?;
        Ok(rows.into_iter().map(Destination::from).collect())
    }
}

impl Gateway<Select<By<Vec<StartingCity>, ()>>> for Rest {
    type Ok = Vec<StartingCity>;
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<StartingCity>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let rows: Vec<wire::StartingCity> = self
            .get_json("starting-cities/", &[])
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))?;
        Ok(rows.into_iter().map(StartingCity::from).collect())
    }
}

impl Gateway<Select<By<Vec<Nationality>, ()>>> for Rest {
    type Ok = Vec<Nationality>;
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Nationality>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let rows: Vec<wire::Nationality> = self
            .get_json("nationalities/", &[])
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))?;
        Ok(rows.into_iter().map(Nationality::from).collect())
    }
}

impl Gateway<Select<By<Vec<UmrahDestination>, ()>>> for Rest {
    type Ok = Vec<UmrahDestination>;
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<UmrahDestination>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let rows: Vec<wire::UmrahDestination> = self
            .get_json("umrah-destinations/", &[])
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))?;
        Ok(rows.into_iter().map(UmrahDestination::from).collect())
    }
}

impl Gateway<Insert<DestinationDraft>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<DestinationDraft>,
    ) -> Result<Self::Ok, Self::Err> {
        self.post_created(
            "destinations/",
            &wire::DestinationBody::from(&draft),
        )
        .await
        .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Update<By<Destination, (refdata::Id, DestinationDraft)>>>
    for Rest
{
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<Destination, (refdata::Id, DestinationDraft)>>,
    ) -> Result<Self::Ok, Self::Err> {
        let (id, draft) = by.into_inner();
        self.put_json(
            &format!("destinations/{id}/"),
            &wire::DestinationBody::from(&draft),
        )
        .await
        .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Delete<By<Destination, refdata::Id>>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Destination, refdata::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.delete(&format!("destinations/{id}/"))
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Insert<StartingCityDraft>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<StartingCityDraft>,
    ) -> Result<Self::Ok, Self::Err> {
        self.post_created(
            "starting-cities/",
            &wire::StartingCityBody::from(&draft),
        )
        .await
        .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Update<By<StartingCity, (refdata::Id, StartingCityDraft)>>>
    for Rest
{
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Update(by): Update<
            By<StartingCity, (refdata::Id, StartingCityDraft)>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let (id, draft) = by.into_inner();
        self.put_json(
            &format!("starting-cities/{id}/"),
            &wire::StartingCityBody::from(&draft),
        )
        .await
        .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Delete<By<StartingCity, refdata::Id>>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<StartingCity, refdata::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.delete(&format!("starting-cities/{id}/"))
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Insert<NationalityDraft>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<NationalityDraft>,
    ) -> Result<Self::Ok, Self::Err> {
        self.post_created(
            "nationalities/",
            &wire::NationalityBody::from(&draft),
        )
        .await
        .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Update<By<Nationality, (refdata::Id, NationalityDraft)>>>
    for Rest
{
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<Nationality, (refdata::Id, NationalityDraft)>>,
    ) -> Result<Self::Ok, Self::Err> {
        let (id, draft) = by.into_inner();
        self.put_json(
            &format!("nationalities/{id}/"),
            &wire::NationalityBody::from(&draft),
        )
        .await
        .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Delete<By<Nationality, refdata::Id>>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Nationality, refdata::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.delete(&format!("nationalities/{id}/"))
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}
