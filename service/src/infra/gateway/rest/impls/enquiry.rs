//! Enquiry-related [`Gateway`] implementations.

use common::operations::{By, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::enquiry::{Enquiry, TripEnquiry, Variant},
    infra::{
        gateway::{self, rest::wire, Rest},
        Gateway,
    },
    read,
};

/// Returns the collection path of the provided enquiry [`Variant`].
fn variant_path(variant: Variant) -> &'static str {
    match variant {
        Variant::Holiday => "holiday-form/",
        Variant::Umrah => "umrah-form/",
    }
}

impl Gateway<Insert<TripEnquiry>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Insert(enquiry): Insert<TripEnquiry>,
    ) -> Result<Self::Ok, Self::Err> {
        self.post_created(
            variant_path(enquiry.variant),
            &wire::TripEnquiryBody::from(&enquiry),
        )
        .await
        .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Insert<Enquiry>> for Rest {
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Insert(enquiry): Insert<Enquiry>,
    ) -> Result<Self::Ok, Self::Err> {
        self.post_created("enquiry-form/", &wire::EnquiryBody::from(&enquiry))
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))
    }
}

impl Gateway<Select<By<Vec<read::enquiry::TripRow>, Variant>>> for Rest {
    type Ok = Vec<read::enquiry::TripRow>;
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<read::enquiry::TripRow>, Variant>>,
    ) -> Result<Self::Ok, Self::Err> {
        let rows: Vec<wire::TripEnquiryRow> = self
            .get_json(variant_path(by.into_inner()), &[])
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))?;
        Ok(rows.into_iter().map(read::enquiry::TripRow::from).collect())
    }
}

impl Gateway<Select<By<Vec<read::enquiry::GeneralRow>, ()>>> for Rest {
    type Ok = Vec<read::enquiry::GeneralRow>;
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<read::enquiry::GeneralRow>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let rows: Vec<wire::GeneralEnquiryRow> = self
            .get_json("enquiry-form/", &[])
            .await
            .map_err(tracerr::from_and_wrap!(=> gateway::Error))?;
        Ok(rows
            .into_iter()
            .map(read::enquiry::GeneralRow::from)
            .collect())
    }
}
