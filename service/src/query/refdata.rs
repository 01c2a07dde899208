//! [`Query`] collection related to reference data.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::domain::refdata;

use super::GatewayQuery;

/// [`Query`] for the [`refdata::Destination`] list.
pub type Destinations = GatewayQuery<By<Vec<refdata::Destination>, ()>>;

/// [`Query`] for the [`refdata::StartingCity`] list.
pub type StartingCities = GatewayQuery<By<Vec<refdata::StartingCity>, ()>>;

/// [`Query`] for the [`refdata::Nationality`] list.
pub type Nationalities = GatewayQuery<By<Vec<refdata::Nationality>, ()>>;

/// [`Query`] for the [`refdata::UmrahDestination`] list.
pub type UmrahDestinations =
    GatewayQuery<By<Vec<refdata::UmrahDestination>, ()>>;
