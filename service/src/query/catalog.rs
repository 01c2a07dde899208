//! [`Query`] collection related to the catalog.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::domain::{listing, Listing, User};

use super::GatewayQuery;

/// [`Query`] for the full [`Listing`] catalog.
pub type Packages = GatewayQuery<By<Vec<Listing>, ()>>;

/// [`Query`] for a single [`Listing`] by its ID.
pub type Package = GatewayQuery<By<Option<Listing>, listing::Id>>;

/// [`Query`] for the back-office [`User`] list.
pub type Users = GatewayQuery<By<Vec<User>, ()>>;
