//! [`Query`] collection related to the enquiry inboxes.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::{domain::enquiry::Variant, read};

use super::GatewayQuery;

/// [`Query`] for a trip enquiry inbox of the provided [`Variant`].
pub type Trips = GatewayQuery<By<Vec<read::enquiry::TripRow>, Variant>>;

/// [`Query`] for the general enquiry inbox.
pub type General = GatewayQuery<By<Vec<read::enquiry::GeneralRow>, ()>>;
