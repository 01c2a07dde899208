//! [`Query`] collection related to [`Visa`]s.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::domain::Visa;

use super::GatewayQuery;

/// [`Query`] for the [`Visa`] list, optionally filtered by destination
/// country.
pub type List = GatewayQuery<By<Vec<Visa>, Option<String>>>;
