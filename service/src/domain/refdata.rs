//! Reference data fed into filters and enquiry dropdowns.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// ID of a reference-data row.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(u64);

/// Destination offered by the platform.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Destination {
    /// ID of this [`Destination`].
    pub id: Id,

    /// Name of this [`Destination`].
    pub name: String,

    /// Country this [`Destination`] is in, if known.
    pub country: Option<String>,
}

/// City trips can start from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StartingCity {
    /// ID of this [`StartingCity`].
    pub id: Id,

    /// Name of this [`StartingCity`].
    pub name: String,

    /// Region this [`StartingCity`] belongs to, if known.
    pub region: Option<String>,
}

/// Nationality selectable on enquiry forms.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Nationality {
    /// ID of this [`Nationality`].
    pub id: Id,

    /// Demonym of this [`Nationality`] (e.g. `Indian`).
    pub nationality: String,

    /// Country of this [`Nationality`].
    pub country: String,
}

/// Destination of the Umrah enquiry flow.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UmrahDestination {
    /// ID of this [`UmrahDestination`].
    pub id: Id,

    /// Name of this [`UmrahDestination`].
    pub name: String,

    /// Country of this [`UmrahDestination`].
    pub country: Option<String>,
}

/// Draft of a new [`Destination`].
#[derive(Clone, Debug)]
pub struct DestinationDraft {
    /// Name of the new [`Destination`].
    pub name: String,

    /// Country of the new [`Destination`], if any.
    pub country: Option<String>,
}

/// Draft of a new [`StartingCity`].
#[derive(Clone, Debug)]
pub struct StartingCityDraft {
    /// Name of the new [`StartingCity`].
    pub name: String,

    /// Region of the new [`StartingCity`], if any.
    pub region: Option<String>,
}

/// Draft of a new [`Nationality`].
#[derive(Clone, Debug)]
pub struct NationalityDraft {
    /// Demonym of the new [`Nationality`].
    pub nationality: String,

    /// Country of the new [`Nationality`].
    pub country: String,
}
