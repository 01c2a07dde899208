//! Enquiry-related read definitions.

use common::{Date, DateTime};

/// Row of the back-office trip enquiry inboxes.
#[derive(Clone, Debug)]
pub struct TripRow {
    /// ID of the enquiry.
    pub id: u64,

    /// Full name of the enquirer.
    pub full_name: String,

    /// Email address of the enquirer.
    pub email: String,

    /// Phone number of the enquirer.
    pub phone: String,

    /// City the trip starts from.
    pub start_city: String,

    /// Desired travel [`Date`], if parseable.
    pub travel_date: Option<Date>,

    /// Number of rooms requested.
    pub rooms: u16,

    /// Total number of adults.
    pub adults: u16,

    /// Total number of children.
    pub children: u16,

    /// [`DateTime`] the enquiry was received at, if known.
    pub created_at: Option<DateTime>,
}

/// Row of the back-office general enquiry inbox.
#[derive(Clone, Debug)]
pub struct GeneralRow {
    /// ID of the enquiry.
    pub id: u64,

    /// Name of the enquirer.
    pub name: String,

    /// Email address of the enquirer, if provided.
    pub email: Option<String>,

    /// Phone number of the enquirer.
    pub phone: String,

    /// What the enquirer is looking for, if stated.
    pub purpose: Option<String>,

    /// Kind label of the enquiry (`General`, `Cab` or `Cruise`).
    pub enquiry_type: String,

    /// [`DateTime`] the enquiry was received at, if known.
    pub created_at: Option<DateTime>,
}
