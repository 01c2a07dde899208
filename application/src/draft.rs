//! JSON draft files consumed by the console.
//!
//! Console counterparts of the website's forms: each draft is a tolerant
//! JSON shape converted into the strict domain types before anything else
//! happens to it.

use std::{fs, io, path::Path};

use derive_more::{Display, Error as StdError, From};
use serde::{de::DeserializeOwned, Deserialize};
use service::domain::{
    enquiry::{ContactDetails, TripDetails},
    listing, refdata, user, visa,
};

/// Loads a draft of type `T` from the provided JSON file.
///
/// # Errors
///
/// Errors if the file cannot be read or is not a valid draft.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    Ok(serde_json::from_slice(&fs::read(path)?)?)
}

/// Draft of a trip enquiry.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Trip {
    /// Destination cities with their nights.
    pub cities: Vec<City>,

    /// City the trip starts from.
    pub start_city: String,

    /// Desired travel date (`YYYY-MM-DD`).
    pub travel_date: Option<String>,

    /// Nationality of the travellers.
    pub nationality: Option<String>,

    /// Per-room traveller breakdown.
    pub rooms: Vec<RoomDraft>,

    /// Desired hotel star rating.
    pub star_rating: String,

    /// Desired holiday type.
    pub holiday_type: String,

    /// Desired room type.
    pub room_type: String,

    /// Desired meal plan.
    pub meal_plan: String,

    /// Desired transfer arrangement.
    pub transfer: String,

    /// Free-form extra inclusions.
    pub other_inclusions: String,

    /// Free-form budget preference.
    pub budget: String,

    /// Contact details of the enquirer.
    pub contact: Contact,
}

impl Default for Trip {
    fn default() -> Self {
        Self {
            cities: Vec::new(),
            start_city: String::new(),
            travel_date: None,
            nationality: None,
            rooms: Vec::new(),
            star_rating: String::new(),
            holiday_type: String::new(),
            room_type: String::new(),
            meal_plan: String::new(),
            transfer: String::new(),
            other_inclusions: String::new(),
            budget: String::new(),
            contact: Contact::default(),
        }
    }
}

impl Trip {
    /// Applies this draft onto the trip step of a wizard.
    ///
    /// Absent draft fields leave the wizard's variant defaults in place.
    /// Room changes go through the same resize rules as interactive edits,
    /// so the per-room invariants hold afterwards.
    pub fn apply_trip(&self, trip: &mut TripDetails) {
        if !self.cities.is_empty() {
            trip.cities = self
                .cities
                .iter()
                .map(|c| service::domain::enquiry::CityStay {
                    name: c.name.clone(),
                    nights: c.nights,
                })
                .collect();
        }
        if !self.start_city.is_empty() {
            trip.start_city = self.start_city.clone();
        }
        trip.travel_date = self
            .travel_date
            .as_deref()
            .and_then(|d| common::Date::from_iso8601(d).ok());
        if let Some(nationality) = &self.nationality {
            trip.nationality = nationality.clone();
        }

        if !self.rooms.is_empty() {
            trip.set_room_count(
                self.rooms.len().min(TripDetails::MAX_ROOMS),
            );
            for (slot, draft) in trip.rooms.iter_mut().zip(&self.rooms) {
                slot.set_adults(draft.adults);
                slot.set_children(draft.children);
                for (i, age) in draft.child_ages.iter().enumerate() {
                    slot.set_child_age(i, *age);
                }
            }
        }

        trip.star_rating = self.star_rating.clone();
        trip.holiday_type = self.holiday_type.clone();
        trip.room_type = self.room_type.clone();
        trip.meal_plan = self.meal_plan.clone();
        trip.transfer = self.transfer.clone();
        trip.other_inclusions = self.other_inclusions.clone();
        trip.budget = self.budget.clone();
    }

    /// Applies this draft onto the contact step of a wizard.
    pub fn apply_contact(&self, contact: &mut ContactDetails) {
        contact.full_name = self.contact.full_name.clone();
        contact.email = self.contact.email.clone();
        contact.phone = self.contact.phone.clone();
        contact.message = self.contact.message.clone();
    }
}

/// Destination city row of a [`Trip`] draft.
#[derive(Debug, Deserialize)]
pub struct City {
    /// Name of the city.
    pub name: String,

    /// Nights spent in the city.
    #[serde(default = "one")]
    pub nights: u16,
}

/// Room row of a [`Trip`] draft.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RoomDraft {
    /// Number of adults in the room.
    pub adults: u8,

    /// Number of children in the room.
    pub children: u8,

    /// Ages of the children.
    pub child_ages: Vec<u8>,
}

impl Default for RoomDraft {
    fn default() -> Self {
        Self {
            adults: 2,
            children: 0,
            child_ages: Vec::new(),
        }
    }
}

/// Contact block of a [`Trip`] draft.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Full name of the enquirer.
    pub full_name: String,

    /// Email address of the enquirer.
    pub email: String,

    /// Phone number of the enquirer.
    pub phone: String,

    /// Free-form message of the enquirer.
    pub message: String,
}

/// Draft of a holiday package.
#[derive(Debug, Deserialize)]
pub struct Package {
    /// Title of the package.
    pub title: String,

    /// Category of the package (`Domestic`, `International` or `Umrah`).
    pub category: String,

    /// City the trip starts from.
    pub starting_city: String,

    /// Total number of days.
    pub days: u16,

    /// Strike-through price, in whole rupees.
    #[serde(default)]
    pub price: Option<u64>,

    /// Effective per-person price, in whole rupees.
    pub offer_price: u64,

    /// Indicator whether flights are included.
    #[serde(default)]
    pub with_flight: bool,

    /// Maximum group size, if limited.
    #[serde(default)]
    pub group_size: Option<u32>,

    /// Date the first departure starts on (`YYYY-MM-DD`), if fixed.
    #[serde(default)]
    pub start_date: Option<String>,

    /// Description, one highlight per line.
    #[serde(default)]
    pub description: String,

    /// Visited destinations with their nights.
    #[serde(default)]
    pub destinations: Vec<City>,

    /// Inclusions of the package.
    #[serde(default)]
    pub inclusions: Vec<String>,

    /// Exclusions of the package.
    #[serde(default)]
    pub exclusions: Vec<String>,

    /// Day-by-day itinerary of the package.
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
}

/// Itinerary day row of a [`Package`] draft.
#[derive(Debug, Deserialize)]
pub struct ItineraryDay {
    /// Number of the day inside the trip, starting from 1.
    pub day_number: u16,

    /// Title of the day.
    pub title: String,

    /// Description of the day.
    #[serde(default)]
    pub description: String,
}

impl TryFrom<Package> for listing::Draft {
    type Error = Error;

    fn try_from(draft: Package) -> Result<Self, Self::Error> {
        Ok(Self {
            title: draft
                .title
                .parse()
                .map_err(|_| Error::Invalid("title"))?,
            category: listing::Category::parse(&draft.category)
                .ok_or(Error::Invalid("category"))?,
            starting_city: draft.starting_city,
            days: draft.days,
            price: draft.price,
            offer_price: draft.offer_price,
            with_flight: draft.with_flight,
            group_size: draft.group_size,
            start_date: match draft.start_date.as_deref() {
                Some(date) => Some(
                    common::Date::from_iso8601(date)
                        .map_err(|_| Error::Invalid("start_date"))?,
                ),
                None => None,
            },
            description: draft.description,
            destinations: draft
                .destinations
                .into_iter()
                .map(|d| listing::DestinationStay {
                    name: d.name,
                    nights: d.nights,
                })
                .collect(),
            inclusions: draft.inclusions,
            exclusions: draft.exclusions,
            itinerary: draft
                .itinerary
                .into_iter()
                .map(|day| listing::ItineraryDay {
                    day_number: day.day_number,
                    title: day.title,
                    description: day.description,
                    image: None,
                })
                .collect(),
        })
    }
}

/// Draft of a destination.
#[derive(Debug, Deserialize)]
pub struct Destination {
    /// Name of the destination.
    pub name: String,

    /// Country of the destination.
    #[serde(default)]
    pub country: Option<String>,
}

impl From<Destination> for refdata::DestinationDraft {
    fn from(draft: Destination) -> Self {
        Self {
            name: draft.name,
            country: draft.country,
        }
    }
}

/// Draft of a starting city.
#[derive(Debug, Deserialize)]
pub struct StartingCity {
    /// Name of the starting city.
    pub name: String,

    /// Region of the starting city.
    #[serde(default)]
    pub region: Option<String>,
}

impl From<StartingCity> for refdata::StartingCityDraft {
    fn from(draft: StartingCity) -> Self {
        Self {
            name: draft.name,
            region: draft.region,
        }
    }
}

/// Draft of a nationality.
#[derive(Debug, Deserialize)]
pub struct Nationality {
    /// Demonym of the nationality.
    pub nationality: String,

    /// Country of the nationality.
    pub country: String,
}

impl From<Nationality> for refdata::NationalityDraft {
    fn from(draft: Nationality) -> Self {
        Self {
            nationality: draft.nationality,
            country: draft.country,
        }
    }
}

/// Draft of a visa.
#[derive(Debug, Deserialize)]
pub struct Visa {
    /// Title of the visa.
    pub title: String,

    /// Destination country of the visa.
    pub country: String,

    /// Entry type of the visa.
    #[serde(default)]
    pub entry_type: Option<String>,

    /// Validity of the visa.
    #[serde(default)]
    pub validity: Option<String>,

    /// Stay duration of the visa.
    #[serde(default)]
    pub duration: Option<String>,

    /// Processing time of the visa.
    #[serde(default)]
    pub processing_time: Option<String>,

    /// Price of the visa, in whole rupees.
    pub price: u64,
}

impl From<Visa> for visa::Draft {
    fn from(draft: Visa) -> Self {
        Self {
            title: draft.title,
            country: draft.country,
            entry_type: draft.entry_type,
            validity: draft.validity,
            duration: draft.duration,
            processing_time: draft.processing_time,
            price: draft.price,
        }
    }
}

/// Draft of a back-office user.
#[derive(Debug, Deserialize)]
pub struct User {
    /// Username of the user.
    pub username: String,

    /// Email address of the user.
    #[serde(default)]
    pub email: Option<String>,

    /// Password of the user.
    pub password: String,
}

impl TryFrom<User> for user::Draft {
    type Error = Error;

    fn try_from(draft: User) -> Result<Self, Self::Error> {
        Ok(Self {
            username: draft
                .username
                .parse()
                .map_err(|_| Error::Invalid("username"))?,
            email: draft.email,
            password: draft
                .password
                .parse()
                .map_err(|_| Error::Invalid("password"))?,
        })
    }
}

/// Defaulted `nights` of a [`City`] row.
const fn one() -> u16 {
    1
}

/// Draft loading error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Draft file cannot be read.
    #[display("cannot read the draft file: {_0}")]
    Io(io::Error),

    /// Draft file is not valid JSON of the expected shape.
    #[display("draft file is malformed: {_0}")]
    Malformed(serde_json::Error),

    /// Draft field does not satisfy its domain format.
    #[display("draft field `{_0}` is invalid")]
    #[from(ignore)]
    Invalid(#[error(not(source))] &'static str),
}
