//! [`Listing`] definitions.

use common::{define_kind, unit, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use common::DateTime;

/// Holiday package listing of the catalog.
///
/// Fetched from the platform API and never mutated locally. Fields the
/// backend omitted are normalized to their empty forms at the gateway
/// boundary, so predicates over a [`Listing`] never have to guess.
#[derive(Clone, Debug)]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Title`] of this [`Listing`].
    pub title: Title,

    /// [`Category`] of this [`Listing`], if the backend provided a known one.
    pub category: Option<Category>,

    /// City this [`Listing`]'s trip starts from.
    pub starting_city: Option<String>,

    /// Visited destinations with their nights, in trip order.
    pub destinations: Vec<DestinationStay>,

    /// Total number of nights of this [`Listing`].
    pub nights: Option<u16>,

    /// Total number of days of this [`Listing`].
    pub days: Option<u16>,

    /// Strike-through price of this [`Listing`], if any.
    pub price: Option<Money>,

    /// Effective per-person price of this [`Listing`].
    ///
    /// Zero when the backend omitted it.
    pub offer_price: Money,

    /// Indicator whether flights are included.
    pub with_flight: bool,

    /// Maximum group size, if limited.
    pub group_size: Option<u32>,

    /// Date the first departure starts on, if fixed.
    pub start_date: Option<common::Date>,

    /// Description lines of this [`Listing`] (one highlight per line).
    pub description: Vec<String>,

    /// Inclusions of this [`Listing`].
    pub inclusions: Vec<String>,

    /// Exclusions of this [`Listing`].
    pub exclusions: Vec<String>,

    /// Day-by-day [`ItineraryDay`]s of this [`Listing`].
    pub itinerary: Vec<ItineraryDay>,

    /// URL of the card image, if any.
    pub card_image: Option<String>,

    /// URL of the header image, if any.
    pub header_image: Option<String>,
}

impl Listing {
    /// Returns the duration of this [`Listing`] as a `{nights}N / {days}D`
    /// label, when both are known.
    #[must_use]
    pub fn duration(&self) -> Option<String> {
        Some(format!("{}N / {}D", self.nights?, self.days?))
    }
}

/// ID of a [`Listing`].
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

/// Title of a [`Listing`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `title` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title && !title.is_empty() && title.len() <= 512
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

define_kind! {
    #[doc = "Category of a [`Listing`]."]
    enum Category {
        #[doc = "A trip inside the home country."]
        Domestic = 1,

        #[doc = "A trip abroad."]
        International = 2,

        #[doc = "An Umrah pilgrimage trip."]
        Umrah = 3,
    }
}

impl Category {
    /// Parses a [`Category`] from its wire representation, tolerating any
    /// letter casing.
    #[must_use]
    pub fn parse(raw: impl AsRef<str>) -> Option<Self> {
        match raw.as_ref().to_ascii_uppercase().as_str() {
            "DOMESTIC" => Some(Self::Domestic),
            "INTERNATIONAL" => Some(Self::International),
            "UMRAH" => Some(Self::Umrah),
            _ => None,
        }
    }
}

/// One destination of a [`Listing`] with the nights spent there.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DestinationStay {
    /// Name of the destination.
    pub name: String,

    /// Nights spent at the destination.
    pub nights: u16,
}

/// One day of a [`Listing`]'s itinerary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItineraryDay {
    /// Number of this day inside the trip, starting from 1.
    pub day_number: u16,

    /// Title of this day.
    pub title: String,

    /// Description of this day.
    pub description: String,

    /// URL of this day's image, if any.
    pub image: Option<String>,
}

/// Draft of a new or updated [`Listing`], as the back-office edits it.
///
/// Images are managed through the media pipeline, not from here.
#[derive(Clone, Debug)]
pub struct Draft {
    /// [`Title`] of the [`Listing`].
    pub title: Title,

    /// [`Category`] of the [`Listing`].
    pub category: Category,

    /// City the trip starts from.
    pub starting_city: String,

    /// Total number of days.
    pub days: u16,

    /// Strike-through price, in whole rupees, if any.
    pub price: Option<u64>,

    /// Effective per-person price, in whole rupees.
    pub offer_price: u64,

    /// Indicator whether flights are included.
    pub with_flight: bool,

    /// Maximum group size, if limited.
    pub group_size: Option<u32>,

    /// Date the first departure starts on, if fixed.
    pub start_date: Option<common::Date>,

    /// Description of the [`Listing`], one highlight per line.
    pub description: String,

    /// Visited destinations with their nights, in trip order.
    pub destinations: Vec<DestinationStay>,

    /// Inclusions of the [`Listing`].
    pub inclusions: Vec<String>,

    /// Exclusions of the [`Listing`].
    pub exclusions: Vec<String>,

    /// Day-by-day [`ItineraryDay`]s of the [`Listing`].
    pub itinerary: Vec<ItineraryDay>,
}

/// [`DateTime`] when a [`Listing`] was created.
pub type CreationDateTime = DateTimeOf<(Listing, unit::Creation)>;

#[cfg(test)]
mod spec {
    use super::{Category, Listing, Title};
    use common::Money;

    fn listing(id: u64, title: &str) -> Listing {
        Listing {
            id: id.into(),
            title: title.parse::<Title>().unwrap(),
            category: None,
            starting_city: None,
            destinations: Vec::new(),
            nights: None,
            days: None,
            price: None,
            offer_price: Money::rupees(0),
            with_flight: false,
            group_size: None,
            start_date: None,
            description: Vec::new(),
            inclusions: Vec::new(),
            exclusions: Vec::new(),
            itinerary: Vec::new(),
            card_image: None,
            header_image: None,
        }
    }

    #[test]
    fn category_parses_wire_casing() {
        assert_eq!(Category::parse("Domestic"), Some(Category::Domestic));
        assert_eq!(Category::parse("INTERNATIONAL"), Some(Category::International));
        assert_eq!(Category::parse("umrah"), Some(Category::Umrah));
        assert_eq!(Category::parse("Cruise"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn duration_requires_both_components() {
        let mut l = listing(1, "Bali Getaway");
        assert_eq!(l.duration(), None);

        l.nights = Some(4);
        assert_eq!(l.duration(), None);

        l.days = Some(5);
        assert_eq!(l.duration().as_deref(), Some("4N / 5D"));
    }
}
