//! Wire shapes of the platform API.
//!
//! Everything the backend sends is parsed into these tolerant shapes and
//! normalized into domain types right here, so unexpected payloads are
//! rejected or defaulted at the boundary instead of surprising the rest of
//! the client.

use common::Money;
use secrecy::ExposeSecret as _;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        enquiry::{self, TripEnquiry},
        listing::{self, Category, DestinationStay, ItineraryDay, Listing},
        refdata, user,
        user::session::Credentials,
        visa,
    },
    read,
};

/// Package row of `GET /api/packages/`.
#[derive(Debug, Deserialize)]
pub(super) struct Package {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    starting_city: Option<String>,
    #[serde(default)]
    nights: Option<u16>,
    #[serde(default)]
    days: Option<u16>,
    #[serde(default)]
    price: Option<u64>,
    #[serde(default, rename = "Offer_price")]
    offer_price: Option<u64>,
    #[serde(default)]
    with_flight: bool,
    #[serde(default)]
    group_size: Option<u32>,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    destinations: Vec<Stay>,
    #[serde(default)]
    inclusions: Vec<Text>,
    #[serde(default)]
    exclusions: Vec<Text>,
    #[serde(default)]
    itinerary: Vec<Itinerary>,
    #[serde(default)]
    card_image: Option<String>,
    #[serde(default)]
    header_image: Option<String>,
}

/// Destination row nested in a [`Package`].
#[derive(Debug, Default, Deserialize)]
pub(super) struct Stay {
    #[serde(default)]
    name: String,
    #[serde(default = "one")]
    nights: u16,
}

/// Bulleted text row nested in a [`Package`].
#[derive(Debug, Deserialize)]
pub(super) struct Text {
    #[serde(default)]
    text: String,
}

/// Itinerary day row nested in a [`Package`].
#[derive(Debug, Deserialize)]
pub(super) struct Itinerary {
    #[serde(default)]
    day_number: u16,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: Option<String>,
}

impl From<Package> for Listing {
    fn from(row: Package) -> Self {
        #[expect(unsafe_code, reason = "whitespace-trimmed fallback title")]
        let title = listing::Title::new(row.title.trim()).unwrap_or_else(
            // SAFETY: the literal is a valid non-empty trimmed title.
            || unsafe { listing::Title::new_unchecked("(untitled)") },
        );

        Self {
            id: row.id.into(),
            title,
            category: row.category.as_deref().and_then(Category::parse),
            starting_city: non_empty(row.starting_city),
            destinations: row
                .destinations
                .into_iter()
                .filter(|d| !d.name.trim().is_empty())
                .map(|d| DestinationStay {
                    name: d.name,
                    nights: d.nights,
                })
                .collect(),
            nights: row.nights,
            days: row.days,
            price: row.price.filter(|p| *p > 0).map(Money::rupees),
            offer_price: Money::rupees(row.offer_price.unwrap_or(0)),
            with_flight: row.with_flight,
            group_size: row.group_size.filter(|s| *s > 0),
            start_date: row
                .start_date
                .as_deref()
                .and_then(|d| common::Date::from_iso8601(d).ok()),
            description: row
                .description
                .unwrap_or_default()
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_owned)
                .collect(),
            inclusions: text_lines(row.inclusions),
            exclusions: text_lines(row.exclusions),
            itinerary: row
                .itinerary
                .into_iter()
                .map(|day| ItineraryDay {
                    day_number: day.day_number,
                    title: day.title,
                    description: day.description,
                    image: non_empty(day.image),
                })
                .collect(),
            card_image: non_empty(row.card_image),
            header_image: non_empty(row.header_image),
        }
    }
}

/// Destination row of `GET /api/destinations/`.
#[derive(Debug, Deserialize)]
pub(super) struct Destination {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    country: Option<String>,
}

impl From<Destination> for refdata::Destination {
    fn from(row: Destination) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            country: non_empty(row.country),
        }
    }
}

/// Starting city row of `GET /api/starting-cities/`.
#[derive(Debug, Deserialize)]
pub(super) struct StartingCity {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    region: Option<String>,
}

impl From<StartingCity> for refdata::StartingCity {
    fn from(row: StartingCity) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            region: non_empty(row.region),
        }
    }
}

/// Nationality row of `GET /api/nationalities/`.
#[derive(Debug, Deserialize)]
pub(super) struct Nationality {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    nationality: String,
    #[serde(default)]
    country: String,
}

impl From<Nationality> for refdata::Nationality {
    fn from(row: Nationality) -> Self {
        Self {
            id: row.id.into(),
            nationality: row.nationality,
            country: row.country,
        }
    }
}

/// Umrah destination row of `GET /api/umrah-destinations/`.
#[derive(Debug, Deserialize)]
pub(super) struct UmrahDestination {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    country: Option<String>,
}

impl From<UmrahDestination> for refdata::UmrahDestination {
    fn from(row: UmrahDestination) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            country: non_empty(row.country),
        }
    }
}

/// Visa row of `GET /api/visas/`.
#[derive(Debug, Deserialize)]
pub(super) struct Visa {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    entry_type: Option<String>,
    #[serde(default)]
    validity: Option<String>,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    processing_time: Option<String>,
    #[serde(default)]
    price: Option<u64>,
}

impl From<Visa> for visa::Visa {
    fn from(row: Visa) -> Self {
        Self {
            id: row.id.into(),
            title: row.title,
            country: non_empty(row.country),
            entry_type: non_empty(row.entry_type),
            validity: non_empty(row.validity),
            duration: non_empty(row.duration),
            processing_time: non_empty(row.processing_time),
            price: Money::rupees(row.price.unwrap_or(0)),
        }
    }
}

/// User row of `GET /api/users/`.
#[derive(Debug, Deserialize)]
pub(super) struct User {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    username: String,
}

impl TryFrom<User> for user::User {
    type Error = &'static str;

    fn try_from(row: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id.into(),
            username: row.username.parse()?,
        })
    }
}

/// Trip enquiry row of the back-office inboxes.
#[derive(Debug, Deserialize)]
pub(super) struct TripEnquiryRow {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    start_city: String,
    #[serde(default)]
    travel_date: Option<String>,
    #[serde(default)]
    rooms: Option<u16>,
    #[serde(default)]
    adults: Option<u16>,
    #[serde(default)]
    children: Option<u16>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<TripEnquiryRow> for read::enquiry::TripRow {
    fn from(row: TripEnquiryRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            phone: row.phone,
            start_city: row.start_city,
            travel_date: row
                .travel_date
                .as_deref()
                .and_then(|d| common::Date::from_iso8601(d).ok()),
            rooms: row.rooms.unwrap_or(0),
            adults: row.adults.unwrap_or(0),
            children: row.children.unwrap_or(0),
            created_at: row
                .created_at
                .as_deref()
                .and_then(|d| common::DateTime::from_rfc3339(d).ok()),
        }
    }
}

/// General enquiry row of the back-office inbox.
#[derive(Debug, Deserialize)]
pub(super) struct GeneralEnquiryRow {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    purpose: Option<String>,
    #[serde(default)]
    enquiry_type: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<GeneralEnquiryRow> for read::enquiry::GeneralRow {
    fn from(row: GeneralEnquiryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: non_empty(row.email),
            phone: row.phone,
            purpose: non_empty(row.purpose),
            enquiry_type: row
                .enquiry_type
                .unwrap_or_else(|| "General".to_owned()),
            created_at: row
                .created_at
                .as_deref()
                .and_then(|d| common::DateTime::from_rfc3339(d).ok()),
        }
    }
}

/// Token pair of `POST /api/token/`.
#[derive(Debug, Deserialize)]
pub(super) struct TokenPair {
    access: String,
    refresh: String,
}

impl From<TokenPair> for user::session::TokenPair {
    fn from(row: TokenPair) -> Self {
        // SAFETY: the platform responds with well-formed tokens.
        #[expect(unsafe_code, reason = "issued by the platform")]
        let (access, refresh) = unsafe {
            (
                user::session::Token::new_unchecked(row.access),
                user::session::Token::new_unchecked(row.refresh),
            )
        };
        Self { access, refresh }
    }
}

/// Body of `POST /api/holiday-form/` and `POST /api/umrah-form/`.
#[derive(Debug, Serialize)]
pub(super) struct TripEnquiryBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    package_type: Option<String>,
    cities: Vec<CityBody>,
    start_city: String,
    travel_date: Option<String>,
    nationality: String,
    rooms: usize,
    room_details: Vec<RoomBody>,
    adults: u16,
    children: u16,
    star_rating: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    holiday_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meal_plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transfer_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    other_inclusions: Option<String>,
    budget: String,
    full_name: String,
    email: String,
    phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// City row nested in a [`TripEnquiryBody`].
#[derive(Debug, Serialize)]
pub(super) struct CityBody {
    destination: String,
    nights: u16,
}

/// Room row nested in a [`TripEnquiryBody`].
#[derive(Debug, Serialize)]
pub(super) struct RoomBody {
    adults: u8,
    children: u8,
    #[serde(rename = "childAges", skip_serializing_if = "Vec::is_empty")]
    child_ages: Vec<Option<u8>>,
}

impl From<&TripEnquiry> for TripEnquiryBody {
    fn from(enquiry: &TripEnquiry) -> Self {
        let trip = &enquiry.trip;
        let contact = &enquiry.contact;
        let holiday = enquiry.variant == enquiry::Variant::Holiday;

        Self {
            package_type: enquiry.package_type.clone(),
            cities: trip
                .cities
                .iter()
                .map(|c| CityBody {
                    destination: c.name.clone(),
                    nights: c.nights,
                })
                .collect(),
            start_city: trip.start_city.clone(),
            travel_date: trip.travel_date.map(|d| d.to_iso8601()),
            nationality: trip.nationality.clone(),
            rooms: trip.rooms.len(),
            room_details: trip
                .rooms
                .iter()
                .map(|r| RoomBody {
                    adults: r.adults,
                    children: r.children,
                    child_ages: r.child_ages.clone(),
                })
                .collect(),
            adults: trip.total_adults(),
            children: trip.total_children(),
            star_rating: trip.star_rating.clone(),
            holiday_type: holiday.then(|| trip.holiday_type.clone()),
            room_type: holiday.then(|| trip.room_type.clone()),
            meal_plan: holiday.then(|| trip.meal_plan.clone()),
            transfer_details: holiday.then(|| trip.transfer.clone()),
            other_inclusions: holiday.then(|| trip.other_inclusions.clone()),
            budget: trip.budget.clone(),
            full_name: contact.full_name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            message: holiday.then(|| contact.message.clone()),
        }
    }
}

/// Body of `POST /api/enquiry-form/`.
#[derive(Debug, Serialize)]
pub(super) struct EnquiryBody {
    name: String,
    email: String,
    phone: String,
    purpose: String,
    enquiry_type: &'static str,
}

impl From<&enquiry::Enquiry> for EnquiryBody {
    fn from(enquiry: &enquiry::Enquiry) -> Self {
        Self {
            name: enquiry.name.clone(),
            email: enquiry.email.clone(),
            phone: enquiry.phone.clone(),
            purpose: enquiry.purpose.clone(),
            enquiry_type: enquiry.kind.label(),
        }
    }
}

/// Body of `POST /api/token/`.
#[derive(Debug, Serialize)]
pub(super) struct CredentialsBody {
    username: String,
    password: String,
}

impl From<&Credentials> for CredentialsBody {
    fn from(credentials: &Credentials) -> Self {
        Self {
            username: credentials.username.to_string(),
            password: credentials.password.expose_secret().to_string(),
        }
    }
}

/// Body of `POST /api/send-visa-details/`.
#[derive(Debug, Serialize)]
pub(super) struct VisaDetailsBody {
    email: String,
    subject: String,
    body: String,
}

impl From<&visa::DetailsEmail> for VisaDetailsBody {
    fn from(email: &visa::DetailsEmail) -> Self {
        Self {
            email: email.email.clone(),
            subject: email.subject.clone(),
            body: email.body.clone(),
        }
    }
}

/// Body of back-office package creation and updates.
#[derive(Debug, Serialize)]
pub(super) struct PackageBody {
    title: String,
    category: String,
    starting_city: String,
    days: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<u64>,
    #[serde(rename = "Offer_price")]
    offer_price: u64,
    with_flight: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    group_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<String>,
    description: String,
    destinations: Vec<StayBody>,
    inclusions: Vec<TextBody>,
    exclusions: Vec<TextBody>,
    itinerary: Vec<ItineraryBody>,
}

/// Destination row nested in a [`PackageBody`].
#[derive(Debug, Serialize)]
pub(super) struct StayBody {
    name: String,
    nights: u16,
}

/// Bulleted text row nested in a [`PackageBody`].
#[derive(Debug, Serialize)]
pub(super) struct TextBody {
    text: String,
}

/// Itinerary day row nested in a [`PackageBody`].
#[derive(Debug, Serialize)]
pub(super) struct ItineraryBody {
    day_number: u16,
    title: String,
    description: String,
}

impl From<&listing::Draft> for PackageBody {
    fn from(draft: &listing::Draft) -> Self {
        /// Wire label of a [`Category`].
        fn category_label(category: Category) -> String {
            match category {
                Category::Domestic => "Domestic",
                Category::International => "International",
                Category::Umrah => "Umrah",
            }
            .to_owned()
        }

        Self {
            title: draft.title.to_string(),
            category: category_label(draft.category),
            starting_city: draft.starting_city.clone(),
            days: draft.days,
            price: draft.price,
            offer_price: draft.offer_price,
            with_flight: draft.with_flight,
            group_size: draft.group_size,
            start_date: draft.start_date.map(|d| d.to_iso8601()),
            description: draft.description.clone(),
            destinations: draft
                .destinations
                .iter()
                .map(|d| StayBody {
                    name: d.name.clone(),
                    nights: d.nights,
                })
                .collect(),
            inclusions: draft
                .inclusions
                .iter()
                .map(|text| TextBody { text: text.clone() })
                .collect(),
            exclusions: draft
                .exclusions
                .iter()
                .map(|text| TextBody { text: text.clone() })
                .collect(),
            itinerary: draft
                .itinerary
                .iter()
                .map(|day| ItineraryBody {
                    day_number: day.day_number,
                    title: day.title.clone(),
                    description: day.description.clone(),
                })
                .collect(),
        }
    }
}

/// Body of back-office destination creation and updates.
#[derive(Debug, Serialize)]
pub(super) struct DestinationBody {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
}

impl From<&refdata::DestinationDraft> for DestinationBody {
    fn from(draft: &refdata::DestinationDraft) -> Self {
        Self {
            name: draft.name.clone(),
            country: draft.country.clone(),
        }
    }
}

/// Body of back-office starting-city creation and updates.
#[derive(Debug, Serialize)]
pub(super) struct StartingCityBody {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<String>,
}

impl From<&refdata::StartingCityDraft> for StartingCityBody {
    fn from(draft: &refdata::StartingCityDraft) -> Self {
        Self {
            name: draft.name.clone(),
            region: draft.region.clone(),
        }
    }
}

/// Body of back-office nationality creation and updates.
#[derive(Debug, Serialize)]
pub(super) struct NationalityBody {
    nationality: String,
    country: String,
}

impl From<&refdata::NationalityDraft> for NationalityBody {
    fn from(draft: &refdata::NationalityDraft) -> Self {
        Self {
            nationality: draft.nationality.clone(),
            country: draft.country.clone(),
        }
    }
}

/// Body of back-office visa creation and updates.
#[derive(Debug, Serialize)]
pub(super) struct VisaBody {
    title: String,
    country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    entry_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    processing_time: Option<String>,
    price: u64,
}

impl From<&visa::Draft> for VisaBody {
    fn from(draft: &visa::Draft) -> Self {
        Self {
            title: draft.title.clone(),
            country: draft.country.clone(),
            entry_type: draft.entry_type.clone(),
            validity: draft.validity.clone(),
            duration: draft.duration.clone(),
            processing_time: draft.processing_time.clone(),
            price: draft.price,
        }
    }
}

/// Body of back-office user creation and updates.
#[derive(Debug, Serialize)]
pub(super) struct UserBody {
    username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    password: String,
}

impl From<&user::Draft> for UserBody {
    fn from(draft: &user::Draft) -> Self {
        Self {
            username: draft.username.to_string(),
            email: draft.email.clone(),
            password: draft.password.to_string(),
        }
    }
}

/// Defaulted `nights` of a [`Stay`] row.
const fn one() -> u16 {
    1
}

/// Passes a string through only if it has non-whitespace content.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Collects the non-empty lines of bulleted text rows.
fn text_lines(rows: Vec<Text>) -> Vec<String> {
    rows.into_iter()
        .map(|row| row.text)
        .filter(|text| !text.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod spec {
    use serde_json::json;

    use crate::domain::{
        enquiry::{ContactDetails, TripEnquiry, Variant},
        listing::{Category, Listing},
    };

    use super::{Package, TripEnquiryBody};

    #[test]
    fn sparse_package_rows_normalize_without_crashing() {
        let row: Package = serde_json::from_value(json!({
            "id": 3,
            "title": "  Goa Weekend  ",
        }))
        .unwrap();
        let listing = Listing::from(row);

        assert_eq!(listing.id, 3.into());
        assert_eq!(listing.title.as_ref(), "Goa Weekend");
        assert_eq!(listing.category, None);
        assert!(listing.offer_price.is_zero());
        assert!(listing.destinations.is_empty());
        assert_eq!(listing.start_date, None);
    }

    #[test]
    fn full_package_rows_keep_their_fields() {
        let row: Package = serde_json::from_value(json!({
            "id": 7,
            "title": "Bali Getaway",
            "category": "International",
            "starting_city": "Mumbai",
            "nights": 4,
            "days": 5,
            "price": 60_000,
            "Offer_price": 49_999,
            "with_flight": true,
            "start_date": "2026-03-10",
            "description": "Private villa\n\nSunset cruise\n",
            "destinations": [
                {"name": "Ubud", "nights": 2},
                {"name": "", "nights": 2},
            ],
            "inclusions": [{"text": "Breakfast"}, {"text": "  "}],
        }))
        .unwrap();
        let listing = Listing::from(row);

        assert_eq!(listing.category, Some(Category::International));
        assert_eq!(listing.offer_price, common::Money::rupees(49_999));
        assert_eq!(listing.price, Some(common::Money::rupees(60_000)));
        // Blank nested rows are dropped during normalization.
        assert_eq!(listing.destinations.len(), 1);
        assert_eq!(listing.inclusions, ["Breakfast"]);
        assert_eq!(
            listing.description,
            ["Private villa", "Sunset cruise"],
        );
        assert_eq!(
            listing.start_date.unwrap().to_iso8601(),
            "2026-03-10",
        );
    }

    fn trip_enquiry(variant: Variant) -> TripEnquiry {
        let mut trip = variant.initial_trip();
        trip.cities[0].name = "Bali".to_owned();
        trip.start_city = "Mumbai".to_owned();
        trip.travel_date = Some("2026-03-10".parse().unwrap());
        trip.star_rating = "4".to_owned();
        trip.holiday_type = "Beach".to_owned();
        trip.rooms[0].set_children(1);
        trip.rooms[0].set_child_age(0, 9);

        TripEnquiry {
            variant,
            package_type: Some("Bali Getaway".to_owned()),
            trip,
            contact: ContactDetails {
                full_name: "Asha Verma".to_owned(),
                email: "asha@example.com".to_owned(),
                phone: "+91 98765 43210".to_owned(),
                message: "Window seats please".to_owned(),
            },
        }
    }

    #[test]
    fn holiday_body_carries_details_and_flattened_totals() {
        let body = serde_json::to_value(TripEnquiryBody::from(&trip_enquiry(
            Variant::Holiday,
        )))
        .unwrap();

        assert_eq!(body["cities"][0]["destination"], "Bali");
        assert_eq!(body["travel_date"], "2026-03-10");
        assert_eq!(body["rooms"], 1);
        assert_eq!(body["adults"], 2);
        assert_eq!(body["children"], 1);
        assert_eq!(body["room_details"][0]["childAges"][0], 9);
        assert_eq!(body["holiday_type"], "Beach");
        assert_eq!(body["message"], "Window seats please");
    }

    #[test]
    fn umrah_body_omits_holiday_only_fields() {
        let body = serde_json::to_value(TripEnquiryBody::from(&trip_enquiry(
            Variant::Umrah,
        )))
        .unwrap();

        assert!(body.get("holiday_type").is_none());
        assert!(body.get("meal_plan").is_none());
        assert!(body.get("message").is_none());
        assert_eq!(body["cities"][0]["destination"], "Bali");
        assert_eq!(body["star_rating"], "4");
    }
}
