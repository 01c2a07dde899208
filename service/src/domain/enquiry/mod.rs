//! Enquiry definitions.

pub mod wizard;

use std::sync::LazyLock;

use common::{define_kind, Date};
use regex::Regex;

pub use self::wizard::Wizard;

/// Variant of a trip enquiry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Variant {
    /// General holiday enquiry.
    Holiday,

    /// Umrah pilgrimage enquiry.
    Umrah,
}

impl Variant {
    /// Returns the initial [`TripDetails`] of this [`Variant`].
    #[must_use]
    pub fn initial_trip(self) -> TripDetails {
        let cities = match self {
            Self::Holiday => vec![CityStay::default()],
            Self::Umrah => vec![
                CityStay {
                    name: "Makkah".to_owned(),
                    nights: 2,
                },
                CityStay {
                    name: "Madinah".to_owned(),
                    nights: 2,
                },
            ],
        };

        TripDetails {
            cities,
            start_city: String::new(),
            travel_date: None,
            nationality: "Indian".to_owned(),
            rooms: vec![Room::default()],
            star_rating: String::new(),
            holiday_type: String::new(),
            room_type: String::new(),
            meal_plan: String::new(),
            transfer: String::new(),
            other_inclusions: String::new(),
            budget: String::new(),
        }
    }
}

/// Trip half of an enquiry draft, accumulated on the first wizard step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TripDetails {
    /// Destination cities with their nights, in visit order.
    ///
    /// Never empty: at least one destination is mandatory.
    pub cities: Vec<CityStay>,

    /// City the trip starts from.
    pub start_city: String,

    /// Desired travel [`Date`].
    pub travel_date: Option<Date>,

    /// Nationality of the travellers.
    pub nationality: String,

    /// Per-room traveller breakdown.
    ///
    /// Length is the room count, kept within [`TripDetails::MAX_ROOMS`].
    pub rooms: Vec<Room>,

    /// Desired hotel star rating.
    pub star_rating: String,

    /// Desired holiday type (general holiday enquiries only).
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
}

impl TripDetails {
    /// Maximum selectable number of rooms.
    pub const MAX_ROOMS: usize = 6;

    /// Appends a fresh empty destination row.
    pub fn add_city(&mut self) {
        self.cities.push(CityStay::default());
    }

    /// Removes the destination row at the provided index.
    ///
    /// Refused (returning `false`) when it is the only remaining row, since
    /// at least one destination is mandatory, or when the index is out of
    /// range.
    pub fn remove_city(&mut self, index: usize) -> bool {
        if self.cities.len() <= 1 || index >= self.cities.len() {
            return false;
        }
        drop(self.cities.remove(index));
        true
    }

    /// Resizes the per-room breakdown to the provided room count.
    ///
    /// Counts outside `1..=`[`MAX_ROOMS`] are ignored. Growing appends
    /// default [`Room`]s; shrinking truncates from the end, discarding the
    /// removed rooms' data irrevocably.
    ///
    /// [`MAX_ROOMS`]: Self::MAX_ROOMS
    pub fn set_room_count(&mut self, count: usize) {
        if !(1..=Self::MAX_ROOMS).contains(&count) {
            return;
        }
        self.rooms.resize_with(count, Room::default);
    }

    /// Total number of adults across all rooms.
    #[must_use]
    pub fn total_adults(&self) -> u16 {
        self.rooms.iter().map(|r| u16::from(r.adults)).sum()
    }

    /// Total number of children across all rooms.
    #[must_use]
    pub fn total_children(&self) -> u16 {
        self.rooms.iter().map(|r| u16::from(r.children)).sum()
    }
}

/// One destination row of a [`TripDetails`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CityStay {
    /// Name of the destination city.
    pub name: String,

    /// Nights spent in the city.
    pub nights: u16,
}

impl Default for CityStay {
    fn default() -> Self {
        Self {
            name: String::new(),
            nights: 1,
        }
    }
}

/// Traveller breakdown of one room.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Room {
    /// Number of adults in the room. Always at least one.
    pub adults: u8,

    /// Number of children in the room.
    pub children: u8,

    /// Ages of the children, index-aligned with the child count.
    ///
    /// [`None`] marks an age not entered yet.
    pub child_ages: Vec<Option<u8>>,
}

impl Room {
    /// Sets the number of adults in this [`Room`], keeping at least one.
    pub fn set_adults(&mut self, adults: u8) {
        self.adults = adults.max(1);
    }

    /// Sets the number of children in this [`Room`], resizing the age slots
    /// to match: existing ages are preserved by index, new slots start
    /// empty, shrinking truncates from the end.
    pub fn set_children(&mut self, children: u8) {
        self.children = children;
        self.child_ages.resize(usize::from(children), None);
    }

    /// Records the age of the child at the provided index.
    ///
    /// Out-of-range indices are ignored.
    pub fn set_child_age(&mut self, child: usize, age: u8) {
        if let Some(slot) = self.child_ages.get_mut(child) {
            *slot = Some(age);
        }
    }
}

impl Default for Room {
    fn default() -> Self {
        Self {
            adults: 2,
            children: 0,
            child_ages: Vec::new(),
        }
    }
}

/// Contact half of an enquiry draft, accumulated on the second wizard step.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContactDetails {
    /// Full name of the enquirer.
    pub full_name: String,

    /// Email address of the enquirer.
    pub email: String,

    /// Phone number of the enquirer.
    pub phone: String,

    /// Free-form message of the enquirer.
    pub message: String,
}

/// Complete trip enquiry, ready to be sent to the platform.
#[derive(Clone, Debug)]
pub struct TripEnquiry {
    /// [`Variant`] of this enquiry, selecting the endpoint it goes to.
    pub variant: Variant,

    /// Package the enquiry was opened from, if any.
    pub package_type: Option<String>,

    /// Trip half of the enquiry.
    pub trip: TripDetails,

    /// Contact half of the enquiry.
    pub contact: ContactDetails,
}

/// Single-step general enquiry.
#[derive(Clone, Debug)]
pub struct Enquiry {
    /// Name of the enquirer.
    pub name: String,

    /// Email address of the enquirer, if provided.
    pub email: String,

    /// Phone number of the enquirer.
    pub phone: String,

    /// What the enquirer is looking for.
    pub purpose: String,

    /// [`Kind`] of this enquiry.
    pub kind: Kind,
}

define_kind! {
    #[doc = "Kind of a general [`Enquiry`]."]
    enum Kind {
        #[doc = "A general enquiry."]
        General = 1,

        #[doc = "A cab booking enquiry."]
        Cab = 2,

        #[doc = "A cruise enquiry."]
        Cruise = 3,
    }
}

impl Kind {
    /// Returns the wire label of this [`Kind`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Cab => "Cab",
            Self::Cruise => "Cruise",
        }
    }
}

/// Field of an enquiry draft a validation message is attached to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
    /// Destination city rows.
    Cities,

    /// Starting city.
    StartCity,

    /// Travel date.
    TravelDate,

    /// Nationality.
    Nationality,

    /// Hotel star rating.
    StarRating,

    /// Holiday type.
    HolidayType,

    /// Full name.
    FullName,

    /// Email address.
    Email,

    /// Phone number.
    Phone,

    /// Name of a general enquiry.
    Name,
}

/// Per-field validation messages of an enquiry draft.
///
/// Each failing field carries its own message, so fields can be corrected
/// independently.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldErrors(Vec<(Field, &'static str)>);

impl FieldErrors {
    /// Attaches a message to the provided [`Field`].
    fn push(&mut self, field: Field, message: &'static str) {
        self.0.push((field, message));
    }

    /// Indicates whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the message attached to the provided [`Field`], if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| *m)
    }

    /// Iterates over all attached messages.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().copied()
    }
}

/// Regular expression checking the basic `text@text.text` email shape.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));

/// Regular expression checking the phone shape: 10 to 20 characters of
/// digits, `+`, `-` or spaces.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d+\-\s]{10,20}$").expect("valid regex"));

/// Validates the first wizard step of the provided [`Variant`].
///
/// Returns one message per failing field and nothing else: validation has
/// no side effects on the draft.
#[must_use]
pub fn validate_step1(trip: &TripDetails, variant: Variant) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if trip.cities.is_empty() {
        errors.push(Field::Cities, "At least one destination is required");
    } else if trip
        .cities
        .iter()
        .any(|c| c.name.trim().is_empty() || c.nights == 0)
    {
        errors.push(Field::Cities, "Complete all destination fields");
    }

    if trip.start_city.trim().is_empty() {
        errors.push(Field::StartCity, "Starting city is required");
    }
    if trip.travel_date.is_none() {
        errors.push(Field::TravelDate, "Travel date is required");
    }
    if trip.nationality.trim().is_empty() {
        errors.push(Field::Nationality, "Nationality is required");
    }
    if trip.star_rating.trim().is_empty() {
        errors.push(Field::StarRating, "Hotel rating is required");
    }
    if variant == Variant::Holiday && trip.holiday_type.trim().is_empty() {
        errors.push(Field::HolidayType, "Holiday type is required");
    }

    errors
}

/// Validates the second wizard step.
#[must_use]
pub fn validate_step2(contact: &ContactDetails) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if contact.full_name.trim().is_empty() {
        errors.push(Field::FullName, "Full name is required");
    }
    if contact.email.trim().is_empty() {
        errors.push(Field::Email, "Email is required");
    } else if !EMAIL_REGEX.is_match(&contact.email) {
        errors.push(Field::Email, "Email is invalid");
    }
    if contact.phone.trim().is_empty() {
        errors.push(Field::Phone, "Phone number is required");
    } else if !PHONE_REGEX.is_match(&contact.phone) {
        errors.push(Field::Phone, "Please enter a valid phone number");
    }

    errors
}

/// Validates a single-step general [`Enquiry`].
#[must_use]
pub fn validate_enquiry(enquiry: &Enquiry) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if enquiry.name.trim().is_empty() {
        errors.push(Field::Name, "Name is required");
    }
    if !enquiry.email.trim().is_empty()
        && !EMAIL_REGEX.is_match(&enquiry.email)
    {
        errors.push(Field::Email, "Email is invalid");
    }
    if enquiry.phone.trim().is_empty() {
        errors.push(Field::Phone, "Phone number is required");
    } else if !PHONE_REGEX.is_match(&enquiry.phone) {
        errors.push(Field::Phone, "Please enter a valid phone number");
    }

    errors
}

#[cfg(test)]
mod spec {
    use super::{
        validate_step1, validate_step2, ContactDetails, Field, Room,
        TripDetails, Variant,
    };

    fn valid_trip() -> TripDetails {
        let mut trip = Variant::Holiday.initial_trip();
        trip.cities[0].name = "Bali".to_owned();
        trip.start_city = "Mumbai".to_owned();
        trip.travel_date = Some("2026-03-10".parse().unwrap());
        trip.star_rating = "4".to_owned();
        trip.holiday_type = "Honeymoon".to_owned();
        trip
    }

    #[test]
    fn step1_requires_named_cities() {
        let mut trip = valid_trip();
        trip.cities[0].name = String::new();

        let errors = validate_step1(&trip, Variant::Holiday);
        assert_eq!(
            errors.get(Field::Cities),
            Some("Complete all destination fields"),
        );

        trip.cities[0].name = "Bali".to_owned();
        assert!(validate_step1(&trip, Variant::Holiday).is_empty());
    }

    #[test]
    fn step1_flags_each_missing_field_separately() {
        let trip = Variant::Holiday.initial_trip();
        let errors = validate_step1(&trip, Variant::Holiday);

        assert!(errors.get(Field::StartCity).is_some());
        assert!(errors.get(Field::TravelDate).is_some());
        assert!(errors.get(Field::StarRating).is_some());
        assert!(errors.get(Field::HolidayType).is_some());
        // Nationality is pre-filled by default.
        assert!(errors.get(Field::Nationality).is_none());
    }

    #[test]
    fn umrah_does_not_require_holiday_type() {
        let mut trip = Variant::Umrah.initial_trip();
        trip.start_city = "Hyderabad".to_owned();
        trip.travel_date = Some("2026-03-10".parse().unwrap());
        trip.star_rating = "3".to_owned();

        assert!(validate_step1(&trip, Variant::Umrah).is_empty());
    }

    #[test]
    fn umrah_starts_with_the_two_holy_cities() {
        let trip = Variant::Umrah.initial_trip();
        let names =
            trip.cities.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["Makkah", "Madinah"]);
        assert!(trip.cities.iter().all(|c| c.nights == 2));
    }

    #[test]
    fn step2_checks_email_and_phone_shapes() {
        let mut contact = ContactDetails {
            full_name: "Asha Verma".to_owned(),
            email: "asha@example".to_owned(),
            phone: "12345".to_owned(),
            message: String::new(),
        };

        let errors = validate_step2(&contact);
        assert_eq!(errors.get(Field::Email), Some("Email is invalid"));
        assert_eq!(
            errors.get(Field::Phone),
            Some("Please enter a valid phone number"),
        );

        contact.email = "asha@example.com".to_owned();
        contact.phone = "+91 98765 43210".to_owned();
        assert!(validate_step2(&contact).is_empty());
    }

    #[test]
    fn last_city_row_cannot_be_removed() {
        let mut trip = Variant::Holiday.initial_trip();
        assert!(!trip.remove_city(0));
        assert_eq!(trip.cities.len(), 1);

        trip.add_city();
        assert!(trip.remove_city(1));
        assert_eq!(trip.cities.len(), 1);
    }

    #[test]
    fn room_resize_preserves_surviving_rows() {
        let mut trip = Variant::Holiday.initial_trip();
        trip.rooms[0].set_adults(3);

        trip.set_room_count(4);
        assert_eq!(trip.rooms.len(), 4);
        trip.rooms[1].set_adults(1);
        trip.rooms[1].set_children(2);

        trip.set_room_count(2);
        assert_eq!(trip.rooms.len(), 2);
        assert_eq!(trip.rooms[0].adults, 3);
        assert_eq!(trip.rooms[1].adults, 1);
        assert_eq!(trip.rooms[1].children, 2);

        // Out-of-range counts are ignored.
        trip.set_room_count(0);
        trip.set_room_count(7);
        assert_eq!(trip.rooms.len(), 2);
    }

    #[test]
    fn child_ages_track_the_child_count() {
        let mut room = Room::default();

        room.set_children(3);
        room.set_child_age(0, 9);
        assert_eq!(room.child_ages, [Some(9), None, None]);

        room.set_children(1);
        assert_eq!(room.child_ages, [Some(9)]);

        room.set_children(0);
        assert!(room.child_ages.is_empty());
    }

    #[test]
    fn totals_flatten_all_rooms() {
        let mut trip = valid_trip();
        trip.set_room_count(3);
        trip.rooms[2].set_children(2);

        assert_eq!(trip.total_adults(), 6);
        assert_eq!(trip.total_children(), 2);
    }
}
