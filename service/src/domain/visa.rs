//! [`Visa`] definitions.

use common::{Date, Money};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// Visa product offered for a destination country.
#[derive(Clone, Debug)]
pub struct Visa {
    /// ID of this [`Visa`].
    pub id: Id,

    /// Title of this [`Visa`].
    pub title: String,

    /// Destination country this [`Visa`] is for.
    pub country: Option<String>,

    /// Entry type of this [`Visa`] (e.g. `Single Entry`).
    pub entry_type: Option<String>,

    /// Validity of this [`Visa`] (e.g. `58 Days`).
    pub validity: Option<String>,

    /// Permitted stay duration of this [`Visa`].
    pub duration: Option<String>,

    /// Processing time of this [`Visa`] (e.g. `3-4 Working Days`).
    pub processing_time: Option<String>,

    /// Price of this [`Visa`].
    pub price: Money,
}

impl Visa {
    /// Processing days assumed when the backend does not state any.
    const DEFAULT_PROCESSING_DAYS: u16 = 3;

    /// Returns the number of processing days of this [`Visa`].
    ///
    /// Parsed as the leading integer of the free-form processing time,
    /// falling back to a conservative default.
    #[must_use]
    pub fn processing_days(&self) -> u16 {
        self.processing_time
            .as_deref()
            .and_then(leading_int)
            .unwrap_or(Self::DEFAULT_PROCESSING_DAYS)
    }

    /// Returns the latest [`Date`] this [`Visa`] is expected to arrive by,
    /// for the provided departure.
    #[must_use]
    pub fn estimated_arrival(&self, departure: Date) -> Date {
        departure.minus_days(self.processing_days())
    }
}

/// ID of a [`Visa`].
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

/// Draft of a new [`Visa`].
#[derive(Clone, Debug)]
pub struct Draft {
    /// Title of the new [`Visa`].
    pub title: String,

    /// Destination country of the new [`Visa`].
    pub country: String,

    /// Entry type of the new [`Visa`], if any.
    pub entry_type: Option<String>,

    /// Validity of the new [`Visa`], if any.
    pub validity: Option<String>,

    /// Stay duration of the new [`Visa`], if any.
    pub duration: Option<String>,

    /// Processing time of the new [`Visa`], if any.
    pub processing_time: Option<String>,

    /// Price of the new [`Visa`], in whole rupees.
    pub price: u64,
}

/// Visa details email relayed through the platform.
#[derive(Clone, Debug)]
pub struct DetailsEmail {
    /// Recipient email address.
    pub email: String,

    /// Subject line.
    pub subject: String,

    /// Plaintext body.
    pub body: String,
}

/// Formats a [`Date`] as an arrival label (e.g. `7th Mar, 2026`).
#[must_use]
pub fn arrival_label(date: Date) -> String {
    format!(
        "{day}{suffix} {month}, {year}",
        day = date.day(),
        suffix = day_suffix(date.day()),
        month = date.month_name(),
        year = date.year(),
    )
}

/// Returns the English ordinal suffix of a day of the month.
fn day_suffix(day: u8) -> &'static str {
    if (4..=20).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Parses the leading unsigned integer of a string, if any.
fn leading_int(s: &str) -> Option<u16> {
    let digits =
        s.trim_start().chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s.trim_start()[..digits].parse().ok()
}

#[cfg(test)]
mod spec {
    use common::{Date, Money};

    use super::{arrival_label, Visa};

    fn visa(processing_time: Option<&str>) -> Visa {
        Visa {
            id: 1.into(),
            title: "Tourist e-Visa".to_owned(),
            country: Some("Thailand".to_owned()),
            entry_type: Some("Single Entry".to_owned()),
            validity: Some("58 Days".to_owned()),
            duration: Some("30 Days".to_owned()),
            processing_time: processing_time.map(str::to_owned),
            price: Money::rupees(4_500),
        }
    }

    #[test]
    fn processing_days_take_the_leading_integer() {
        assert_eq!(visa(Some("3-4 Working Days")).processing_days(), 3);
        assert_eq!(visa(Some("10 days")).processing_days(), 10);
        assert_eq!(visa(Some("about a week")).processing_days(), 3);
        assert_eq!(visa(None).processing_days(), 3);
    }

    #[test]
    fn arrival_precedes_departure_by_processing_days() {
        let departure = Date::from_iso8601("2026-03-10").unwrap();
        let arrival = visa(Some("4 Working Days")).estimated_arrival(departure);
        assert_eq!(arrival.to_iso8601(), "2026-03-06");
    }

    #[test]
    fn arrival_labels_use_ordinal_suffixes() {
        let date = |s: &str| Date::from_iso8601(s).unwrap();

        assert_eq!(arrival_label(date("2026-03-01")), "1st Mar, 2026");
        assert_eq!(arrival_label(date("2026-03-02")), "2nd Mar, 2026");
        assert_eq!(arrival_label(date("2026-03-03")), "3rd Mar, 2026");
        assert_eq!(arrival_label(date("2026-03-04")), "4th Mar, 2026");
        assert_eq!(arrival_label(date("2026-03-11")), "11th Mar, 2026");
        assert_eq!(arrival_label(date("2026-03-13")), "13th Mar, 2026");
        assert_eq!(arrival_label(date("2026-03-21")), "21st Mar, 2026");
        assert_eq!(arrival_label(date("2026-03-22")), "22nd Mar, 2026");
        assert_eq!(arrival_label(date("2026-03-31")), "31st Mar, 2026");
    }
}
