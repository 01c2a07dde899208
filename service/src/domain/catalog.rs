//! Catalog browsing [`Criteria`] and the visible-subset derivation.

use common::define_kind;
use rust_decimal::Decimal;

use super::listing::{Category, Listing};

/// Active filter constraints of the catalog browse page.
///
/// Every [`None`] field means "no constraint". A [`Criteria`] is mutated
/// only by user interaction with the filter controls and re-applied to the
/// fetched listing set synchronously on every change.
#[derive(Clone, Debug, Default)]
pub struct Criteria {
    /// Required [`Category`] of a [`Listing`].
    pub category: Option<Category>,

    /// Destination a [`Listing`] must visit.
    pub destination: Option<String>,

    /// Exact total nights a [`Listing`] must have.
    pub nights: Option<u16>,

    /// City a [`Listing`]'s trip must start from.
    pub starting_city: Option<String>,

    /// Upper bound of the per-person price.
    pub budget: Budget,

    /// Flight-inclusion constraint.
    pub flight: FlightChoice,
}

impl Criteria {
    /// Checks whether the provided [`Listing`] satisfies every active
    /// constraint of this [`Criteria`].
    ///
    /// A [`Listing`] with a missing field fails the corresponding non-empty
    /// constraint instead of being an error.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(category) = self.category {
            if listing.category != Some(category) {
                return false;
            }
        }

        if let Some(destination) = &self.destination {
            if !listing.destinations.iter().any(|d| d.name == *destination) {
                return false;
            }
        }

        match self.flight {
            FlightChoice::All => {}
            FlightChoice::WithFlight => {
                if !listing.with_flight {
                    return false;
                }
            }
            FlightChoice::WithoutFlight => {
                if listing.with_flight {
                    return false;
                }
            }
        }

        if let Some(nights) = self.nights {
            if listing.nights != Some(nights) {
                return false;
            }
        }

        if let Some(starting_city) = &self.starting_city {
            if listing.starting_city.as_ref() != Some(starting_city) {
                return false;
            }
        }

        listing.offer_price.amount <= Decimal::from(self.budget.rupees())
    }
}

/// Derives the subset of `listings` visible under the provided [`Criteria`].
///
/// The result preserves the original order of `listings` (stable filter, no
/// re-sorting). An all-empty [`Criteria`] is the identity filter.
#[must_use]
pub fn visible<'l>(
    listings: &'l [Listing],
    criteria: &Criteria,
) -> Vec<&'l Listing> {
    listings.iter().filter(|l| criteria.matches(l)).collect()
}

/// Upper bound of a [`Criteria`] price constraint, in whole rupees.
///
/// Bounded by the browse page's slider range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Budget(u32);

impl Budget {
    /// Maximum selectable [`Budget`].
    pub const MAX: Self = Self(200_000);

    /// Creates a new [`Budget`], clamping the provided amount to the
    /// selectable range.
    #[must_use]
    pub fn new(rupees: u32) -> Self {
        Self(rupees.min(Self::MAX.0))
    }

    /// Returns this [`Budget`] as whole rupees.
    #[must_use]
    pub fn rupees(self) -> u32 {
        self.0
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::MAX
    }
}

define_kind! {
    #[doc = "Flight-inclusion constraint of a [`Criteria`]."]
    enum FlightChoice {
        #[doc = "No constraint."]
        All = 1,

        #[doc = "Only listings with flights included."]
        WithFlight = 2,

        #[doc = "Only listings without flights."]
        WithoutFlight = 3,
    }
}

impl Default for FlightChoice {
    fn default() -> Self {
        Self::All
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::domain::listing::{Category, DestinationStay, Listing};

    use super::{visible, Budget, Criteria, FlightChoice};

    fn listing(id: u64, title: &str) -> Listing {
        Listing {
            id: id.into(),
            title: title.parse().unwrap(),
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

    fn fixtures() -> Vec<Listing> {
        let mut bali = listing(1, "Bali Getaway");
        bali.category = Some(Category::International);
        bali.starting_city = Some("Mumbai".to_owned());
        bali.destinations = vec![DestinationStay {
            name: "Bali".to_owned(),
            nights: 4,
        }];
        bali.nights = Some(4);
        bali.offer_price = Money::rupees(50_000);
        bali.with_flight = true;

        let mut kerala = listing(2, "Kerala Backwaters");
        kerala.category = Some(Category::Domestic);
        kerala.starting_city = Some("Kochi".to_owned());
        kerala.destinations = vec![
            DestinationStay {
                name: "Munnar".to_owned(),
                nights: 2,
            },
            DestinationStay {
                name: "Alleppey".to_owned(),
                nights: 1,
            },
        ];
        kerala.nights = Some(3);
        kerala.offer_price = Money::rupees(20_000);

        let mut umrah = listing(3, "Umrah Economy");
        umrah.category = Some(Category::Umrah);
        umrah.starting_city = Some("Hyderabad".to_owned());
        umrah.nights = Some(7);
        umrah.offer_price = Money::rupees(80_000);
        umrah.with_flight = true;

        vec![bali, kerala, umrah]
    }

    #[test]
    fn empty_criteria_is_identity() {
        let listings = fixtures();
        let out = visible(&listings, &Criteria::default());

        let ids = out.iter().map(|l| l.id).collect::<Vec<_>>();
        assert_eq!(ids, listings.iter().map(|l| l.id).collect::<Vec<_>>());
    }

    #[test]
    fn empty_listings_stay_empty() {
        assert!(visible(&[], &Criteria::default()).is_empty());
    }

    #[test]
    fn tightening_criteria_only_narrows() {
        let listings = fixtures();

        let loose = Criteria {
            flight: FlightChoice::WithFlight,
            ..Criteria::default()
        };
        let tight = Criteria {
            category: Some(Category::International),
            ..loose.clone()
        };

        let loose_ids =
            visible(&listings, &loose).iter().map(|l| l.id).collect::<Vec<_>>();
        let tight_ids =
            visible(&listings, &tight).iter().map(|l| l.id).collect::<Vec<_>>();

        assert!(tight_ids.iter().all(|id| loose_ids.contains(id)));
        assert_eq!(tight_ids.len(), 1);
    }

    #[test]
    fn budget_bound_is_inclusive() {
        let listings = fixtures();

        let at_price = Criteria {
            budget: Budget::new(20_000),
            ..Criteria::default()
        };
        assert!(visible(&listings, &at_price).iter().any(|l| l.id == 2.into()));

        let below_price = Criteria {
            budget: Budget::new(19_999),
            ..Criteria::default()
        };
        assert!(!visible(&listings, &below_price)
            .iter()
            .any(|l| l.id == 2.into()));
    }

    #[test]
    fn budget_clamps_to_slider_range() {
        assert_eq!(Budget::new(1_000_000), Budget::MAX);
        assert_eq!(Budget::new(0).rupees(), 0);
    }

    #[test]
    fn destination_matches_any_stay() {
        let listings = fixtures();
        let criteria = Criteria {
            destination: Some("Alleppey".to_owned()),
            ..Criteria::default()
        };

        let out = visible(&listings, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2.into());
    }

    #[test]
    fn missing_fields_fail_closed_without_panicking() {
        let bare = vec![listing(9, "Draft Package")];

        let by_category = Criteria {
            category: Some(Category::Domestic),
            ..Criteria::default()
        };
        assert!(visible(&bare, &by_category).is_empty());

        let by_nights = Criteria {
            nights: Some(3),
            ..Criteria::default()
        };
        assert!(visible(&bare, &by_nights).is_empty());

        let by_city = Criteria {
            starting_city: Some("Mumbai".to_owned()),
            ..Criteria::default()
        };
        assert!(visible(&bare, &by_city).is_empty());

        // A zero offer price still passes any budget.
        assert_eq!(visible(&bare, &Criteria::default()).len(), 1);
    }

    #[test]
    fn domestic_within_budget_scenario() {
        let listings = fixtures();
        let criteria = Criteria {
            category: Some(Category::Domestic),
            budget: Budget::new(30_000),
            ..Criteria::default()
        };

        let out = visible(&listings, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2.into());
    }

    #[test]
    fn flight_choice_is_tri_state() {
        let listings = fixtures();

        let with = Criteria {
            flight: FlightChoice::WithFlight,
            ..Criteria::default()
        };
        assert_eq!(visible(&listings, &with).len(), 2);

        let without = Criteria {
            flight: FlightChoice::WithoutFlight,
            ..Criteria::default()
        };
        let out = visible(&listings, &without);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2.into());
    }
}
