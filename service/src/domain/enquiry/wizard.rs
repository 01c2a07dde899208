//! Two-step enquiry [`Wizard`] state machine.

use derive_more::{Display, Error};

use super::{
    validate_step1, validate_step2, ContactDetails, FieldErrors, TripDetails,
    TripEnquiry, Variant,
};

/// State of a [`Wizard`].
///
/// Being a closed set of tags, states like "submitting while still on the
/// trip step" are unrepresentable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum State {
    /// Collecting [`TripDetails`].
    Step1,

    /// Collecting [`ContactDetails`].
    Step2,

    /// A submission is in flight. No second submission can start.
    Submitting,

    /// The enquiry was accepted by the platform.
    Success,

    /// The submission failed; the contact step may be corrected and
    /// resubmitted.
    Failure {
        /// Human-readable reason shown to the user.
        message: String,
    },
}

/// Two-step enquiry wizard.
///
/// Accumulates a [`TripDetails`] and a [`ContactDetails`] across its steps,
/// preserving both halves over any back-and-forward navigation. Cancelling
/// is dropping the [`Wizard`]: nothing is retained.
#[derive(Clone, Debug)]
pub struct Wizard {
    /// [`Variant`] of the enquiry being drafted.
    variant: Variant,

    /// Package the enquiry was opened from, if any.
    package_type: Option<String>,

    /// Trip half of the draft.
    trip: TripDetails,

    /// Contact half of the draft.
    contact: ContactDetails,

    /// Current [`State`].
    state: State,
}

impl Wizard {
    /// Creates a new [`Wizard`] at its first step with the [`Variant`]'s
    /// default draft.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            package_type: None,
            trip: variant.initial_trip(),
            contact: ContactDetails::default(),
            state: State::Step1,
        }
    }

    /// Tags this [`Wizard`] with the package it was opened from.
    #[must_use]
    pub fn with_package(mut self, package_type: impl Into<String>) -> Self {
        self.package_type = Some(package_type.into());
        self
    }

    /// Returns the current [`State`] of this [`Wizard`].
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns the [`Variant`] of this [`Wizard`].
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the trip half of the draft.
    #[must_use]
    pub fn trip(&self) -> &TripDetails {
        &self.trip
    }

    /// Returns the trip half of the draft for editing.
    ///
    /// Editable only on the first step.
    pub fn trip_mut(&mut self) -> Option<&mut TripDetails> {
        (self.state == State::Step1).then_some(&mut self.trip)
    }

    /// Returns the contact half of the draft.
    #[must_use]
    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    /// Returns the contact half of the draft for editing.
    ///
    /// Editable on the contact step and after a failed submission.
    pub fn contact_mut(&mut self) -> Option<&mut ContactDetails> {
        matches!(self.state, State::Step2 | State::Failure { .. })
            .then_some(&mut self.contact)
    }

    /// Advances from the trip step to the contact step.
    ///
    /// On validation failure the [`Wizard`] stays on the trip step and the
    /// per-field messages are returned; nothing else changes. Calling this
    /// in any other [`State`] is a no-op.
    pub fn advance(&mut self) -> Result<(), FieldErrors> {
        if self.state != State::Step1 {
            return Ok(());
        }

        let errors = validate_step1(&self.trip, self.variant);
        if errors.is_empty() {
            self.state = State::Step2;
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Returns from the contact step (or a failed submission) to the trip
    /// step.
    ///
    /// Always allowed from those states, validates nothing and loses
    /// nothing. A no-op elsewhere.
    pub fn back(&mut self) {
        if matches!(self.state, State::Step2 | State::Failure { .. }) {
            self.state = State::Step1;
        }
    }

    /// Validates the contact step and starts a submission.
    ///
    /// On success the [`Wizard`] moves to [`State::Submitting`] and the
    /// assembled [`TripEnquiry`] is returned for dispatch; the outcome must
    /// be reported back via [`Wizard::complete_submit()`]. On validation
    /// failure the [`Wizard`] stays where it was, no payload is built and
    /// no network activity may happen.
    pub fn begin_submit(&mut self) -> Result<TripEnquiry, BeginSubmitError> {
        use BeginSubmitError as E;

        if !matches!(self.state, State::Step2 | State::Failure { .. }) {
            return Err(E::NotAtContactStep);
        }

        let errors = validate_step2(&self.contact);
        if !errors.is_empty() {
            return Err(E::Invalid(errors));
        }

        self.state = State::Submitting;
        Ok(TripEnquiry {
            variant: self.variant,
            package_type: self.package_type.clone(),
            trip: self.trip.clone(),
            contact: self.contact.clone(),
        })
    }

    /// Completes an in-flight submission.
    ///
    /// `Ok` moves to [`State::Success`]; an `Err` carries the message to
    /// show and moves to [`State::Failure`], from which the contact step
    /// may be corrected and resubmitted. A no-op unless submitting.
    pub fn complete_submit(&mut self, outcome: Result<(), String>) {
        if self.state != State::Submitting {
            return;
        }

        self.state = match outcome {
            Ok(()) => State::Success,
            Err(message) => State::Failure { message },
        };
    }

    /// Acknowledges a successful submission, resetting this [`Wizard`] to a
    /// fresh draft on the first step.
    ///
    /// This is the programmatic face of the success modal auto-closing. A
    /// no-op unless the last submission succeeded.
    pub fn acknowledge(&mut self) {
        if self.state == State::Success {
            *self = Self::new(self.variant);
        }
    }
}

/// Error of [`Wizard::begin_submit()`].
#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
pub enum BeginSubmitError {
    /// Submission is only possible from the contact step.
    #[display("not at the contact step")]
    NotAtContactStep,

    /// The contact step failed validation.
    #[display("contact details are invalid")]
    Invalid(#[error(not(source))] FieldErrors),
}

#[cfg(test)]
mod spec {
    use crate::domain::enquiry::Field;

    use super::{BeginSubmitError, State, Variant, Wizard};

    fn wizard_at_step2() -> Wizard {
        let mut wizard = Wizard::new(Variant::Holiday);
        {
            let trip = wizard.trip_mut().unwrap();
            trip.cities[0].name = "Bali".to_owned();
            trip.start_city = "Mumbai".to_owned();
            trip.travel_date = Some("2026-03-10".parse().unwrap());
            trip.star_rating = "4".to_owned();
            trip.holiday_type = "Beach".to_owned();
        }
        wizard.advance().unwrap();
        assert_eq!(*wizard.state(), State::Step2);
        wizard
    }

    fn fill_contact(wizard: &mut Wizard) {
        let contact = wizard.contact_mut().unwrap();
        contact.full_name = "Asha Verma".to_owned();
        contact.email = "asha@example.com".to_owned();
        contact.phone = "+91 98765 43210".to_owned();
    }

    #[test]
    fn advance_is_gated_by_step1_validation() {
        let mut wizard = Wizard::new(Variant::Holiday);
        {
            let trip = wizard.trip_mut().unwrap();
            trip.cities[0].name = "Bali".to_owned();
            trip.travel_date = Some("2026-03-10".parse().unwrap());
            trip.star_rating = "4".to_owned();
            trip.holiday_type = "Beach".to_owned();
            // `start_city` left empty on purpose.
        }

        let errors = wizard.advance().unwrap_err();
        assert_eq!(*wizard.state(), State::Step1);
        assert!(errors.get(Field::StartCity).is_some());
        assert!(errors.get(Field::TravelDate).is_none());

        // Nothing else was touched by the failed guard.
        assert_eq!(wizard.trip().cities[0].name, "Bali");
        assert_eq!(wizard.trip().star_rating, "4");

        wizard.trip_mut().unwrap().start_city = "Mumbai".to_owned();
        wizard.advance().unwrap();
        assert_eq!(*wizard.state(), State::Step2);
    }

    #[test]
    fn back_navigation_is_lossless() {
        let mut wizard = wizard_at_step2();
        fill_contact(&mut wizard);

        wizard.back();
        assert_eq!(*wizard.state(), State::Step1);
        assert_eq!(wizard.trip().start_city, "Mumbai");
        assert_eq!(wizard.contact().full_name, "Asha Verma");

        wizard.advance().unwrap();
        assert_eq!(wizard.contact().email, "asha@example.com");
    }

    #[test]
    fn trip_is_only_editable_on_step1() {
        let mut wizard = wizard_at_step2();
        assert!(wizard.trip_mut().is_none());
        assert!(wizard.contact_mut().is_some());

        wizard.back();
        assert!(wizard.trip_mut().is_some());
        assert!(wizard.contact_mut().is_none());
    }

    #[test]
    fn submit_is_gated_by_step2_validation() {
        let mut wizard = wizard_at_step2();

        let err = wizard.begin_submit().unwrap_err();
        let BeginSubmitError::Invalid(errors) = err else {
            panic!("expected validation errors");
        };
        assert!(errors.get(Field::FullName).is_some());
        assert!(errors.get(Field::Email).is_some());
        assert!(errors.get(Field::Phone).is_some());
        assert_eq!(*wizard.state(), State::Step2);
    }

    #[test]
    fn submission_walks_through_submitting() {
        let mut wizard = wizard_at_step2();
        fill_contact(&mut wizard);

        let enquiry = wizard.begin_submit().unwrap();
        assert_eq!(*wizard.state(), State::Submitting);
        assert_eq!(enquiry.trip.cities[0].name, "Bali");
        assert_eq!(enquiry.contact.full_name, "Asha Verma");

        // No second submission can start while one is in flight.
        assert_eq!(
            wizard.begin_submit().unwrap_err(),
            BeginSubmitError::NotAtContactStep,
        );

        wizard.complete_submit(Ok(()));
        assert_eq!(*wizard.state(), State::Success);
    }

    #[test]
    fn failure_is_recoverable_by_resubmission() {
        let mut wizard = wizard_at_step2();
        fill_contact(&mut wizard);

        drop(wizard.begin_submit().unwrap());
        wizard.complete_submit(Err("Enter a valid email.".to_owned()));
        assert_eq!(
            *wizard.state(),
            State::Failure {
                message: "Enter a valid email.".to_owned()
            },
        );

        // Contact fields stay editable and the guard runs again.
        wizard.contact_mut().unwrap().email = "fixed@example.com".to_owned();
        let enquiry = wizard.begin_submit().unwrap();
        assert_eq!(enquiry.contact.email, "fixed@example.com");
        wizard.complete_submit(Ok(()));
        assert_eq!(*wizard.state(), State::Success);
    }

    #[test]
    fn acknowledge_resets_to_the_variant_defaults() {
        let mut wizard = wizard_at_step2();
        fill_contact(&mut wizard);
        drop(wizard.begin_submit().unwrap());
        wizard.complete_submit(Ok(()));

        wizard.acknowledge();
        assert_eq!(*wizard.state(), State::Step1);
        assert_eq!(wizard.trip().cities[0].name, "");
        assert_eq!(wizard.contact().full_name, "");
    }

    #[test]
    fn advance_outside_step1_changes_nothing() {
        let mut wizard = wizard_at_step2();
        wizard.advance().unwrap();
        assert_eq!(*wizard.state(), State::Step2);
    }
}
