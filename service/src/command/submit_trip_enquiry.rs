//! [`Command`] for submitting a [`TripEnquiry`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::enquiry::{
        validate_step1, validate_step2, FieldErrors, TripEnquiry,
    },
    infra::{gateway, Gateway},
    Service,
};

use super::Command;

/// [`Command`] for submitting a [`TripEnquiry`] to the enquiry endpoint of
/// its variant.
#[derive(Clone, Debug, From)]
pub struct SubmitTripEnquiry(pub TripEnquiry);

impl<G> Command<SubmitTripEnquiry> for Service<G>
where
    G: Gateway<Insert<TripEnquiry>, Ok = (), Err = Traced<gateway::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SubmitTripEnquiry,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SubmitTripEnquiry(enquiry) = cmd;

        // Local validation never reaches the network layer.
        let mut errors = validate_step1(&enquiry.trip, enquiry.variant);
        if !errors.is_empty() {
            return Err(tracerr::new!(E::InvalidDraft(errors)));
        }
        errors = validate_step2(&enquiry.contact);
        if !errors.is_empty() {
            return Err(tracerr::new!(E::InvalidDraft(errors)));
        }

        self.gateway()
            .execute(Insert(enquiry))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`SubmitTripEnquiry`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Draft failed local validation.
    #[display("enquiry draft is invalid")]
    #[from(ignore)]
    InvalidDraft(#[error(not(source))] FieldErrors),

    /// [`Gateway`] error.
    #[display("`Gateway` operation failed: {_0}")]
    Gateway(gateway::Error),
}
