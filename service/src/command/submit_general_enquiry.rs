//! [`Command`] for submitting a general [`Enquiry`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::enquiry::{validate_enquiry, Enquiry, FieldErrors},
    infra::{gateway, Gateway},
    Service,
};

use super::Command;

/// [`Command`] for submitting a single-step general [`Enquiry`].
#[derive(Clone, Debug, From)]
pub struct SubmitGeneralEnquiry(pub Enquiry);

impl<G> Command<SubmitGeneralEnquiry> for Service<G>
where
    G: Gateway<Insert<Enquiry>, Ok = (), Err = Traced<gateway::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SubmitGeneralEnquiry,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SubmitGeneralEnquiry(enquiry) = cmd;

        let errors = validate_enquiry(&enquiry);
        if !errors.is_empty() {
            return Err(tracerr::new!(E::InvalidDraft(errors)));
        }

        self.gateway()
            .execute(Insert(enquiry))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`SubmitGeneralEnquiry`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Draft failed local validation.
    #[display("enquiry is invalid")]
    #[from(ignore)]
    InvalidDraft(#[error(not(source))] FieldErrors),

    /// [`Gateway`] error.
    #[display("`Gateway` operation failed: {_0}")]
    Gateway(gateway::Error),
}
