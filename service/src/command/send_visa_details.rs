//! [`Command`] for emailing [`Visa`] details to a customer.

use common::{operations::Insert, Date};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{visa, Visa},
    infra::{gateway, Gateway},
    share, Service,
};

use super::Command;

/// [`Command`] for emailing the details of a [`Visa`] to a customer
/// through the platform's relay endpoint.
#[derive(Clone, Debug)]
pub struct SendVisaDetails {
    /// Recipient email address.
    pub recipient: String,

    /// [`Visa`] whose details are sent.
    pub visa: Visa,

    /// Departure [`Date`] the estimated arrival is derived from, if known.
    pub departure: Option<Date>,
}

impl<G> Command<SendVisaDetails> for Service<G>
where
    G: Gateway<
        Insert<visa::DetailsEmail>,
        Ok = (),
        Err = Traced<gateway::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SendVisaDetails,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SendVisaDetails {
            recipient,
            visa,
            departure,
        } = cmd;

        if recipient.trim().is_empty() || !recipient.contains('@') {
            return Err(tracerr::new!(E::InvalidRecipient));
        }

        // The email body is the same summary the share flows render, so a
        // customer sees one consistent text everywhere.
        let email = visa::DetailsEmail {
            email: recipient,
            subject: format!("Your {} details", visa.title),
            body: share::summary::visa(
                &visa,
                departure,
                &self.config().contact,
            ),
        };

        self.gateway()
            .execute(Insert(email))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`SendVisaDetails`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Recipient address is not an email address.
    #[display("recipient is not a valid email address")]
    InvalidRecipient,

    /// [`Gateway`] error.
    #[display("`Gateway` operation failed: {_0}")]
    Gateway(gateway::Error),
}
