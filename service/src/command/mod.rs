//! [`Command`] definition.

pub mod authorize_user_session;
pub mod create_user_session;
pub mod send_visa_details;
pub mod submit_general_enquiry;
pub mod submit_trip_enquiry;

use tracerr::Traced;

use crate::{
    infra::{gateway, Gateway},
    Service,
};

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    authorize_user_session::AuthorizeUserSession,
    create_user_session::CreateUserSession,
    send_visa_details::SendVisaDetails,
    submit_general_enquiry::SubmitGeneralEnquiry,
    submit_trip_enquiry::SubmitTripEnquiry,
};

/// [`Command`] performing a back-office [`Gateway`] operation as-is.
///
/// The back-office CRUD surface is one template: every entity screen
/// fetches, creates, replaces or deletes through the same [`Gateway`]
/// operations without extra domain rules, so they share this passthrough.
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct GatewayCommand<Op>(pub Op);

impl<G, Op> Command<GatewayCommand<Op>> for Service<G>
where
    G: Gateway<Op, Ok = (), Err = Traced<gateway::Error>>,
{
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        GatewayCommand(op): GatewayCommand<Op>,
    ) -> Result<Self::Ok, Self::Err> {
        self.gateway().execute(op).await.map_err(tracerr::wrap!())
    }
}
