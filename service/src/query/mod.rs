//! [`Query`] definition.

pub mod catalog;
pub mod enquiries;
pub mod refdata;
pub mod visas;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    infra::{gateway, Gateway},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a `T`ype from a [`Gateway`].
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct GatewayQuery<T>(T);

impl<W, B> GatewayQuery<By<W, B>> {
    /// Creates a new [`GatewayQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<G, W, B> Query<GatewayQuery<By<W, B>>> for Service<G>
where
    G: Gateway<Select<By<W, B>>, Ok = W, Err = Traced<gateway::Error>>,
{
    type Ok = W;
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        GatewayQuery(by): GatewayQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.gateway()
            .execute(Select(by))
            .await
            .map_err(tracerr::wrap!())
    }
}
