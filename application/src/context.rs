//! [`Context`]-related definitions.

use service::{
    command::{self, Command as _},
    domain::{user::Session, User},
    infra::{
        session::{FileStore, Persisted, Store as _},
        Rest,
    },
};
use tracing as log;

use crate::{Config, Service};

/// Application context: the wired [`Service`] plus the session store.
///
/// The session is read once per run, mirroring the once-per-route-render
/// evaluation of the website's guard.
#[derive(Debug)]
pub struct Context {
    /// Configuration this [`Context`] was created from.
    config: Config,

    /// Wired [`Service`] instance.
    service: Service,

    /// Session [`FileStore`].
    store: FileStore,
}

/// Outcome of evaluating the session guard.
#[derive(Clone, Debug)]
pub enum Access {
    /// A live [`Session`] exists.
    Authenticated {
        /// Decoded [`Session`].
        session: Session,

        /// Stored [`User`] snapshot.
        user: User,
    },

    /// No usable session: the user must log in.
    Unauthenticated,
}

impl Context {
    /// Creates a new [`Context`] from the provided [`Config`], installing
    /// the stored access token into the gateway when one exists.
    ///
    /// # Errors
    ///
    /// Errors if the gateway cannot be initialized.
    pub fn new(config: Config) -> Result<Self, ContextError> {
        let store = FileStore::new(config.session.file.clone());

        let mut gateway = Rest::new(&(&config.platform).into())
            .map_err(ContextError::Gateway)?;
        match store.load() {
            Ok(Some(unit)) => {
                gateway = gateway.with_bearer(unit.access);
            }
            Ok(None) => {}
            // A malformed unit is purged on the next guard evaluation.
            Err(e) => log::debug!("stored session not loadable: {e}"),
        }

        let service = Service::new(
            service::Config {
                contact: (&config.contact).into(),
            },
            gateway,
        );

        Ok(Self {
            config,
            service,
            store,
        })
    }

    /// Returns the [`Config`] of this [`Context`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the wired [`Service`] of this [`Context`].
    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Stores the provided session unit.
    ///
    /// # Errors
    ///
    /// Errors if the unit cannot be persisted.
    pub fn save_session(
        &self,
        unit: &Persisted,
    ) -> Result<(), service::infra::session::Error> {
        self.store.save(unit)
    }

    /// Purges the stored session unit.
    ///
    /// # Errors
    ///
    /// Errors if the unit cannot be purged.
    pub fn clear_session(
        &self,
    ) -> Result<(), service::infra::session::Error> {
        self.store.clear()
    }

    /// Evaluates the session guard.
    ///
    /// Absent, malformed or expired sessions all evaluate to
    /// [`Access::Unauthenticated`], purging the stored unit on the way, and
    /// are never surfaced as errors.
    pub async fn authenticate(&self) -> Access {
        let unit = match self.store.load() {
            Ok(Some(unit)) => unit,
            Ok(None) => return Access::Unauthenticated,
            Err(e) => {
                log::debug!("purging malformed session: {e}");
                self.purge();
                return Access::Unauthenticated;
            }
        };

        match self
            .service
            .execute(command::AuthorizeUserSession {
                token: unit.access.clone(),
            })
            .await
        {
            Ok(session) => Access::Authenticated {
                session,
                user: unit.user,
            },
            Err(e) => {
                log::debug!("purging unusable session: {e}");
                self.purge();
                Access::Unauthenticated
            }
        }
    }

    /// Purges the stored unit, tolerating storage failures.
    fn purge(&self) {
        if let Err(e) = self.store.clear() {
            log::warn!("failed to purge the stored session: {e}");
        }
    }
}

/// Error of creating a [`Context`].
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ContextError {
    /// Gateway initialization failed.
    #[display("failed to initialize the gateway: {_0}")]
    Gateway(service::infra::gateway::rest::CreateError),
}
