//! Service contains the client-side business logic of the holidays
//! platform: the catalog filter engine, the enquiry wizard, session
//! handling, share generators and the commands/queries executed against
//! the platform's REST API.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;
pub mod share;

#[cfg(doc)]
use infra::Gateway;

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Agency contact block interpolated into share artifacts.
    pub contact: share::Contact,
}

/// Domain service of the holidays platform client.
#[derive(Clone, Debug)]
pub struct Service<G> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Gateway`] of this [`Service`].
    gateway: G,
}

impl<G> Service<G> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(config: Config, gateway: G) -> Self {
        Self { config, gateway }
    }

    /// Returns [`Config`] of this [`Service`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Gateway`] of this [`Service`].
    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}
