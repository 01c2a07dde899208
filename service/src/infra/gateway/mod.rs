//! [`Gateway`]-related implementations.

#[cfg(feature = "rest")]
pub mod rest;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "rest")]
pub use self::rest::Rest;

/// Remote platform API operation executor.
pub use common::Handler as Gateway;

/// [`Gateway`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "rest")]
    /// [`Rest`] error.
    Rest(rest::Error),
}

impl Error {
    /// Returns the message of this [`Error`] to surface to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            #[cfg(feature = "rest")]
            Self::Rest(e) => e.user_message(),
            #[cfg(not(feature = "rest"))]
            _ => unreachable!("no `Gateway` implementations enabled"),
        }
    }
}
