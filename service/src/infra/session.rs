//! Persisted session unit.

use std::{fs, io, path::PathBuf};

use derive_more::{Display, Error as StdError, From};
use serde::{Deserialize, Serialize};
use tracing as log;

use crate::domain::{user::session::Token, User};

/// Session unit persisted between runs.
///
/// The access token, the refresh token and the user snapshot only ever
/// exist together: they are written and purged as one value, so a partial
/// session state is unrepresentable.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Persisted {
    /// Access [`Token`] of the session.
    pub access: Token,

    /// Refresh [`Token`] of the session.
    pub refresh: Token,

    /// Snapshot of the logged-in [`User`].
    pub user: User,
}

/// Storage of the [`Persisted`] session unit.
///
/// Deliberately explicit: the guard and the login flow receive a [`Store`]
/// instead of reaching into ambient state.
pub trait Store {
    /// Loads the [`Persisted`] unit, if one is stored.
    ///
    /// # Errors
    ///
    /// Errors if the storage cannot be read or its content is malformed. A
    /// malformed unit is indistinguishable from a corrupted login and
    /// should be purged by the caller.
    fn load(&self) -> Result<Option<Persisted>, Error>;

    /// Stores the [`Persisted`] unit, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Errors if the storage cannot be written.
    fn save(&self, unit: &Persisted) -> Result<(), Error>;

    /// Purges the stored unit, if any.
    ///
    /// # Errors
    ///
    /// Errors if the storage cannot be cleared.
    fn clear(&self) -> Result<(), Error>;
}

/// [`Store`] keeping the session unit in a JSON file.
#[derive(Clone, Debug)]
pub struct FileStore {
    /// Path of the backing file.
    path: PathBuf,
}

impl FileStore {
    /// Creates a new [`FileStore`] backed by the provided file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Store for FileStore {
    fn load(&self) -> Result<Option<Persisted>, Error> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&raw)?))
    }

    fn save(&self, unit: &Persisted) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(unit)?)?;
        log::debug!("session saved to `{}`", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::debug!("session purged from `{}`", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// [`Store`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Underlying storage failed.
    #[display("session storage failed: {_0}")]
    Io(io::Error),

    /// Stored unit is malformed.
    #[display("stored session is malformed: {_0}")]
    Malformed(serde_json::Error),
}

#[cfg(test)]
mod spec {
    use crate::domain::{user::session::Token, User};

    use super::{FileStore, Persisted, Store as _};

    fn unit() -> Persisted {
        Persisted {
            access: "a.b.c".parse::<Token>().unwrap(),
            refresh: "d.e.f".parse::<Token>().unwrap(),
            user: User {
                id: 42.into(),
                username: "admin".parse().unwrap(),
            },
        }
    }

    #[test]
    fn round_trips_the_whole_unit() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session.json"));

        assert!(store.load().unwrap().is_none());

        store.save(&unit()).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.access.as_ref(), "a.b.c");
        assert_eq!(loaded.refresh.as_ref(), "d.e.f");
        assert_eq!(loaded.user.id, 42.into());
    }

    #[test]
    fn clearing_purges_everything_at_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session.json"));

        store.save(&unit()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        // Clearing an already empty store is not an error.
        store.clear().unwrap();
    }

    #[test]
    fn malformed_units_surface_as_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"{not json").unwrap();

        let store = FileStore::new(path);
        assert!(store.load().is_err());
    }
}
