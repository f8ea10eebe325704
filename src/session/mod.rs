//! Persisted company session.
//!
//! The board and edit views are scoped to the company that logged in. That
//! identity is persisted between runs as a small YAML file next to the
//! configuration, and read back on startup. Persistence is behind the
//! `SessionStore` trait so the load/save logic can be exercised in tests
//! without touching the disk.

mod error;

pub use error::SessionError;

use crate::nexum::Company;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

const FILE_NAME: &str = "session.yml";

/// The persisted company identity. Either part may be absent depending on
/// what the login endpoint returned.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub company: Option<Company>,
}

impl Session {
    /// The scoping key for candidate visibility, when the session carries
    /// one.
    ///
    pub fn slug(&self) -> Option<&str> {
        self.company.as_ref().map(|company| company.slug.as_str())
    }

    /// Display label for the logged-in company.
    ///
    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref().map(|company| company.name.as_str())
    }
}

/// Read/write access to the persisted session.
///
pub trait SessionStore {
    /// Load the persisted session. Absence is `Ok(None)`; a present but
    /// unparseable session is an error the caller surfaces as a recoverable
    /// state, never a crash.
    fn load(&self) -> Result<Option<Session>, SessionError>;

    /// Persist the session, replacing any previous one.
    fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Remove the persisted session, if any.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Stores the session as a YAML file in the configuration directory.
///
pub struct FileSessionStore {
    file_path: PathBuf,
}

impl FileSessionStore {
    /// Returns a store rooted in the given configuration directory.
    ///
    pub fn new(config_dir: &std::path::Path) -> Self {
        FileSessionStore {
            file_path: config_dir.join(FILE_NAME),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let contents =
            fs::read_to_string(&self.file_path).map_err(|e| SessionError::ReadFailed {
                path: self.file_path.clone(),
                source: e,
            })?;
        let session: Session = serde_yaml::from_str(&contents)
            .map_err(|e| SessionError::Corrupt(e.to_string()))?;
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        let contents = serde_yaml::to_string(session)
            .map_err(|e| SessionError::SerializationFailed(e.to_string()))?;
        fs::write(&self.file_path, contents).map_err(|e| SessionError::SaveFailed {
            path: self.file_path.clone(),
            source: e,
        })
    }

    fn clear(&self) -> Result<(), SessionError> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path).map_err(|e| SessionError::SaveFailed {
                path: self.file_path.clone(),
                source: e,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// In-memory store for tests.
    ///
    pub struct MemorySessionStore {
        session: Mutex<Option<Session>>,
        corrupt: bool,
    }

    impl MemorySessionStore {
        pub fn new(session: Option<Session>) -> Self {
            MemorySessionStore {
                session: Mutex::new(session),
                corrupt: false,
            }
        }

        /// A store whose load always reports an unparseable session.
        pub fn corrupt() -> Self {
            MemorySessionStore {
                session: Mutex::new(None),
                corrupt: true,
            }
        }
    }

    impl SessionStore for MemorySessionStore {
        fn load(&self) -> Result<Option<Session>, SessionError> {
            if self.corrupt {
                return Err(SessionError::Corrupt("not yaml".to_string()));
            }
            Ok(self.session.lock().unwrap().clone())
        }

        fn save(&self, session: &Session) -> Result<(), SessionError> {
            *self.session.lock().unwrap() = Some(session.clone());
            Ok(())
        }

        fn clear(&self) -> Result<(), SessionError> {
            *self.session.lock().unwrap() = None;
            Ok(())
        }
    }
}
