//! Session persisted as a small JSON file.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use controller::session::{self, Session, SessionStore};

/// [`SessionStore`] backed by one file holding `{"email": ...}`.
///
/// A missing file means no session. I/O failures are logged and otherwise
/// treated the same way; the flow never aborts on storage.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<Session> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => session::decode(&raw),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read session file");
                None
            }
        }
    }

    fn set(&mut self, session: &Session) {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), error = %e, "failed to create session directory");
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, session::encode(session)) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write session file");
        }
    }

    fn clear(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to remove session file");
            }
        }
    }
}
