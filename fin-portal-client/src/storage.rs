use fin_portal_common::{session::Session, store::SessionStore};
use gloo_storage::{errors::StorageError, SessionStorage, Storage};

/// Storage key of the serialized session record
const SESSION_KEY: &str = "fp_user";

/// [SessionStore] over the browser's tab scoped storage. Reads and writes are
/// synchronous; a missing or unreadable record rehydrates as [None].
#[derive(Clone, Copy)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn read(&self) -> Option<Session> {
        match SessionStorage::get(SESSION_KEY) {
            Ok(session) => Some(session),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(error) => {
                log::debug!("Discarding unreadable session record. {error}");
                None
            }
        }
    }

    fn write(&self, session: &Session) {
        if let Err(error) = SessionStorage::set(SESSION_KEY, session) {
            log::error!("Could not persist the session record. {error}");
        }
    }

    fn clear(&self) {
        SessionStorage::delete(SESSION_KEY);
    }
}
