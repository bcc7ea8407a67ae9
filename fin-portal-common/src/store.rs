use crate::session::Session;

/// Persistence seam for the tab scoped session record. Implementations hold a
/// single serialized [Session] under a fixed key and are injected into the app
/// shell, so the backing storage can be swapped without touching global state.
pub trait SessionStore {
    /// Rehydrates the persisted session, [None] when absent or unreadable
    fn read(&self) -> Option<Session>;

    /// Rewrites the persisted mirror with `session`
    fn write(&self, session: &Session);

    /// Removes the persisted record entirely
    fn clear(&self);
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;

    use rstest::rstest;
    use serde_json::json;

    use super::SessionStore;
    use crate::session::Session;

    /// Store backed by a single serialized slot, mirroring the browser storage
    /// contract without a browser
    #[derive(Default)]
    struct MemoryStore {
        slot: RefCell<Option<String>>,
    }

    impl SessionStore for MemoryStore {
        fn read(&self) -> Option<Session> {
            let slot = self.slot.borrow();
            let raw = slot.as_deref()?;
            serde_json::from_str(raw).ok()
        }

        fn write(&self, session: &Session) {
            if let Ok(raw) = serde_json::to_string(session) {
                *self.slot.borrow_mut() = Some(raw);
            }
        }

        fn clear(&self) {
            *self.slot.borrow_mut() = None;
        }
    }

    fn customer() -> Session {
        Session::from_login("c123", json!({"name": "Test User", "age": 30}))
            .expect("valid login input")
    }

    fn business() -> Session {
        Session::from_login("b55", json!({"business_name": "Test Firm", "revenue": 1250.5}))
            .expect("valid login input")
    }

    #[rstest]
    #[case::customer(customer())]
    #[case::business(business())]
    fn persisted_session_should_round_trip(#[case] session: Session) {
        let store = MemoryStore::default();

        store.write(&session);

        assert_eq!(store.read(), Some(session));
    }

    #[test]
    fn read_should_return_none_when_nothing_persisted() {
        let store = MemoryStore::default();

        assert_eq!(store.read(), None);
    }

    #[test]
    fn read_should_return_none_when_record_is_corrupt() {
        let store = MemoryStore::default();
        *store.slot.borrow_mut() = Some("not a session".to_owned());

        assert_eq!(store.read(), None);
    }

    #[test]
    fn write_should_replace_previous_session() {
        let store = MemoryStore::default();

        store.write(&customer());
        store.write(&business());

        assert_eq!(store.read(), Some(business()));
    }

    #[test]
    fn clear_should_remove_persisted_session() {
        let store = MemoryStore::default();

        store.write(&customer());
        store.clear();

        assert_eq!(store.read(), None);
    }
}
