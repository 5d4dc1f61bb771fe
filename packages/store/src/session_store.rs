use std::rc::Rc;
use std::sync::Arc;

/// Synchronous string-keyed storage for client-side session data.
///
/// Implementations never fail loudly: a read that cannot be served returns
/// `None` and a write that cannot be persisted is dropped (and logged). The
/// caller treats both as "nothing stored", which for the session credential
/// means "logged out".
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);

    /// Remove every key held by this store. Returns how many were removed.
    fn clear_all(&self) -> usize;
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }

    fn clear_all(&self) -> usize {
        (**self).clear_all()
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }

    fn clear_all(&self) -> usize {
        (**self).clear_all()
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }

    fn clear_all(&self) -> usize {
        (**self).clear_all()
    }
}
