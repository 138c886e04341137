use crate::error::Result;

/// Abstract interface for the durable key-value backing.
///
/// Values are opaque strings (serialized JSON). This trait handles the "how"
/// of storage (filesystem vs memory); the stores handle the "what".
/// All methods take `&self`; implementations use interior mutability where
/// they need it.
pub trait StorageBackend {
    /// Read the value under `key`. `Ok(None)` when the key was never written
    /// or has been removed. `Err` only on real I/O failures.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    /// MUST be atomic: a reader sees either the old or the new value in full.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for std::rc::Rc<B> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
