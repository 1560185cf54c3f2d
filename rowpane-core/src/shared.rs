use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Shared state wrapper with interior mutability.
///
/// `Shared<T>` wraps one viewer-owned state object (typically the
/// [`TableStore`](crate::TableStore)) so the table pane, the detail
/// pane, and background tasks can all reach it. It is cheap to clone
/// and safe across task boundaries; all mutation goes through
/// [`update`](Self::update), which also marks the state dirty so the
/// host knows a re-render is due.
///
/// This is an explicitly constructed, per-instance object passed to its
/// consumers, not a process-wide global: two viewers on one screen get
/// two independent `Shared` handles.
#[derive(Debug)]
pub struct Shared<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T> Shared<T> {
    /// Wrap a value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Read through a closure without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Mutate through a closure and mark the state dirty.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = match self.inner.write() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        };
        self.dirty.store(true, Ordering::SeqCst);
        result
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(|v| v.clone())
    }

    /// Replace the value and mark the state dirty.
    pub fn set(&self, value: T) {
        self.update(|v| *v = value);
    }

    /// Check whether the state changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
