//! Lockable visitor handle for multi-threaded traversal.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::Visitor;
use crate::staff::{Engineer, Manager};

/// A cloneable handle to one visitor behind a mutex.
///
/// Each clone can be handed to a different thread; every visit call takes the
/// lock, so the wrapped accumulator sees one append at a time.
#[derive(Debug)]
pub struct SharedVisitor<V> {
    inner: Arc<Mutex<V>>,
}

impl<V: Visitor> SharedVisitor<V> {
    pub fn new(visitor: V) -> Self {
        Self {
            inner: Arc::new(Mutex::new(visitor)),
        }
    }

    /// Lock the wrapped visitor, e.g. to read its report.
    pub fn lock(&self) -> MutexGuard<'_, V> {
        self.inner.lock()
    }

    /// Take the visitor back once this is the last handle.
    ///
    /// Returns `self` unchanged if other clones are still alive.
    pub fn try_into_inner(self) -> std::result::Result<V, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<V> Clone for SharedVisitor<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Visitor> Visitor for SharedVisitor<V> {
    fn visit_engineer(&mut self, engineer: &Engineer) {
        self.inner.lock().visit_engineer(engineer);
    }

    fn visit_manager(&mut self, manager: &Manager) {
        self.inner.lock().visit_manager(manager);
    }
}
