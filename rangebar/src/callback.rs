//! Shared callback handles.
//!
//! ## Usage
//!
//! Store listener closures on the controller without forcing deep closure
//! comparisons.

use std::sync::Arc;

/// Stable, comparable callback handle for `Fn(T)`.
///
/// `CallbackWith` compares by identity (`Arc::ptr_eq`), so two handles are
/// equal only when they were cloned from the same closure.
pub struct CallbackWith<T> {
    handler: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> CallbackWith<T> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) {
        (self.handler)(value)
    }
}

impl<T> Clone for CallbackWith<T> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T> PartialEq for CallbackWith<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T> Eq for CallbackWith<T> {}

impl<T> std::fmt::Debug for CallbackWith<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackWith").finish_non_exhaustive()
    }
}

/// Callback receiving the published `(left_index, right_index)` pair.
pub type IndexCallback = CallbackWith<(usize, usize)>;
