//! Property system for Stylebox.
//!
//! A [`Property<T>`] wraps a value behind a lock and reports whether a write
//! actually changed it, so the owner can decide when to emit a notification
//! signal. Properties are shared with signal slots through `Arc`.
//!
//! # Example
//!
//! ```
//! use stylebox_core::Property;
//!
//! let prop = Property::new(42);
//! assert_eq!(prop.get(), 42);
//!
//! // Setting the same value returns false (no change)
//! assert!(!prop.set(42));
//!
//! // Setting a different value returns true (changed)
//! assert!(prop.set(100));
//! assert_eq!(prop.get(), 100);
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value that tracks changes.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
