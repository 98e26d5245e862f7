//! Synchronized holder for the value being transformed

use parking_lot::Mutex;

/// The data being operated on by each step of a recipe.
///
/// A dish holds an optional byte sequence: absent means "no value yet"
/// and is distinct from a present-but-empty sequence. Every read and
/// write goes through one mutex scoped to this instance.
///
/// # Usage constraint
/// A dish is intended to have at most one in-flight recipe execution at
/// a time. Independent concurrent executions must use independent dishes
/// (see [`Dish::deep_clone`]).
#[derive(Debug, Default)]
pub struct Dish {
    value: Mutex<Option<Vec<u8>>>,
}

impl Dish {
    /// Create a dish with an optional initial value
    #[inline]
    #[must_use]
    pub fn new(value: Option<Vec<u8>>) -> Self {
        Self {
            value: Mutex::new(value),
        }
    }

    /// Create a dish with no value yet
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::new(None)
    }

    /// Create a dish pre-seeded with the given bytes
    #[inline]
    #[must_use]
    pub fn from_bytes(value: impl Into<Vec<u8>>) -> Self {
        Self::new(Some(value.into()))
    }

    /// Current value, copied out under the lock
    ///
    /// Returns `None` if no value has been set yet.
    #[must_use]
    pub fn get(&self) -> Option<Vec<u8>> {
        self.value.lock().clone()
    }

    /// Replace the current value
    ///
    /// Atomic with respect to concurrent `get`/`set` on this instance.
    pub fn set(&self, value: Vec<u8>) {
        tracing::trace!(len = value.len(), "dish value replaced");
        *self.value.lock() = Some(value);
    }

    /// Independent copy of this dish
    ///
    /// The copy holds a deep copy of the current value and shares no
    /// further state with the original. Used to hand a snapshot of the
    /// data to a parallel computation.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self::new(self.get())
    }
}
