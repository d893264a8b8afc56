//! A single piece of store state with explicit set/update operations.

/// Holds one value of store state.
///
/// Replacing the value and deriving it from the previous value are separate
/// operations, so call sites say which one they mean.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StateCell<T> {
    value: T,
}

impl<T> StateCell<T> {
    /// Creates a cell holding `value`.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value.
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// Replaces the value with one computed from the current value.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        self.value = f(&self.value);
    }
}
