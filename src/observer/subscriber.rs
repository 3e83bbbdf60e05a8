//! The subscriber capability and its closure adapter.

use crate::error::ObserverError;
use std::fmt;

/// A subscriber that reacts when its subject broadcasts.
///
/// The reaction takes no arguments: subscribers are told *that* something
/// happened, not *what*. Returning an error aborts a fail-fast broadcast.
///
/// # Examples
///
/// ```rust
/// use pattern_demos::error::ObserverError;
/// use pattern_demos::observer::Observer;
/// use std::cell::Cell;
///
/// struct Counter(Cell<usize>);
///
/// impl Observer for Counter {
///     fn update(&self) -> Result<(), ObserverError> {
///         self.0.set(self.0.get() + 1);
///         Ok(())
///     }
/// }
/// ```
pub trait Observer {
    /// React to a broadcast.
    ///
    /// # Errors
    ///
    /// Returns an `ObserverError` if the reaction could not be completed.
    fn update(&self) -> Result<(), ObserverError>;
}

/// Inline subscriber built from a closure.
pub struct FnObserver<F> {
    reaction: F,
}

impl<F> FnObserver<F>
where
    F: Fn() -> Result<(), ObserverError>,
{
    /// Wrap a fallible closure.
    pub fn new(reaction: F) -> Self {
        Self { reaction }
    }
}

impl<F> FnObserver<F>
where
    F: Fn(),
{
    /// Wrap a closure that cannot fail.
    pub fn infallible(reaction: F) -> FnObserver<impl Fn() -> Result<(), ObserverError>> {
        FnObserver::new(move || {
            reaction();
            Ok(())
        })
    }
}

impl<F> Observer for FnObserver<F>
where
    F: Fn() -> Result<(), ObserverError>,
{
    fn update(&self) -> Result<(), ObserverError> {
        (self.reaction)()
    }
}

impl<F> fmt::Debug for FnObserver<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnObserver")
    }
}
