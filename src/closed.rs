/// A stand-in for the 'never' type `!`, used for the interface positions of a
/// `Proxy` that are never exercised.
///
/// A `Producer` never awaits, so its upstream output type is `Closed`; a
/// `Consumer` never yields, so its downstream output type is `Closed`. Because
/// no value of this type can exist, the branches of a `match` that would hold
/// one are statically dead, and can be discharged with `absurd()` instead of a
/// runtime failure path. This is how `run_effect()` and `next()` know that they
/// only ever see the states they handle.
///
/// ```rust
/// use sluice::Closed;
///
/// fn never_called(c: Closed) -> String {
///     c.absurd()
/// }
/// # let _ = never_called;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Closed {}

impl Closed {
    /// Converts the impossible value into a value of any type.
    pub fn absurd<T>(self) -> T {
        match self {}
    }
}

/// Free-function form of `Closed::absurd()`, handy as an argument to
/// `map_return()` and friends.
pub fn closed<T>(c: Closed) -> T {
    c.absurd()
}
