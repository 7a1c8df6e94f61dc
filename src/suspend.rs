use alloc::boxed::Box;
use core::fmt;

use crate::proxy::Proxy;

/// The rest of a suspended proxy, waiting for the value that resumes it.
pub type Continuation<'a, I, P> = Box<dyn FnOnce(I) -> P + 'a>;

/// The state of a `Proxy` after `resume()` has run it up to its next
/// suspension point.
///
///   * `Await(uo, k)`: The proxy sent `uo` upstream and waits for a reply of
///     type `UI`. Calling `k` with the reply gives the rest of the proxy.
///   * `Yield(do, k)`: The proxy sent a value downstream and waits for a reply
///     of type `DI`. Calling `k` with the reply gives the rest of the proxy.
///   * `Return(r)`: The proxy finished with the final result `r`. There is
///     nothing left to resume.
///
/// ```rust
/// use sluice::{Producer, Return, Yield, each};
///
/// let numbers: Producer<i32, ()> = each([1, 2]);
/// let Yield(first, rest) = numbers.resume() else {
///     panic!("expected a yield");
/// };
/// assert_eq!(first, 1);
/// let Yield(second, rest) = rest(()).resume() else {
///     panic!("expected a yield");
/// };
/// assert_eq!(second, 2);
/// assert!(matches!(rest(()).resume(), Return(())));
/// ```
///
/// A `Suspend` converts back into a `Proxy` with `From`, which is the way to
/// write a proxy by hand:
///
/// ```rust
/// use sluice::{Producer, ProxyAssertions, Return};
///
/// let done: Producer<i32, &str> = Return("done").into();
/// done.assert_returns("done");
/// ```
pub enum Suspend<'a, UO, UI, DI, DO, R> {
    Await(UO, Continuation<'a, UI, Proxy<'a, UO, UI, DI, DO, R>>),
    Yield(DO, Continuation<'a, DI, Proxy<'a, UO, UI, DI, DO, R>>),
    Return(R),
}

use Suspend::*;

impl<'a, UO, UI, DI, DO, R> Suspend<'a, UO, UI, DI, DO, R> {
    /// Returns the value sent upstream and the continuation, if the proxy is
    /// awaiting, or `None` otherwise.
    pub fn into_await(
        self,
    ) -> Option<(UO, Continuation<'a, UI, Proxy<'a, UO, UI, DI, DO, R>>)> {
        match self {
            Await(uo, k) => Some((uo, k)),
            _ => None,
        }
    }

    /// Returns the value sent downstream and the continuation, if the proxy is
    /// yielding, or `None` otherwise.
    ///
    /// Compare to `Result::ok()` or `ControlFlow::continue_value()`.
    pub fn into_yield(
        self,
    ) -> Option<(DO, Continuation<'a, DI, Proxy<'a, UO, UI, DI, DO, R>>)> {
        match self {
            Yield(y, k) => Some((y, k)),
            _ => None,
        }
    }

    /// Returns the final result, if the proxy has returned, or `None`
    /// otherwise.
    ///
    /// Compare to `Result::err()` or `ControlFlow::break_value()`.
    pub fn into_return(self) -> Option<R> {
        match self {
            Return(r) => Some(r),
            _ => None,
        }
    }
}

// Continuations are opaque, so only the payloads are shown.
impl<UO, UI, DI, DO, R> fmt::Debug for Suspend<'_, UO, UI, DI, DO, R>
where
    UO: fmt::Debug,
    DO: fmt::Debug,
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Await(uo, _) => f.debug_tuple("Await").field(uo).finish(),
            Yield(y, _) => f.debug_tuple("Yield").field(y).finish(),
            Return(r) => f.debug_tuple("Return").field(r).finish(),
        }
    }
}
