use core::fmt::Debug;

use crate::proxy::Proxy;
use crate::suspend::Suspend::{Await, Return, Yield};

/// Extension trait providing assertion methods for testing proxies.
///
/// Each assertion resumes the proxy once, checks what it did, and hands back
/// the rest of the proxy so that assertions can be chained:
///
/// ```rust
/// use sluice::{Pipe, ProxyAssertions, combinators};
///
/// let p: Pipe<i32, i32, ()> = combinators::take(2);
/// p.assert_awaits((), 10)
///     .assert_yields(10, ())
///     .assert_awaits((), 20)
///     .assert_yields(20, ())
///     .assert_returns(());
/// ```
pub trait ProxyAssertions<'a, UO, UI, DI, DO, R> {
    /// Resumes the proxy and asserts that it yields `expected`. Panics if the
    /// proxy awaits or returns instead, or yields a different value.
    ///
    /// The `reply` is passed to the continuation to get the next state of the
    /// proxy.
    fn assert_yields(
        self,
        expected: DO,
        reply: DI,
    ) -> Proxy<'a, UO, UI, DI, DO, R>
    where
        UO: Debug,
        DO: PartialEq + Debug,
        R: Debug;

    /// Resumes the proxy and asserts that it sends `expected` upstream.
    /// Panics if the proxy yields or returns instead, or sends a different
    /// value.
    ///
    /// The `reply` is passed to the continuation to get the next state of the
    /// proxy.
    fn assert_awaits(
        self,
        expected: UO,
        reply: UI,
    ) -> Proxy<'a, UO, UI, DI, DO, R>
    where
        UO: PartialEq + Debug,
        DO: Debug,
        R: Debug;

    /// Resumes the proxy and asserts that it returns `expected`. Panics if
    /// the proxy awaits or yields instead, or returns a different value.
    ///
    /// Useful at the end of a chain of `assert_yields()` and
    /// `assert_awaits()` calls.
    fn assert_returns(self, expected: R)
    where
        UO: Debug,
        DO: Debug,
        R: PartialEq + Debug;
}

impl<'a, UO, UI, DI, DO, R> ProxyAssertions<'a, UO, UI, DI, DO, R>
    for Proxy<'a, UO, UI, DI, DO, R>
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
    R: 'a,
{
    fn assert_yields(
        self,
        expected: DO,
        reply: DI,
    ) -> Proxy<'a, UO, UI, DI, DO, R>
    where
        UO: Debug,
        DO: PartialEq + Debug,
        R: Debug,
    {
        match self.resume() {
            Yield(actual, k) => {
                assert_eq!(
                    actual, expected,
                    "expected Yield({expected:?}), got Yield({actual:?})"
                );
                k(reply)
            }
            Await(actual, _) => {
                panic!("expected Yield({expected:?}), got Await({actual:?})")
            }
            Return(actual) => {
                panic!("expected Yield({expected:?}), got Return({actual:?})")
            }
        }
    }

    fn assert_awaits(
        self,
        expected: UO,
        reply: UI,
    ) -> Proxy<'a, UO, UI, DI, DO, R>
    where
        UO: PartialEq + Debug,
        DO: Debug,
        R: Debug,
    {
        match self.resume() {
            Await(actual, k) => {
                assert_eq!(
                    actual, expected,
                    "expected Await({expected:?}), got Await({actual:?})"
                );
                k(reply)
            }
            Yield(actual, _) => {
                panic!("expected Await({expected:?}), got Yield({actual:?})")
            }
            Return(actual) => {
                panic!("expected Await({expected:?}), got Return({actual:?})")
            }
        }
    }

    fn assert_returns(self, expected: R)
    where
        UO: Debug,
        DO: Debug,
        R: PartialEq + Debug,
    {
        match self.resume() {
            Return(actual) => {
                assert_eq!(
                    actual, expected,
                    "expected Return({expected:?}), got Return({actual:?})"
                );
            }
            Await(actual, _) => {
                panic!("expected Return({expected:?}), got Await({actual:?})")
            }
            Yield(actual, _) => {
                panic!("expected Return({expected:?}), got Yield({actual:?})")
            }
        }
    }
}
