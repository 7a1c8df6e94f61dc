//! The pull category: a consumer-driven handoff between two proxies.

use alloc::rc::Rc;

use crate::proxy::Pipe;
use crate::proxy::Proxy;
use crate::proxy::Repr;
use crate::suspend::Suspend::{Await, Return, Yield};

impl<'a, UO, UI, DI, DO, R> Proxy<'a, UO, UI, DI, DO, R>
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
    R: 'a,
{
    /// Connects this proxy to the upstream proxy that `f` builds from its
    /// first awaited request, starting with this proxy in control.
    ///
    /// When this proxy awaits, control moves upstream. When the upstream proxy
    /// yields, its value resumes this proxy, and so on back and forth. Yields
    /// of this proxy and awaits of the upstream one are the yields and awaits
    /// of the result. Whichever side returns first ends the whole composition,
    /// and the other side is dropped where it stands.
    ///
    /// This is `+>>` in the pull category, and the engine behind `compose()`.
    /// `f` is called at most once.
    pub fn pull_bind<NO, NI, F>(self, f: F) -> Proxy<'a, NO, NI, DI, DO, R>
    where
        NO: 'a,
        NI: 'a,
        F: FnOnce(UO) -> Proxy<'a, NO, NI, UO, UI, R> + 'a,
    {
        match self.repr {
            Repr::Defer(thunk) => Proxy::delay(move || thunk().pull_bind(f)),
            Repr::Bind(bind) => Proxy::delay(move || bind.step().pull_bind(f)),
            Repr::Ready(Await(uo, k)) => Proxy::delay(move || f(uo).push_bind(k)),
            Repr::Ready(Yield(y, k)) => {
                Proxy::yielding(y, move |di| k(di).pull_bind(f))
            }
            Repr::Ready(Return(r)) => Proxy::pure(r),
        }
    }
}

/// Forwards a request upstream, then forwards the upstream reply downstream,
/// then forwards the downstream reply upstream, forever.
///
/// This is the identity of `pull_compose()`.
pub fn pull<'a, UT, DT, R>(ut: UT) -> Proxy<'a, UT, DT, UT, DT, R>
where
    UT: 'a,
    DT: 'a,
    R: 'a,
{
    Proxy::awaiting(ut, |dt| Proxy::yielding(dt, pull))
}

/// The identity pipe: passes every awaited value straight downstream.
///
/// `cat()` is the identity of `compose()` on both sides.
///
/// ```rust
/// use sluice::{Producer, cat, combinators, each};
///
/// let p: Producer<i32, ()> = each([1, 2, 3]).compose(cat()).compose(cat());
/// assert_eq!(combinators::to_vec(p), [1, 2, 3]);
/// ```
pub fn cat<'a, T, R>() -> Pipe<'a, T, T, R>
where
    T: 'a,
    R: 'a,
{
    pull(())
}

/// Composes two pull-driven functions into one: `g` runs, and its first await
/// builds and hands control to the proxy from `f`.
///
/// This is `>+>`, the composition of the pull category, whose identity is
/// `pull()`. The upstream function comes first, as in a pipeline diagram.
pub fn pull_compose<'a, X, UO, UI, DI, DO, NO, NI, R, F, G>(
    f: F,
    g: G,
) -> impl Fn(X) -> Proxy<'a, NO, NI, DI, DO, R> + 'a
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
    NO: 'a,
    NI: 'a,
    R: 'a,
    F: Fn(UO) -> Proxy<'a, NO, NI, UO, UI, R> + 'a,
    G: Fn(X) -> Proxy<'a, UO, UI, DI, DO, R> + 'a,
{
    let f = Rc::new(f);
    move |x| {
        let f = Rc::clone(&f);
        g(x).pull_bind(move |uo| f(uo))
    }
}
