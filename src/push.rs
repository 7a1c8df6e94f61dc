//! The push category: a producer-driven handoff between two proxies.

use alloc::rc::Rc;

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
    /// Connects this proxy to the downstream proxy that `f` builds from its
    /// first yielded value, starting with this proxy in control.
    ///
    /// When this proxy yields, control moves downstream. When the downstream
    /// proxy awaits, its request resumes this proxy, and so on back and forth.
    /// Awaits of this proxy and yields of the downstream one are the awaits
    /// and yields of the result. Whichever side returns first ends the whole
    /// composition, and the other side is dropped where it stands.
    ///
    /// This is `>>~` in the push category. `f` is called at most once.
    pub fn push_bind<NI, NO, F>(self, f: F) -> Proxy<'a, UO, UI, NI, NO, R>
    where
        NI: 'a,
        NO: 'a,
        F: FnOnce(DO) -> Proxy<'a, DI, DO, NI, NO, R> + 'a,
    {
        match self.repr {
            Repr::Defer(thunk) => Proxy::delay(move || thunk().push_bind(f)),
            Repr::Bind(bind) => Proxy::delay(move || bind.step().push_bind(f)),
            Repr::Ready(Await(uo, k)) => {
                Proxy::awaiting(uo, move |ui| k(ui).push_bind(f))
            }
            Repr::Ready(Yield(y, k)) => Proxy::delay(move || f(y).pull_bind(k)),
            Repr::Ready(Return(r)) => Proxy::pure(r),
        }
    }
}

/// Forwards a value downstream, then forwards the downstream reply upstream,
/// then forwards the upstream reply downstream, forever.
///
/// This is the identity of `push_compose()`.
pub fn push<'a, UT, DT, R>(dt: DT) -> Proxy<'a, UT, DT, UT, DT, R>
where
    UT: 'a,
    DT: 'a,
    R: 'a,
{
    Proxy::yielding(dt, |ut| Proxy::awaiting(ut, push))
}

/// Composes two push-driven functions into one: `f` runs, and its first yield
/// builds and hands control to the proxy from `g`.
///
/// This is `>~>`, the composition of the push category, whose identity is
/// `push()`.
pub fn push_compose<'a, UO, UI, DI, DO, NI, NO, R, F, G>(
    f: F,
    g: G,
) -> impl Fn(UI) -> Proxy<'a, UO, UI, NI, NO, R> + 'a
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
    NI: 'a,
    NO: 'a,
    R: 'a,
    F: Fn(UI) -> Proxy<'a, UO, UI, DI, DO, R> + 'a,
    G: Fn(DO) -> Proxy<'a, DI, DO, NI, NO, R> + 'a,
{
    let g = Rc::new(g);
    move |ui| {
        let g = Rc::clone(&g);
        f(ui).push_bind(move |y| g(y))
    }
}
