//! The respond category: substituting a whole proxy for every yield.

use alloc::rc::Rc;

use crate::proxy::Proxy;
use crate::proxy::Repr;
use crate::suspend::Suspend::{Await, Return, Yield};

type Responder<'a, DO, P> = Rc<dyn Fn(DO) -> P + 'a>;

impl<'a, UO, UI, DI, DO, R> Proxy<'a, UO, UI, DI, DO, R>
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
    R: 'a,
{
    /// Replaces every yield in this proxy with the proxy that `f` builds from
    /// the yielded value. Whatever that proxy returns is the reply that
    /// resumes this one, and whatever it yields is yielded by the result.
    ///
    /// Awaits pass through untouched. This is `//>` in the respond category,
    /// and `for_()` is the same operation as a free function.
    ///
    /// ```rust
    /// use sluice::{Producer, ProxyAssertions, each, yield_};
    ///
    /// let p: Producer<i32, ()> =
    ///     each([1, 2]).respond_bind(|x| yield_(x).and_then(move |()| yield_(-x)));
    /// p.assert_yields(1, ())
    ///     .assert_yields(-1, ())
    ///     .assert_yields(2, ())
    ///     .assert_yields(-2, ())
    ///     .assert_returns(());
    /// ```
    pub fn respond_bind<NI, NO, F>(self, f: F) -> Proxy<'a, UO, UI, NI, NO, R>
    where
        NI: 'a,
        NO: 'a,
        F: Fn(DO) -> Proxy<'a, UO, UI, NI, NO, DI> + 'a,
    {
        self.respond_with(Rc::new(f))
    }

    fn respond_with<NI, NO>(
        self,
        f: Responder<'a, DO, Proxy<'a, UO, UI, NI, NO, DI>>,
    ) -> Proxy<'a, UO, UI, NI, NO, R>
    where
        NI: 'a,
        NO: 'a,
    {
        match self.repr {
            Repr::Defer(thunk) => Proxy::delay(move || thunk().respond_with(f)),
            Repr::Bind(bind) => Proxy::delay(move || bind.step().respond_with(f)),
            Repr::Ready(Await(uo, k)) => {
                Proxy::awaiting(uo, move |ui| k(ui).respond_with(f))
            }
            Repr::Ready(Yield(y, k)) => Proxy::delay(move || {
                let rest = Rc::clone(&f);
                f(y).and_then(move |di| k(di).respond_with(rest))
            }),
            Repr::Ready(Return(r)) => Proxy::pure(r),
        }
    }

    /// Applies `f` to every value this proxy yields.
    ///
    /// ```rust
    /// use sluice::{Producer, ProxyAssertions, each};
    ///
    /// let p: Producer<String, ()> = each(["a", "b"]).map_yield(str::to_uppercase);
    /// p.assert_yields("A".to_string(), ())
    ///     .assert_yields("B".to_string(), ())
    ///     .assert_returns(());
    /// ```
    #[doc(alias = "map_output")]
    pub fn map_yield<NO, F>(self, f: F) -> Proxy<'a, UO, UI, DI, NO, R>
    where
        NO: 'a,
        F: Fn(DO) -> NO + 'a,
    {
        self.respond_bind(move |y| respond(f(y)))
    }
}

/// Sends `y` downstream and returns the downstream reply.
///
/// This is the identity of `respond_compose()`.
pub fn respond<'a, UO, UI, DI, DO>(y: DO) -> Proxy<'a, UO, UI, DI, DO, DI>
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
{
    Proxy::yielding(y, Proxy::pure)
}

/// Yields `y` downstream and waits until the consumer asks for more.
///
/// This is `respond()` specialised to the unit reply that `compose()` uses. The
/// trailing underscore is because `yield` is a reserved word.
///
/// ```rust
/// use sluice::{Producer, ProxyAssertions, yield_};
///
/// let p: Producer<&str, ()> = yield_("once");
/// p.assert_yields("once", ()).assert_returns(());
/// ```
pub fn yield_<'a, UO, UI, DO>(y: DO) -> Proxy<'a, UO, UI, (), DO, ()>
where
    UO: 'a,
    UI: 'a,
    DO: 'a,
{
    respond(y)
}

/// Loops over every value yielded by `p`, running the proxy that `f` builds
/// from each one in its place.
///
/// The yields of the proxies built by `f` become the yields of the result, so
/// `for_()` can expand, rewrite, or drop values. It can also just consume
/// them, when `f` never yields.
///
/// ```rust
/// use sluice::{Producer, combinators, each, for_, yield_};
///
/// let p: Producer<i32, ()> = for_(each([1, 2, 3]), |x| {
///     yield_(x).and_then(move |()| yield_(x * 10))
/// });
/// assert_eq!(combinators::to_vec(p), [1, 10, 2, 20, 3, 30]);
/// ```
pub fn for_<'a, UO, UI, DI, DO, NI, NO, R, F>(
    p: Proxy<'a, UO, UI, DI, DO, R>,
    f: F,
) -> Proxy<'a, UO, UI, NI, NO, R>
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
    NI: 'a,
    NO: 'a,
    R: 'a,
    F: Fn(DO) -> Proxy<'a, UO, UI, NI, NO, DI> + 'a,
{
    p.respond_bind(f)
}

/// Composes two yield-substituting functions into one: `f` runs, and every
/// value it yields is handed to `g`.
///
/// This is `/>/`, the composition of the respond category, whose identity is
/// `respond()`.
pub fn respond_compose<'a, X, UO, UI, DI, DO, NI, NO, R, F, G>(
    f: F,
    g: G,
) -> impl Fn(X) -> Proxy<'a, UO, UI, NI, NO, R> + 'a
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
    NI: 'a,
    NO: 'a,
    R: 'a,
    F: Fn(X) -> Proxy<'a, UO, UI, DI, DO, R> + 'a,
    G: Fn(DO) -> Proxy<'a, UO, UI, NI, NO, DI> + 'a,
{
    let g: Responder<'a, DO, Proxy<'a, UO, UI, NI, NO, DI>> = Rc::new(g);
    move |x| f(x).respond_with(Rc::clone(&g))
}
