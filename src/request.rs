//! The request category: substituting a whole proxy for every await.

use alloc::rc::Rc;

use crate::proxy::Proxy;
use crate::proxy::Repr;
use crate::suspend::Suspend::{Await, Return, Yield};

type Requester<'a, UO, P> = Rc<dyn Fn(UO) -> P + 'a>;

impl<'a, UO, UI, DI, DO, R> Proxy<'a, UO, UI, DI, DO, R>
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
    R: 'a,
{
    /// Replaces every await in this proxy with the proxy that `f` builds from
    /// the value sent upstream. Whatever that proxy returns is the reply that
    /// resumes this one, and whatever it awaits is awaited by the result.
    ///
    /// Yields pass through untouched. This is `>\\` in the request category,
    /// the mirror image of `respond_bind()`.
    ///
    /// ```rust
    /// use sluice::{Consumer, ProxyAssertions, await_, pure};
    ///
    /// // Answers every await with a constant, without touching upstream.
    /// let sum: Consumer<i32, i32> =
    ///     await_().and_then(|a: i32| await_().map_return(move |b: i32| a + b));
    /// let answered: Consumer<i32, i32> =
    ///     sum.request_bind(|()| pure(20)).request_bind(|()| await_());
    /// answered.assert_returns(40);
    /// ```
    pub fn request_bind<NO, NI, F>(self, f: F) -> Proxy<'a, NO, NI, DI, DO, R>
    where
        NO: 'a,
        NI: 'a,
        F: Fn(UO) -> Proxy<'a, NO, NI, DI, DO, UI> + 'a,
    {
        self.request_with(Rc::new(f))
    }

    fn request_with<NO, NI>(
        self,
        f: Requester<'a, UO, Proxy<'a, NO, NI, DI, DO, UI>>,
    ) -> Proxy<'a, NO, NI, DI, DO, R>
    where
        NO: 'a,
        NI: 'a,
    {
        match self.repr {
            Repr::Defer(thunk) => Proxy::delay(move || thunk().request_with(f)),
            Repr::Bind(bind) => Proxy::delay(move || bind.step().request_with(f)),
            Repr::Ready(Await(uo, k)) => Proxy::delay(move || {
                let rest = Rc::clone(&f);
                f(uo).and_then(move |ui| k(ui).request_with(rest))
            }),
            Repr::Ready(Yield(y, k)) => {
                Proxy::yielding(y, move |di| k(di).request_with(f))
            }
            Repr::Ready(Return(r)) => Proxy::pure(r),
        }
    }

    /// Changes the type of the replies this proxy awaits, converting each
    /// reply with `f` before the proxy sees it.
    ///
    /// ```rust
    /// use sluice::{Pipe, ProxyAssertions, await_};
    ///
    /// let p: Pipe<i32, (), i32> = await_();
    /// p.contramap_input(|s: &str| s.len() as i32)
    ///     .assert_awaits((), "four")
    ///     .assert_returns(4);
    /// ```
    #[doc(alias = "map_input")]
    pub fn contramap_input<NI, F>(self, f: F) -> Proxy<'a, UO, NI, DI, DO, R>
    where
        NI: 'a,
        F: Fn(NI) -> UI + 'a,
    {
        let f = Rc::new(f);
        self.request_bind(move |uo| {
            let f = Rc::clone(&f);
            request(uo).map_return(move |ni| f(ni))
        })
    }
}

/// Sends `uo` upstream and returns the upstream reply.
///
/// This is the identity of `request_compose()`.
pub fn request<'a, UO, UI, DI, DO>(uo: UO) -> Proxy<'a, UO, UI, DI, DO, UI>
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
{
    Proxy::awaiting(uo, Proxy::pure)
}

/// Waits for the next value from upstream and returns it.
///
/// This is `request()` specialised to the unit request that `compose()` uses.
/// The trailing underscore is because `await` is a reserved word.
///
/// ```rust
/// use sluice::{Consumer, ProxyAssertions, await_};
///
/// let p: Consumer<i32, i32> = await_();
/// p.assert_awaits((), 3).assert_returns(3);
/// ```
pub fn await_<'a, UI, DI, DO>() -> Proxy<'a, (), UI, DI, DO, UI>
where
    UI: 'a,
    DI: 'a,
    DO: 'a,
{
    request(())
}

/// Composes two await-substituting functions into one: `g` runs, and every
/// value it sends upstream is handed to `f`.
///
/// This is `\>\`, the composition of the request category, whose identity is
/// `request()`.
pub fn request_compose<'a, X, UO, UI, DI, DO, NO, NI, R, F, G>(
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
    F: Fn(UO) -> Proxy<'a, NO, NI, DI, DO, UI> + 'a,
    G: Fn(X) -> Proxy<'a, UO, UI, DI, DO, R> + 'a,
{
    let f: Requester<'a, UO, Proxy<'a, NO, NI, DI, DO, UI>> = Rc::new(f);
    move |x| g(x).request_with(Rc::clone(&f))
}
