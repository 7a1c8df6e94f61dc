use alloc::rc::Rc;

use crate::proxy::Proxy;

impl<'a, UO, UI, DT, R> Proxy<'a, UO, UI, (), DT, R>
where
    UO: 'a,
    UI: 'a,
    DT: 'a,
    R: 'a,
{
    /// Pipes the values yielded by this proxy into the awaits of `next`, like
    /// a Unix pipe.
    ///
    /// The downstream proxy is in control: it runs until it awaits, at which
    /// point this proxy runs until it yields, and the yielded value resumes
    /// the downstream proxy. When either side returns, the whole pipeline
    /// returns that value; the other side is dropped without being drained.
    ///
    /// `cat()` is the identity of this composition on both sides, and it is
    /// associative, so `a.compose(b).compose(c)` behaves like
    /// `a.compose(b.compose(c))`.
    ///
    /// ```rust
    /// use sluice::{Producer, combinators, each};
    ///
    /// let p: Producer<i32, ()> = each(1..)
    ///     .compose(combinators::map(|x: i32| x * x))
    ///     .compose(combinators::take(4));
    /// assert_eq!(combinators::to_vec(p), [1, 4, 9, 16]);
    /// ```
    #[doc(alias = ">->")]
    pub fn compose<DI, DO>(
        self,
        next: Proxy<'a, (), DT, DI, DO, R>,
    ) -> Proxy<'a, UO, UI, DI, DO, R>
    where
        DI: 'a,
        DO: 'a,
    {
        next.pull_bind(move |()| self)
    }
}

/// Free-function form of `Proxy::compose()`.
pub fn compose<'a, UO, UI, DT, DI, DO, R>(
    upstream: Proxy<'a, UO, UI, (), DT, R>,
    downstream: Proxy<'a, (), DT, DI, DO, R>,
) -> Proxy<'a, UO, UI, DI, DO, R>
where
    UO: 'a,
    UI: 'a,
    DT: 'a,
    DI: 'a,
    DO: 'a,
    R: 'a,
{
    upstream.compose(downstream)
}

/// Feeds `consumer` by running a fresh proxy from `source` for every one of
/// its awaits, and resuming it with that proxy's return value.
///
/// This is `>~`. Because a proxy can only run once, the upstream side is
/// given as a factory rather than as a proxy. Everything the fresh proxies
/// await and yield passes through to the result.
///
/// ```rust
/// use sluice::{Consumer, Effect, await_, feed, pure, run_effect};
///
/// let add_three: Consumer<i32, i32> = await_().and_then(|a: i32| {
///     await_().and_then(move |b: i32| await_().map_return(move |c: i32| a + b + c))
/// });
/// let fed: Effect<i32> = feed(|| pure(5), add_three);
/// assert_eq!(run_effect(fed), 15);
/// ```
#[doc(alias = ">~")]
pub fn feed<'a, UO, UI, DI, DO, A, R, F>(
    source: F,
    consumer: Proxy<'a, (), A, DI, DO, R>,
) -> Proxy<'a, UO, UI, DI, DO, R>
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
    A: 'a,
    R: 'a,
    F: Fn() -> Proxy<'a, UO, UI, DI, DO, A> + 'a,
{
    consumer.request_bind(move |()| source())
}

impl<'a, A, DI, DO, R> Proxy<'a, (), A, DI, DO, R>
where
    A: 'a,
    DI: 'a,
    DO: 'a,
    R: 'a,
{
    /// Method form of `feed()` with the consumer first. This is `~<`.
    #[doc(alias = "~<")]
    pub fn fed_by<UO, UI, F>(self, source: F) -> Proxy<'a, UO, UI, DI, DO, R>
    where
        UO: 'a,
        UI: 'a,
        F: Fn() -> Proxy<'a, UO, UI, DI, DO, A> + 'a,
    {
        feed(source, self)
    }
}

/// Composes two proxy-building functions by sequencing: the proxy from `f`
/// runs first, and its return value builds the proxy from `g`.
///
/// This is `>=>`, Kleisli composition, whose identity is `pure()`.
pub fn kleisli_compose<'a, X, UO, UI, DI, DO, B, C, F, G>(
    f: F,
    g: G,
) -> impl Fn(X) -> Proxy<'a, UO, UI, DI, DO, C> + 'a
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
    B: 'a,
    C: 'a,
    F: Fn(X) -> Proxy<'a, UO, UI, DI, DO, B> + 'a,
    G: Fn(B) -> Proxy<'a, UO, UI, DI, DO, C> + 'a,
{
    let g = Rc::new(g);
    move |x| {
        let g = Rc::clone(&g);
        f(x).and_then(move |b| g(b))
    }
}
