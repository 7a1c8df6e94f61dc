use alloc::boxed::Box;

use crate::bind::Bind;
use crate::closed::Closed;
use crate::suspend::Suspend;
use Suspend::{Await, Return, Yield};

/// A bidirectional, suspendable computation.
///
/// A `Proxy` has two ports. Upstream, it can *await*: send a value of type
/// `UO` and wait for a reply of type `UI`. Downstream, it can *yield*: send a
/// value of type `DO` and wait for a reply of type `DI`. When it finishes, it
/// returns a final result of type `R`.
///
/// ```text
///                Upstream | Downstream
///                    +---------+
///                    |         |
///   Upstream Output <==       <== Downstream Input
///         (UO)       |         |      (DI)
///   Upstream Input  ==>       ==> Downstream Output
///         (UI)       |    |    |      (DO)
///                    +----|----+
///                         v
///                     Result (R)
/// ```
///
/// A proxy is consumed by every operation that advances or transforms it.
/// `resume()` runs the proxy up to its next suspension point and hands back a
/// `Suspend`. If the proxy is awaiting or yielding, the `Suspend` carries the
/// continuation to call with the reply. There is no way to observe a proxy
/// twice, so there is no way to run a step twice by accident.
///
/// Most of the time a proxy is not resumed by hand. Instead, proxies are
/// built from `yield_()`, `await_()`, `each()` and the `combinators`, glued
/// together with `compose()`, `for_()` and `and_then()`, and the closed
/// pipeline is driven to completion with `run_effect()`.
///
/// The common shapes have their own aliases: `Effect`, `Producer`, `Pipe`,
/// `Consumer`, `Client` and `Server`. The lifetime `'a` bounds whatever the
/// continuations borrow.
pub struct Proxy<'a, UO, UI, DI, DO, R> {
    pub(crate) repr: Repr<'a, UO, UI, DI, DO, R>,
}

pub(crate) enum Repr<'a, UO, UI, DI, DO, R> {
    Ready(Suspend<'a, UO, UI, DI, DO, R>),
    // A step that has not been computed yet. Every operator that hands control
    // from one proxy to another does it through here, so that `resume()` can
    // run the handoffs in a loop instead of nesting native calls.
    Defer(Box<dyn FnOnce() -> Proxy<'a, UO, UI, DI, DO, R> + 'a>),
    // A proxy that has not returned yet, followed by the functions bound to
    // it with `and_then()`.
    Bind(Box<Bind<'a, UO, UI, DI, DO, R>>),
}

/// A proxy that neither awaits nor yields. Run it with `run_effect()`.
pub type Effect<'a, R> = Proxy<'a, Closed, (), (), Closed, R>;

/// A proxy that only yields values of type `B`.
pub type Producer<'a, B, R> = Proxy<'a, Closed, (), (), B, R>;

/// A proxy that awaits values of type `A` and yields values of type `B`.
pub type Pipe<'a, A, B, R> = Proxy<'a, (), A, (), B, R>;

/// A proxy that only awaits values of type `A`.
pub type Consumer<'a, A, R> = Proxy<'a, (), A, (), Closed, R>;

/// A proxy that sends requests of type `Q` upstream and receives responses of
/// type `S`, and never yields.
pub type Client<'a, Q, S, R> = Proxy<'a, Q, S, (), Closed, R>;

/// A proxy that receives requests of type `Q` from downstream and answers them
/// with responses of type `S`, and never awaits.
pub type Server<'a, Q, S, R> = Proxy<'a, Closed, (), Q, S, R>;

impl<'a, UO, UI, DI, DO, R> From<Suspend<'a, UO, UI, DI, DO, R>>
    for Proxy<'a, UO, UI, DI, DO, R>
{
    fn from(suspend: Suspend<'a, UO, UI, DI, DO, R>) -> Self {
        Proxy {
            repr: Repr::Ready(suspend),
        }
    }
}

impl<'a, UO, UI, DI, DO, R> Proxy<'a, UO, UI, DI, DO, R>
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
    R: 'a,
{
    pub(crate) fn awaiting(
        uo: UO,
        k: impl FnOnce(UI) -> Self + 'a,
    ) -> Self {
        Await(uo, Box::new(k)).into()
    }

    pub(crate) fn yielding(
        y: DO,
        k: impl FnOnce(DI) -> Self + 'a,
    ) -> Self {
        Yield(y, Box::new(k)).into()
    }

    /// A proxy that returns `r` without awaiting or yielding.
    ///
    /// Same as the free function `pure()`.
    pub fn pure(r: R) -> Self {
        Return(r).into()
    }

    /// A proxy whose first step is computed by `f` when it is first resumed.
    ///
    /// Same as the free function `delay()`.
    pub fn delay(f: impl FnOnce() -> Self + 'a) -> Self {
        Proxy {
            repr: Repr::Defer(Box::new(f)),
        }
    }

    /// Runs the proxy up to its next suspension point: an await, a yield, or
    /// the final return.
    ///
    /// This is the only place where deferred steps are forced, and it forces
    /// them in a loop. A composed pipeline is a chain of such steps, so this
    /// loop is what keeps long-running pipelines from growing the stack.
    ///
    /// ```rust
    /// use sluice::{Proxy, Return, Yield, yield_};
    ///
    /// let p: Proxy<(), (), (), &str, ()> = yield_("hello");
    /// match p.resume() {
    ///     Yield(greeting, k) => {
    ///         assert_eq!(greeting, "hello");
    ///         assert!(matches!(k(()).resume(), Return(())));
    ///     }
    ///     _ => panic!("expected a yield"),
    /// }
    /// ```
    pub fn resume(self) -> Suspend<'a, UO, UI, DI, DO, R> {
        let mut repr = self.repr;
        loop {
            repr = match repr {
                Repr::Ready(suspend) => return suspend,
                Repr::Defer(thunk) => thunk().repr,
                Repr::Bind(bind) => bind.step().repr,
            };
        }
    }

    /// Calls the provided closure on the *return value* of this proxy. The
    /// resulting proxy awaits and yields exactly like this one, and returns
    /// the result of the closure.
    ///
    /// Because a proxy returns at most once, the closure is `FnOnce`.
    ///
    /// ```rust
    /// use sluice::{Effect, ProxyAssertions, pure};
    ///
    /// let p: Effect<i32> = pure(10);
    /// p.map_return(|x| x * 2).assert_returns(20);
    /// ```
    #[doc(alias = "map")]
    #[doc(alias = "fmap")]
    pub fn map_return<R2, F>(self, f: F) -> Proxy<'a, UO, UI, DI, DO, R2>
    where
        R2: 'a,
        F: FnOnce(R) -> R2 + 'a,
    {
        match self.repr {
            Repr::Ready(Return(r)) => Proxy::pure(f(r)),
            repr => Proxy { repr }.and_then(move |r| Proxy::pure(f(r))),
        }
    }

    /// Sequences two proxies: runs this one, then feeds its return value to
    /// `f` and continues with the proxy that `f` builds.
    ///
    /// This is monadic bind, and all sequencing of proxies is built on it.
    /// The call to `f` is deferred until the combined proxy is resumed, so a
    /// proxy may call itself recursively through `and_then()` without limit.
    /// Chains built one `and_then()` at a time, as in a loop, are kept flat
    /// and run in constant stack space too.
    ///
    /// ```rust
    /// use sluice::{Pipe, ProxyAssertions, await_, yield_};
    ///
    /// fn double_once() -> Pipe<'static, i32, i32, ()> {
    ///     await_().and_then(|x: i32| yield_(x * 2))
    /// }
    ///
    /// double_once()
    ///     .assert_awaits((), 21)
    ///     .assert_yields(42, ())
    ///     .assert_returns(());
    /// ```
    #[doc(alias = "bind")]
    #[doc(alias = "flat_map")]
    pub fn and_then<R2, F>(self, f: F) -> Proxy<'a, UO, UI, DI, DO, R2>
    where
        R2: 'a,
        F: FnOnce(R) -> Proxy<'a, UO, UI, DI, DO, R2> + 'a,
    {
        match self.repr {
            Repr::Ready(Return(r)) => Proxy::delay(move || f(r)),
            Repr::Bind(bind) => bind.extend(f),
            repr => Bind::start(Proxy { repr }, f).into_proxy(),
        }
    }

    /// Runs `pf` to get a function, then runs this proxy and applies the
    /// function to its return value.
    ///
    /// This is the applicative `<*>`, derived from `and_then()`.
    #[doc(alias = "ap")]
    pub fn apply<R2, F>(
        self,
        pf: Proxy<'a, UO, UI, DI, DO, F>,
    ) -> Proxy<'a, UO, UI, DI, DO, R2>
    where
        R2: 'a,
        F: FnOnce(R) -> R2 + 'a,
    {
        pf.and_then(move |g| self.map_return(g))
    }
}

impl<'a, UO, UI, DI, DO, R> Proxy<'a, UO, UI, DI, DO, Proxy<'a, UO, UI, DI, DO, R>>
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
    R: 'a,
{
    /// Flattens a proxy that returns a proxy into a single proxy that runs
    /// them one after the other.
    pub fn flatten(self) -> Proxy<'a, UO, UI, DI, DO, R> {
        self.and_then(|inner| inner)
    }
}

/// A proxy that returns `r` without awaiting or yielding.
///
/// This is the identity of `kleisli_compose()`.
pub fn pure<'a, UO, UI, DI, DO, R>(r: R) -> Proxy<'a, UO, UI, DI, DO, R>
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
    R: 'a,
{
    Proxy::pure(r)
}

/// A proxy whose first step is computed by `f` the first time it is resumed.
///
/// Useful for proxies whose construction does work that should not happen
/// until the pipeline actually runs.
///
/// ```rust
/// use core::cell::Cell;
/// use sluice::{Effect, delay, pure, run_effect};
///
/// let calls = Cell::new(0);
/// let p: Effect<i32> = delay(|| {
///     calls.set(calls.get() + 1);
///     pure(7)
/// });
/// assert_eq!(calls.get(), 0);
/// assert_eq!(run_effect(p), 7);
/// assert_eq!(calls.get(), 1);
/// ```
pub fn delay<'a, UO, UI, DI, DO, R>(
    f: impl FnOnce() -> Proxy<'a, UO, UI, DI, DO, R> + 'a,
) -> Proxy<'a, UO, UI, DI, DO, R>
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
    R: 'a,
{
    Proxy::delay(f)
}
