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
    /// Returns the dual of this proxy: every await becomes a yield and every
    /// yield becomes an await, so the upstream and downstream interfaces trade
    /// places. The return value is untouched.
    ///
    /// Reflecting twice gives back a proxy that behaves exactly like the
    /// original. Reflection also swaps the two substitution categories:
    /// reflecting `respond()` gives `request()`, and reflecting a
    /// `respond_bind()` gives a `request_bind()` of the reflected parts.
    ///
    /// ```rust
    /// use sluice::{Proxy, ProxyAssertions, respond};
    ///
    /// let p: Proxy<(), (), i32, &str, i32> = respond("ping");
    /// p.reflect().assert_awaits("ping", 5).assert_returns(5);
    /// ```
    pub fn reflect(self) -> Proxy<'a, DO, DI, UI, UO, R> {
        match self.repr {
            Repr::Defer(thunk) => Proxy::delay(move || thunk().reflect()),
            Repr::Bind(bind) => Proxy::delay(move || bind.step().reflect()),
            Repr::Ready(Await(uo, k)) => {
                Proxy::yielding(uo, move |ui| k(ui).reflect())
            }
            Repr::Ready(Yield(y, k)) => {
                Proxy::awaiting(y, move |di| k(di).reflect())
            }
            Repr::Ready(Return(r)) => Proxy::pure(r),
        }
    }
}
