use either::Either;

use crate::proxy::Effect;
use crate::proxy::Producer;
use crate::proxy::Proxy;
use crate::suspend::Suspend::{Await, Return, Yield};

/// Runs a closed pipeline to completion and returns its result.
///
/// Only an `Effect` can be run: a proxy whose upstream or downstream port is
/// still open has nobody to talk to, and passing one here is a type error.
///
/// ```rust
/// use core::cell::RefCell;
/// use sluice::{Effect, each, for_, pure, run_effect};
///
/// let seen = RefCell::new(Vec::new());
/// let e: Effect<usize> = for_(each(["a", "b"]), |s| {
///     seen.borrow_mut().push(s);
///     pure(())
/// })
/// .map_return(|()| seen.borrow().len());
/// assert_eq!(run_effect(e), 2);
/// assert_eq!(*seen.borrow(), ["a", "b"]);
/// ```
///
/// A producer still has values to yield, so it is not an `Effect`:
///
/// ```compile_fail
/// use sluice::{Producer, each, run_effect};
///
/// let p: Producer<i32, ()> = each([1, 2, 3]);
/// run_effect(p);
/// ```
///
/// Neither is a consumer, which still has values to await:
///
/// ```compile_fail
/// use sluice::{Consumer, combinators, run_effect};
///
/// let c: Consumer<i32, ()> = combinators::drain();
/// run_effect(c);
/// ```
pub fn run_effect<'a, R>(effect: Effect<'a, R>) -> R
where
    R: 'a,
{
    tracing::trace!("running effect");
    match effect.resume() {
        Await(closed, _) => closed.absurd(),
        Yield(closed, _) => closed.absurd(),
        Return(r) => {
            tracing::trace!("effect returned");
            r
        }
    }
}

/// Takes the next value out of a producer.
///
/// Returns `Right` with the value and the rest of the producer, or `Left`
/// with the producer's result if it has finished. The rest of the producer
/// does not run until it is resumed again.
///
/// ```rust
/// use either::Either::{Left, Right};
/// use sluice::{Producer, each, next};
///
/// let p: Producer<char, ()> = each(['x']);
/// let Right((x, rest)) = next(p) else {
///     panic!("expected a value");
/// };
/// assert_eq!(x, 'x');
/// assert!(matches!(next(rest), Left(())));
/// ```
///
/// Only producers can be stepped this way. A consumer awaits, and there is
/// nothing here to answer it:
///
/// ```compile_fail
/// use sluice::{Consumer, combinators, next};
///
/// let c: Consumer<i32, ()> = combinators::drain();
/// let _ = next(c);
/// ```
pub fn next<'a, T, R>(
    producer: Producer<'a, T, R>,
) -> Either<R, (T, Producer<'a, T, R>)>
where
    T: 'a,
    R: 'a,
{
    match producer.resume() {
        Await(closed, _) => closed.absurd(),
        Yield(t, k) => Either::Right((t, Proxy::delay(move || k(())))),
        Return(r) => Either::Left(r),
    }
}
