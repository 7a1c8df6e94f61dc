//! Pipes viewed as arrows: routing `Either` values around an inner pipe, and
//! scans that take their initial state from the stream.

use either::Either;
use either::Either::{Left, Right};

use crate::compose::feed;
use crate::proxy::Pipe;
use crate::proxy::pure;
use crate::request::await_;
use crate::respond::for_;
use crate::respond::yield_;

use super::pipes::map;
use super::pipes::scan;

/// Lifts a plain function into a pipe. Same as `map()`.
pub fn arr<'a, A, B, R, F>(f: F) -> Pipe<'a, A, B, R>
where
    A: 'a,
    B: 'a,
    R: 'a,
    F: Fn(A) -> B + 'a,
{
    map(f)
}

/// Runs `p` on the `Left` values of the stream, and passes `Right` values
/// through untouched.
///
/// ```rust
/// use either::Either::{self, Left, Right};
/// use sluice::{Producer, combinators, each};
///
/// let p: Producer<Either<i32, &str>, ()> = each([Left(1), Right("a"), Left(2)])
///     .compose(combinators::left(combinators::map(|x: i32| x * 10)));
/// assert_eq!(combinators::to_vec(p), [Left(10), Right("a"), Left(20)]);
/// ```
pub fn left<'a, A, B, C, R>(
    p: Pipe<'a, A, B, R>,
) -> Pipe<'a, Either<A, C>, Either<B, C>, R>
where
    A: 'a,
    B: 'a,
    C: 'a,
    R: 'a,
{
    feed(route_left, for_(p, |b| yield_(Left(b))))
}

// Passes `Right` values straight downstream and returns the first `Left`.
fn route_left<'a, A, B, C>() -> Pipe<'a, Either<A, C>, Either<B, C>, A>
where
    A: 'a,
    B: 'a,
    C: 'a,
{
    await_().and_then(|v| match v {
        Left(a) => pure(a),
        Right(c) => yield_(Right(c)).and_then(|()| route_left()),
    })
}

/// Runs `p` on the `Right` values of the stream, and passes `Left` values
/// through untouched.
pub fn right<'a, A, B, C, R>(
    p: Pipe<'a, A, B, R>,
) -> Pipe<'a, Either<C, A>, Either<C, B>, R>
where
    A: 'a,
    B: 'a,
    C: 'a,
    R: 'a,
{
    feed(route_right, for_(p, |b| yield_(Right(b))))
}

fn route_right<'a, A, B, C>() -> Pipe<'a, Either<C, A>, Either<C, B>, A>
where
    A: 'a,
    B: 'a,
    C: 'a,
{
    await_().and_then(|v| match v {
        Left(c) => yield_(Left(c)).and_then(|()| route_right()),
        Right(a) => pure(a),
    })
}

/// Runs `p` on the `Left` values and `q` on the `Right` values of the
/// stream. This is `+++`.
#[doc(alias = "+++")]
pub fn plus<'a, A, B, C, D, R>(
    p: Pipe<'a, A, B, R>,
    q: Pipe<'a, C, D, R>,
) -> Pipe<'a, Either<A, C>, Either<B, D>, R>
where
    A: 'a,
    B: 'a,
    C: 'a,
    D: 'a,
    R: 'a,
{
    left(p).compose(right(q))
}

/// A left scan whose accumulator is built from the first value of the
/// stream by `init`. Unlike `scan()`, nothing is yielded before the first
/// value arrives.
pub fn scan1<'a, A, B, X, R, S, I, E>(
    step: S,
    init: I,
    extract: E,
) -> Pipe<'a, A, B, R>
where
    A: 'a,
    B: 'a,
    X: 'a,
    R: 'a,
    S: Fn(X, A) -> X + 'a,
    I: FnOnce(A) -> X + 'a,
    E: Fn(&X) -> B + 'a,
{
    await_().and_then(move |a| scan(step, init(a), extract))
}

/// A left scan that uses the first value of the stream as its accumulator,
/// and yields every intermediate accumulator.
///
/// ```rust
/// use sluice::{Producer, combinators, each};
///
/// let running_max: Producer<i32, ()> =
///     each([3, 1, 4, 1, 5]).compose(combinators::scan1i(|a: i32, b: i32| a.max(b)));
/// assert_eq!(combinators::to_vec(running_max), [3, 3, 4, 4, 5]);
/// ```
pub fn scan1i<'a, A, R, S>(step: S) -> Pipe<'a, A, A, R>
where
    A: Clone + 'a,
    R: 'a,
    S: Fn(A, A) -> A + 'a,
{
    scan1(step, |a| a, A::clone)
}
