//! Pipes that transform, filter, or cut short the stream flowing through them.
//!
//! Most of these never return on their own, so they are generic in their
//! return type and take on whatever result the rest of the pipeline has.

use alloc::rc::Rc;

use crate::compose::feed;
use crate::each::each;
use crate::proxy::Consumer;
use crate::proxy::Pipe;
use crate::proxy::Proxy;
use crate::proxy::pure;
use crate::pull::cat;
use crate::request::await_;
use crate::respond::for_;
use crate::respond::yield_;

/// Applies `f` to every value flowing downstream.
///
/// ```rust
/// use sluice::{Producer, combinators, each};
///
/// let p: Producer<String, ()> =
///     each([1, 2]).compose(combinators::map(|x: i32| x.to_string()));
/// assert_eq!(combinators::to_vec(p), ["1", "2"]);
/// ```
pub fn map<'a, A, B, R, F>(f: F) -> Pipe<'a, A, B, R>
where
    A: 'a,
    B: 'a,
    R: 'a,
    F: Fn(A) -> B + 'a,
{
    for_(cat(), move |a| yield_(f(a)))
}

/// Applies `f` to every value flowing downstream, and yields each item of the
/// iterable it returns.
pub fn map_many<'a, A, I, R, F>(f: F) -> Pipe<'a, A, I::Item, R>
where
    A: 'a,
    I: IntoIterator + 'a,
    I::Item: 'a,
    I::IntoIter: 'a,
    R: 'a,
    F: Fn(A) -> I + 'a,
{
    for_(cat(), move |a| each(f(a)))
}

/// Passes on only the values for which `predicate` holds.
pub fn filter<'a, A, R, F>(predicate: F) -> Pipe<'a, A, A, R>
where
    A: 'a,
    R: 'a,
    F: Fn(&A) -> bool + 'a,
{
    for_(cat(), move |a| if predicate(&a) { yield_(a) } else { pure(()) })
}

/// Passes on the first `n` values, then returns.
///
/// ```rust
/// use sluice::{Producer, combinators, each};
///
/// let p: Producer<i32, ()> = each(1..).compose(combinators::take(3));
/// assert_eq!(combinators::to_vec(p), [1, 2, 3]);
/// ```
pub fn take<'a, A>(n: usize) -> Pipe<'a, A, A, ()>
where
    A: 'a,
{
    if n == 0 {
        return pure(());
    }
    await_().and_then(move |a| yield_(a).and_then(move |()| take(n - 1)))
}

/// Passes on values for as long as `predicate` holds, and returns at the
/// first value for which it does not. That value is dropped.
pub fn take_while<'a, A, F>(predicate: F) -> Pipe<'a, A, A, ()>
where
    A: 'a,
    F: Fn(&A) -> bool + 'a,
{
    take_while_with(Rc::new(predicate))
}

fn take_while_with<'a, A, F>(predicate: Rc<F>) -> Pipe<'a, A, A, ()>
where
    A: 'a,
    F: Fn(&A) -> bool + 'a,
{
    await_().and_then(move |a| {
        if predicate(&a) {
            yield_(a).and_then(move |()| take_while_with(predicate))
        } else {
            pure(())
        }
    })
}

/// Discards the first `n` values, then passes on the rest.
pub fn drop<'a, A, R>(n: usize) -> Pipe<'a, A, A, R>
where
    A: 'a,
    R: 'a,
{
    if n == 0 {
        return cat();
    }
    await_().and_then(move |_| drop(n - 1))
}

/// Discards values for as long as `predicate` holds, then passes on the
/// first value for which it does not and everything after it.
pub fn drop_while<'a, A, R, F>(predicate: F) -> Pipe<'a, A, A, R>
where
    A: 'a,
    R: 'a,
    F: Fn(&A) -> bool + 'a,
{
    drop_while_with(Rc::new(predicate))
}

fn drop_while_with<'a, A, R, F>(predicate: Rc<F>) -> Pipe<'a, A, A, R>
where
    A: 'a,
    R: 'a,
    F: Fn(&A) -> bool + 'a,
{
    await_().and_then(move |a| {
        if predicate(&a) {
            drop_while_with(predicate)
        } else {
            yield_(a).and_then(|()| cat())
        }
    })
}

/// A left scan over the stream.
///
/// Yields `extract(&init)` before awaiting anything, then for every value
/// that arrives, steps the accumulator with `step` and yields the extracted
/// view of the new accumulator.
///
/// ```rust
/// use sluice::{Producer, combinators, each};
///
/// let running_total: Producer<i32, ()> = each([1, 2, 3]).compose(
///     combinators::scan(|acc: i32, x: i32| acc + x, 0, |acc: &i32| *acc),
/// );
/// assert_eq!(combinators::to_vec(running_total), [0, 1, 3, 6]);
/// ```
pub fn scan<'a, A, B, X, R, S, E>(
    step: S,
    init: X,
    extract: E,
) -> Pipe<'a, A, B, R>
where
    A: 'a,
    B: 'a,
    X: 'a,
    R: 'a,
    S: Fn(X, A) -> X + 'a,
    E: Fn(&X) -> B + 'a,
{
    scan_from(Rc::new(step), Rc::new(extract), init)
}

fn scan_from<'a, A, B, X, R, S, E>(
    step: Rc<S>,
    extract: Rc<E>,
    acc: X,
) -> Pipe<'a, A, B, R>
where
    A: 'a,
    B: 'a,
    X: 'a,
    R: 'a,
    S: Fn(X, A) -> X + 'a,
    E: Fn(&X) -> B + 'a,
{
    yield_(extract(&acc)).and_then(move |()| {
        await_().and_then(move |a| {
            let acc = step(acc, a);
            scan_from(step, extract, acc)
        })
    })
}

/// Flattens every iterable flowing downstream into its items.
pub fn concat<'a, I, R>() -> Pipe<'a, I, I::Item, R>
where
    I: IntoIterator + 'a,
    I::Item: 'a,
    I::IntoIter: 'a,
    R: 'a,
{
    for_(cat(), each)
}

/// Calls `action` on every value flowing downstream, then passes it on.
pub fn chain<'a, A, R, F>(action: F) -> Pipe<'a, A, A, R>
where
    A: 'a,
    R: 'a,
    F: Fn(&A) + 'a,
{
    for_(cat(), move |a| {
        action(&a);
        yield_(a)
    })
}

/// Accepts and discards every value.
pub fn drain<'a, A, R>() -> Consumer<'a, A, R>
where
    A: 'a,
    R: 'a,
{
    for_(cat(), discard)
}

/// Yields the position of every value for which `predicate` holds, counting
/// from zero.
pub fn find_indices<'a, A, R, F>(predicate: F) -> Pipe<'a, A, usize, R>
where
    A: 'a,
    R: 'a,
    F: Fn(&A) -> bool + 'a,
{
    find_indices_from(Rc::new(predicate), 0)
}

fn find_indices_from<'a, A, R, F>(
    predicate: Rc<F>,
    index: usize,
) -> Pipe<'a, A, usize, R>
where
    A: 'a,
    R: 'a,
    F: Fn(&A) -> bool + 'a,
{
    await_().and_then(move |a| {
        if predicate(&a) {
            yield_(index)
                .and_then(move |()| find_indices_from(predicate, index + 1))
        } else {
            find_indices_from(predicate, index + 1)
        }
    })
}

/// Yields the position of every value equal to `x`, counting from zero.
pub fn elem_indices<'a, A, R>(x: A) -> Pipe<'a, A, usize, R>
where
    A: PartialEq + 'a,
    R: 'a,
{
    find_indices(move |a| *a == x)
}

/// Yields the result of `f` forever.
pub fn repeat<'a, UO, UI, B, R, F>(f: F) -> Proxy<'a, UO, UI, (), B, R>
where
    UO: 'a,
    UI: 'a,
    B: 'a,
    R: 'a,
    F: Fn() -> B + 'a,
{
    feed(move || pure(f()), cat())
}

/// Yields the result of `f` exactly `n` times, then returns.
///
/// ```rust
/// use core::cell::Cell;
/// use sluice::{Producer, combinators};
///
/// let counter = Cell::new(0);
/// let p: Producer<i32, ()> = combinators::replicate(
///     || {
///         counter.set(counter.get() + 1);
///         counter.get()
///     },
///     3,
/// );
/// assert_eq!(combinators::to_vec(p), [1, 2, 3]);
/// ```
pub fn replicate<'a, UO, UI, B, F>(f: F, n: usize) -> Proxy<'a, UO, UI, (), B, ()>
where
    UO: 'a,
    UI: 'a,
    B: 'a,
    F: Fn() -> B + 'a,
{
    feed(move || pure(f()), take(n))
}

/// Ignores its argument and returns `()` without awaiting or yielding.
///
/// Handy as the body of `for_()` when the values themselves don't matter.
pub fn discard<'a, UO, UI, DI, DO, T>(_: T) -> Proxy<'a, UO, UI, DI, DO, ()>
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
{
    pure(())
}
