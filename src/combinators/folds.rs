//! Functions that drain a `Producer` down to a single value.
//!
//! These drive the producer themselves, so they are the `Producer` analogues
//! of `run_effect()`. Searching folds like `head()` and `any()` stop pulling
//! as soon as they know the answer, and drop the rest of the producer.

use alloc::vec::Vec;
use core::iter::Product;
use core::iter::Sum;

use either::Either;

use crate::proxy::Producer;
use crate::run::next;

use super::pipes::filter;
use super::pipes::find_indices;

/// Folds every value of `producer` into an accumulator, starting from
/// `init`, and returns the extracted view of the final accumulator.
///
/// ```rust
/// use sluice::{combinators, each};
///
/// let total =
///     combinators::fold(each(1..=4), |acc: i32, x: i32| acc + x, 0, |acc| acc);
/// assert_eq!(total, 10);
/// ```
pub fn fold<'a, T, R, X, B, S, E>(
    producer: Producer<'a, T, R>,
    step: S,
    init: X,
    extract: E,
) -> B
where
    T: 'a,
    R: 'a,
    S: FnMut(X, T) -> X,
    E: FnOnce(X) -> B,
{
    fold_ret(producer, step, init, extract).0
}

/// Like `fold()`, but also returns the producer's own result.
pub fn fold_ret<'a, T, R, X, B, S, E>(
    producer: Producer<'a, T, R>,
    mut step: S,
    init: X,
    extract: E,
) -> (B, R)
where
    T: 'a,
    R: 'a,
    S: FnMut(X, T) -> X,
    E: FnOnce(X) -> B,
{
    let mut acc = init;
    let mut count = 0usize;
    let mut producer = producer;
    let r = loop {
        match next(producer) {
            Either::Left(r) => break r,
            Either::Right((t, rest)) => {
                acc = step(acc, t);
                count += 1;
                producer = rest;
            }
        }
    };
    tracing::trace!(count, "producer drained");
    (extract(acc), r)
}

/// Collects every value of `producer` into a `Vec`.
pub fn to_vec<'a, T, R>(producer: Producer<'a, T, R>) -> Vec<T>
where
    T: 'a,
    R: 'a,
{
    producer.into_iter().collect()
}

/// Returns the first value of `producer`, if there is one.
pub fn head<'a, T, R>(producer: Producer<'a, T, R>) -> Option<T>
where
    T: 'a,
    R: 'a,
{
    next(producer).right().map(|(t, _)| t)
}

/// Returns the last value of `producer`, if there is one.
pub fn last<'a, T, R>(producer: Producer<'a, T, R>) -> Option<T>
where
    T: 'a,
    R: 'a,
{
    producer.into_iter().last()
}

/// Returns whether `producer` finishes without yielding anything.
pub fn is_empty<'a, T, R>(producer: Producer<'a, T, R>) -> bool
where
    T: 'a,
    R: 'a,
{
    next(producer).is_left()
}

/// Counts the values of `producer`.
pub fn length<'a, T, R>(producer: Producer<'a, T, R>) -> usize
where
    T: 'a,
    R: 'a,
{
    fold(producer, |n: usize, _| n + 1, 0, |n| n)
}

/// Returns whether `predicate` holds for every value of `producer`.
///
/// Stops at the first value for which it does not.
pub fn all<'a, T, R, F>(producer: Producer<'a, T, R>, predicate: F) -> bool
where
    T: 'a,
    R: 'a,
    F: Fn(&T) -> bool + 'a,
{
    is_empty(producer.compose(filter(move |t| !predicate(t))))
}

/// Returns whether `predicate` holds for any value of `producer`.
///
/// Stops at the first value for which it does.
pub fn any<'a, T, R, F>(producer: Producer<'a, T, R>, predicate: F) -> bool
where
    T: 'a,
    R: 'a,
    F: Fn(&T) -> bool + 'a,
{
    !is_empty(producer.compose(filter(predicate)))
}

/// Returns whether every value of `producer` is `true`.
pub fn and<'a, R>(producer: Producer<'a, bool, R>) -> bool
where
    R: 'a,
{
    all(producer, |b| *b)
}

/// Returns whether any value of `producer` is `true`.
pub fn or<'a, R>(producer: Producer<'a, bool, R>) -> bool
where
    R: 'a,
{
    any(producer, |b| *b)
}

/// Adds up the values of `producer`.
///
/// This combines the stream for any type with a `Sum` impl. Other ways of
/// combining values, like joining strings, are a `fold()` with the combining
/// function and its identity:
///
/// ```rust
/// use sluice::{combinators, each};
///
/// assert_eq!(combinators::sum(each([1, 2, 3])), 6);
/// let joined = combinators::fold(
///     each(["ab", "c"]),
///     |acc: String, s: &str| acc + s,
///     String::new(),
///     |acc| acc,
/// );
/// assert_eq!(joined, "abc");
/// ```
#[doc(alias = "mconcat")]
pub fn sum<'a, T, R>(producer: Producer<'a, T, R>) -> T
where
    T: Sum + 'a,
    R: 'a,
{
    producer.into_iter().sum()
}

/// Multiplies together the values of `producer`.
pub fn product<'a, T, R>(producer: Producer<'a, T, R>) -> T
where
    T: Product + 'a,
    R: 'a,
{
    producer.into_iter().product()
}

/// Returns the greatest value of `producer`, or `None` if it is empty.
///
/// ```rust
/// use sluice::{combinators, each};
///
/// assert_eq!(combinators::maximum(each([3, 9, 2])), Some(9));
/// assert_eq!(combinators::maximum(each(Vec::<i32>::new())), None);
/// ```
pub fn maximum<'a, T, R>(producer: Producer<'a, T, R>) -> Option<T>
where
    T: Ord + 'a,
    R: 'a,
{
    producer.into_iter().max()
}

/// Returns the least value of `producer`, or `None` if it is empty.
pub fn minimum<'a, T, R>(producer: Producer<'a, T, R>) -> Option<T>
where
    T: Ord + 'a,
    R: 'a,
{
    producer.into_iter().min()
}

/// Returns whether `producer` yields a value equal to `x`.
pub fn elem<'a, T, R>(producer: Producer<'a, T, R>, x: T) -> bool
where
    T: PartialEq + 'a,
    R: 'a,
{
    any(producer, move |t| *t == x)
}

/// Returns whether `producer` never yields a value equal to `x`.
pub fn not_elem<'a, T, R>(producer: Producer<'a, T, R>, x: T) -> bool
where
    T: PartialEq + 'a,
    R: 'a,
{
    all(producer, move |t| *t != x)
}

/// Returns the first value of `producer` for which `predicate` holds.
pub fn find<'a, T, R, F>(producer: Producer<'a, T, R>, predicate: F) -> Option<T>
where
    T: 'a,
    R: 'a,
    F: Fn(&T) -> bool + 'a,
{
    head(producer.compose(filter(predicate)))
}

/// Returns the position of the first value of `producer` for which
/// `predicate` holds.
pub fn find_index<'a, T, R, F>(
    producer: Producer<'a, T, R>,
    predicate: F,
) -> Option<usize>
where
    T: 'a,
    R: 'a,
    F: Fn(&T) -> bool + 'a,
{
    head(producer.compose(find_indices(predicate)))
}
