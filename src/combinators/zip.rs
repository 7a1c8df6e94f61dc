use alloc::rc::Rc;

use either::Either::{Left, Right};

use crate::proxy::Producer;
use crate::proxy::delay;
use crate::proxy::pure;
use crate::respond::yield_;
use crate::run::next;

/// Combines two producers element by element with `f`.
///
/// Takes one value from `p`, then one from `q`, and yields `f` of the pair.
/// Returns the result of whichever producer finishes first, and drops the
/// other one. If `p` finishes first, `q` is not advanced at all for that
/// round.
///
/// ```rust
/// use sluice::{Producer, combinators, each};
///
/// let sums: Producer<i32, ()> =
///     combinators::zip_with(each([1, 2, 3]), each([10, 20]), |a: i32, b: i32| {
///         a + b
///     });
/// assert_eq!(combinators::to_vec(sums), [11, 22]);
/// ```
pub fn zip_with<'a, A, B, C, R, F>(
    p: Producer<'a, A, R>,
    q: Producer<'a, B, R>,
    f: F,
) -> Producer<'a, C, R>
where
    A: 'a,
    B: 'a,
    C: 'a,
    R: 'a,
    F: Fn(A, B) -> C + 'a,
{
    zip_with_rc(p, q, Rc::new(f))
}

fn zip_with_rc<'a, A, B, C, R, F>(
    p: Producer<'a, A, R>,
    q: Producer<'a, B, R>,
    f: Rc<F>,
) -> Producer<'a, C, R>
where
    A: 'a,
    B: 'a,
    C: 'a,
    R: 'a,
    F: Fn(A, B) -> C + 'a,
{
    delay(move || match next(p) {
        Left(r) => pure(r),
        Right((a, p)) => match next(q) {
            Left(r) => pure(r),
            Right((b, q)) => {
                yield_(f(a, b)).and_then(move |()| zip_with_rc(p, q, f))
            }
        },
    })
}

/// Pairs up the values of two producers. See `zip_with()`.
pub fn zip<'a, A, B, R>(
    p: Producer<'a, A, R>,
    q: Producer<'a, B, R>,
) -> Producer<'a, (A, B), R>
where
    A: 'a,
    B: 'a,
    R: 'a,
{
    zip_with(p, q, |a, b| (a, b))
}
