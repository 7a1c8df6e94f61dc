use crate::proxy::Producer;
use crate::proxy::Proxy;
use crate::suspend::Suspend::{Await, Return, Yield};

/// An iterator over the values yielded by a `Producer`.
///
/// Created by `Producer::into_iter()`. Once the iterator is exhausted, the
/// producer's result can be recovered with `into_return()`.
///
/// ```rust
/// use sluice::{Producer, each};
///
/// let p: Producer<i32, &str> = each([1, 2, 3]).map_return(|()| "done");
/// let mut iter = p.into_iter();
/// let evens = iter.by_ref().filter(|x| x % 2 == 0).collect::<Vec<_>>();
/// assert_eq!(evens, [2]);
/// assert_eq!(iter.into_return(), Some("done"));
/// ```
pub struct ProducerIter<'a, T, R> {
    producer: Option<Producer<'a, T, R>>,
    result: Option<R>,
}

impl<'a, T, R> ProducerIter<'a, T, R> {
    /// Returns the result of the producer if it has finished, or `None` if
    /// there are still values left to take.
    pub fn into_return(self) -> Option<R> {
        self.result
    }
}

impl<'a, T, R> Iterator for ProducerIter<'a, T, R>
where
    T: 'a,
    R: 'a,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.producer.take()?.resume() {
            Await(closed, _) => closed.absurd(),
            Yield(t, k) => {
                self.producer = Some(Proxy::delay(move || k(())));
                Some(t)
            }
            Return(r) => {
                self.result = Some(r);
                None
            }
        }
    }
}

impl<'a, T, R> IntoIterator for Producer<'a, T, R>
where
    T: 'a,
    R: 'a,
{
    type Item = T;
    type IntoIter = ProducerIter<'a, T, R>;

    fn into_iter(self) -> Self::IntoIter {
        ProducerIter {
            producer: Some(self),
            result: None,
        }
    }
}
