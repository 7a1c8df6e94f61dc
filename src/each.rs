use crate::proxy::Proxy;

/// Converts anything iterable into a proxy that yields each item in order,
/// then returns `()`.
///
/// The iterator is created the first time the proxy is resumed, and each item
/// is pulled out of it only when downstream asks for it. This makes `each()`
/// safe to use on infinite or expensive iterators.
///
/// ```rust
/// use core::cell::Cell;
/// use sluice::{Producer, ProxyAssertions, each};
///
/// let pulled = Cell::new(0);
/// let p: Producer<i32, ()> = each((1..).inspect(|_| pulled.set(pulled.get() + 1)));
/// assert_eq!(pulled.get(), 0);
/// let p = p.assert_yields(1, ()).assert_yields(2, ());
/// assert_eq!(pulled.get(), 2);
/// drop(p);
/// ```
pub fn each<'a, UO, UI, I>(items: I) -> Proxy<'a, UO, UI, (), I::Item, ()>
where
    UO: 'a,
    UI: 'a,
    I: IntoIterator + 'a,
    I::Item: 'a,
    I::IntoIter: 'a,
{
    Proxy::delay(move || each_from(items.into_iter()))
}

fn each_from<'a, UO, UI, I>(mut iter: I) -> Proxy<'a, UO, UI, (), I::Item, ()>
where
    UO: 'a,
    UI: 'a,
    I: Iterator + 'a,
    I::Item: 'a,
{
    match iter.next() {
        Some(item) => Proxy::yielding(item, move |()| {
            Proxy::delay(move || each_from(iter))
        }),
        None => Proxy::pure(()),
    }
}
