//! Binds on proxies that have not returned yet.
//!
//! `p.and_then(f).and_then(g)` is kept as one flat queue of stages rather than
//! a closure nested inside a closure. Every stage but the last has its result
//! type erased: it stores its result in a `Slot` shared with the stage after
//! it, and returns `()`. The last stage keeps the real result type, so when it
//! runs, the proxy it builds replaces the whole bind.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use core::cell::Cell;

use crate::proxy::Proxy;
use crate::proxy::Repr;
use crate::suspend::Suspend::{Await, Return, Yield};

type Stage<'a, UO, UI, DI, DO, R> = Box<dyn FnOnce() -> Proxy<'a, UO, UI, DI, DO, R> + 'a>;

/// One end of a single-use cell that hands a stage's result to the next stage.
pub(crate) struct Slot<T>(Rc<Cell<Option<T>>>);

impl<T> Slot<T> {
    pub(crate) fn pair() -> (Slot<T>, Slot<T>) {
        let cell = Rc::new(Cell::new(None));
        (Slot(Rc::clone(&cell)), Slot(cell))
    }

    fn put(&self, t: T) {
        self.0.set(Some(t));
    }

    pub(crate) fn take(&self) -> T {
        match self.0.take() {
            Some(t) => t,
            // A stage only runs after the stage before it returned.
            None => unreachable!(),
        }
    }
}

pub(crate) struct Bind<'a, UO, UI, DI, DO, R> {
    head: Proxy<'a, UO, UI, DI, DO, ()>,
    middle: VecDeque<Stage<'a, UO, UI, DI, DO, ()>>,
    last: Stage<'a, UO, UI, DI, DO, R>,
}

impl<'a, UO, UI, DI, DO, R> Bind<'a, UO, UI, DI, DO, R>
where
    UO: 'a,
    UI: 'a,
    DI: 'a,
    DO: 'a,
    R: 'a,
{
    /// Starts a bind whose first stage is `proxy`, which must not have
    /// returned yet.
    pub(crate) fn start<X, F>(proxy: Proxy<'a, UO, UI, DI, DO, X>, f: F) -> Self
    where
        X: 'a,
        F: FnOnce(X) -> Proxy<'a, UO, UI, DI, DO, R> + 'a,
    {
        let (output, input) = Slot::pair();
        Bind {
            head: proxy.store_into(output),
            middle: VecDeque::new(),
            last: Box::new(move || f(input.take())),
        }
    }

    pub(crate) fn into_proxy(self) -> Proxy<'a, UO, UI, DI, DO, R> {
        Proxy {
            repr: Repr::Bind(Box::new(self)),
        }
    }

    /// Appends `f` as a new last stage.
    pub(crate) fn extend<R2, F>(
        self: Box<Self>,
        f: F,
    ) -> Proxy<'a, UO, UI, DI, DO, R2>
    where
        R2: 'a,
        F: FnOnce(R) -> Proxy<'a, UO, UI, DI, DO, R2> + 'a,
    {
        let Bind {
            head,
            mut middle,
            last,
        } = *self;
        let (output, input) = Slot::pair();
        middle.push_back(Box::new(move || last().store_into(output)));
        Bind {
            head,
            middle,
            last: Box::new(move || f(input.take())),
        }
        .into_proxy()
    }

    /// Makes the last stage store its result instead of returning it.
    pub(crate) fn store_into(
        self: Box<Self>,
        output: Slot<R>,
    ) -> Proxy<'a, UO, UI, DI, DO, ()> {
        let Bind { head, middle, last } = *self;
        Bind {
            head,
            middle,
            last: Box::new(move || last().store_into(output)),
        }
        .into_proxy()
    }

    /// Advances the bind by one step of its current stage.
    pub(crate) fn step(self: Box<Self>) -> Proxy<'a, UO, UI, DI, DO, R> {
        let Bind {
            head,
            mut middle,
            last,
        } = *self;
        match head.repr {
            Repr::Ready(Return(())) => match middle.pop_front() {
                Some(stage) => Bind {
                    head: stage(),
                    middle,
                    last,
                }
                .into_proxy(),
                None => last(),
            },
            Repr::Ready(Await(uo, k)) => Proxy::awaiting(uo, move |ui| {
                Bind {
                    head: k(ui),
                    middle,
                    last,
                }
                .into_proxy()
            }),
            Repr::Ready(Yield(y, k)) => Proxy::yielding(y, move |di| {
                Bind {
                    head: k(di),
                    middle,
                    last,
                }
                .into_proxy()
            }),
            Repr::Defer(thunk) => Bind {
                head: thunk(),
                middle,
                last,
            }
            .into_proxy(),
            Repr::Bind(inner) => {
                let Bind {
                    head,
                    middle: mut inner_middle,
                    last: inner_last,
                } = *inner;
                inner_middle.push_back(inner_last);
                // Move the shorter queue onto the longer one.
                if inner_middle.len() <= middle.len() {
                    while let Some(stage) = inner_middle.pop_back() {
                        middle.push_front(stage);
                    }
                } else {
                    inner_middle.append(&mut middle);
                    middle = inner_middle;
                }
                Bind { head, middle, last }.into_proxy()
            }
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
    /// Runs exactly like this proxy, but puts the result in `output` and
    /// returns `()`.
    pub(crate) fn store_into(
        self,
        output: Slot<R>,
    ) -> Proxy<'a, UO, UI, DI, DO, ()> {
        match self.repr {
            Repr::Ready(Return(r)) => {
                output.put(r);
                Proxy::pure(())
            }
            Repr::Ready(Await(uo, k)) => {
                Proxy::awaiting(uo, move |ui| k(ui).store_into(output))
            }
            Repr::Ready(Yield(y, k)) => {
                Proxy::yielding(y, move |di| k(di).store_into(output))
            }
            Repr::Defer(thunk) => {
                Proxy::delay(move || thunk().store_into(output))
            }
            Repr::Bind(bind) => bind.store_into(output),
        }
    }
}
