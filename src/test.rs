use alloc::boxed::Box;
use alloc::format;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::*;

#[test]
fn pure_returns_immediately() {
    let p: Effect<i32> = pure(3);
    p.assert_returns(3);
}

#[test]
fn yield_then_return() {
    let p: Producer<i32, ()> = yield_(1);
    p.assert_yields(1, ()).assert_returns(());
}

#[test]
fn await_returns_reply() {
    let p: Consumer<&str, &str> = await_();
    p.assert_awaits((), "hi").assert_returns("hi");
}

#[test]
fn respond_returns_downstream_reply() {
    let p: Server<i32, &str, i32> = respond("x");
    p.assert_yields("x", 7).assert_returns(7);
}

#[test]
fn request_returns_upstream_reply() {
    let p: Client<char, u8, u8> = request('q');
    p.assert_awaits('q', 9).assert_returns(9);
}

#[test]
fn map_return_after_yields() {
    let p: Producer<i32, usize> = each([1, 2]).map_return(|()| 2);
    p.map_return(|n| n * 10)
        .assert_yields(1, ())
        .assert_yields(2, ())
        .assert_returns(20);
}

#[test]
fn and_then_sequences_yields() {
    let p: Producer<i32, i32> = yield_(1)
        .and_then(|()| yield_(2))
        .and_then(|()| pure(3));
    p.assert_yields(1, ()).assert_yields(2, ()).assert_returns(3);
}

#[test]
fn and_then_does_not_call_continuation_early() {
    let called = Cell::new(false);
    let p: Producer<i32, ()> = yield_(1).and_then(|()| {
        called.set(true);
        yield_(2)
    });
    let p = p.assert_yields(1, ());
    assert!(!called.get());
    p.assert_yields(2, ()).assert_returns(());
    assert!(called.get());
}

#[test]
fn flatten_runs_outer_then_inner() {
    let inner: Producer<i32, &str> = yield_(2).map_return(|()| "inner");
    let outer: Producer<i32, Producer<i32, &str>> =
        yield_(1).map_return(move |()| inner);
    outer
        .flatten()
        .assert_yields(1, ())
        .assert_yields(2, ())
        .assert_returns("inner");
}

#[test]
fn apply_runs_function_proxy_first() {
    let pf = yield_("f").map_return(|()| |x: i32| x + 1);
    let px: Producer<&str, i32> = yield_("x").map_return(|()| 41);
    let p: Producer<&str, i32> = px.apply(pf);
    p.assert_yields("f", ())
        .assert_yields("x", ())
        .assert_returns(42);
}

#[test]
fn delay_is_lazy() {
    let built = Cell::new(0);
    let p: Producer<i32, ()> = delay(|| {
        built.set(built.get() + 1);
        yield_(1)
    });
    assert_eq!(built.get(), 0);
    p.assert_yields(1, ()).assert_returns(());
    assert_eq!(built.get(), 1);
}

#[test]
fn reflect_swaps_await_and_yield() {
    let p: Pipe<i32, &str, i32> =
        await_().and_then(|x: i32| yield_("got").map_return(move |()| x));
    p.reflect()
        .assert_yields((), 5)
        .assert_awaits("got", ())
        .assert_returns(5);
}

#[test]
fn reflect_twice_is_identity() {
    let p: Pipe<i32, i32, ()> = combinators::take(1);
    p.reflect()
        .reflect()
        .assert_awaits((), 4)
        .assert_yields(4, ())
        .assert_returns(());
}

#[test]
fn respond_bind_passes_reply_back() {
    let p: Server<i32, i32, i32> = respond(1).and_then(respond);
    let e: Effect<i32> = p.respond_bind(|x| pure(x * 10));
    assert_eq!(run_effect(e), 100);
}

#[test]
fn respond_bind_leaves_awaits_alone() {
    let p: Pipe<i32, i32, ()> = combinators::take(2);
    p.respond_bind(|x: i32| yield_(x).and_then(move |()| yield_(-x)))
        .assert_awaits((), 3)
        .assert_yields(3, ())
        .assert_yields(-3, ())
        .assert_awaits((), 4)
        .assert_yields(4, ())
        .assert_yields(-4, ())
        .assert_returns(());
}

#[test]
fn request_bind_answers_awaits() {
    let c: Client<i32, i32, i32> = request(1).and_then(request);
    let e: Effect<i32> = c.request_bind(|q| pure(q + 100));
    assert_eq!(run_effect(e), 201);
}

#[test]
fn request_bind_leaves_yields_alone() {
    let p: Pipe<i32, i32, ()> = combinators::take(2);
    let answers = Cell::new(0);
    let p: Producer<i32, ()> = p.request_bind(|()| {
        answers.set(answers.get() + 1);
        pure(answers.get())
    });
    p.assert_yields(1, ()).assert_yields(2, ()).assert_returns(());
}

fn echo_server<'a, R>(q: i32) -> Server<'a, i32, i32, R>
where
    R: 'a,
{
    respond(q).and_then(echo_server)
}

#[test]
fn pull_bind_runs_client_first() {
    let built = Cell::new(0);
    let client: Client<i32, i32, i32> = request(5)
        .and_then(|a: i32| request(a + 1).map_return(move |b: i32| a * b));
    let e: Effect<i32> = client.pull_bind(|q| {
        built.set(built.get() + 1);
        echo_server(q)
    });
    assert_eq!(built.get(), 0);
    assert_eq!(run_effect(e), 30);
    assert_eq!(built.get(), 1);
}

#[test]
fn push_bind_runs_server_first() {
    let p: Proxy<Closed, (), i32, &str, i32> = respond("a")
        .and_then(|n: i32| respond("b").map_return(move |m: i32| n + m));
    let e: Effect<i32> = p.push_bind(|first: &str| {
        assert_eq!(first, "a");
        request(1).and_then(|second: &str| {
            assert_eq!(second, "b");
            request(2).map_return(|_: &str| -1)
        })
    });
    assert_eq!(run_effect(e), 3);
}

#[test]
fn push_forwards_both_ways() {
    let p: Proxy<i32, &str, i32, &str, ()> = push("down");
    p.assert_yields("down", 1)
        .assert_awaits(1, "again")
        .assert_yields("again", 2)
        .assert_awaits(2, "more");
}

#[test]
fn pull_forwards_both_ways() {
    let p: Proxy<i32, &str, i32, &str, ()> = pull(1);
    p.assert_awaits(1, "up")
        .assert_yields("up", 2)
        .assert_awaits(2, "again");
}

#[test]
fn compose_returns_downstream_result() {
    let p: Producer<i32, &str> =
        each([1, 2, 3]).map_return(|()| "upstream");
    let c: Consumer<i32, &str> =
        await_().and_then(|_: i32| pure("downstream"));
    assert_eq!(run_effect(p.compose(c)), "downstream");
}

#[test]
fn compose_returns_upstream_result() {
    let p: Producer<i32, &str> = each([1]).map_return(|()| "upstream");
    let c: Consumer<i32, &str> = combinators::drain();
    assert_eq!(run_effect(p.compose(c)), "upstream");
}

#[test]
fn feed_runs_source_per_await() {
    let runs = Cell::new(0);
    let c: Consumer<i32, Vec<i32>> = await_().and_then(|a: i32| {
        await_().map_return(move |b: i32| vec![a, b])
    });
    let e: Effect<Vec<i32>> = c.fed_by(|| {
        runs.set(runs.get() + 1);
        pure(runs.get())
    });
    assert_eq!(run_effect(e), vec![1, 2]);
    assert_eq!(runs.get(), 2);
}

#[test]
fn feed_passes_source_yields_through() {
    let c: Pipe<i32, &str, i32> = await_();
    let p: Producer<&str, i32> = feed(|| yield_("tick").map_return(|()| 8), c);
    p.assert_yields("tick", ()).assert_returns(8);
}

#[test]
fn kleisli_compose_sequences() {
    fn f<'a>(x: i32) -> Producer<'a, i32, i32> {
        yield_(x).map_return(move |()| x + 1)
    }
    fn g<'a>(x: i32) -> Producer<'a, i32, i32> {
        yield_(x * 10).map_return(move |()| x)
    }
    kleisli_compose(f, g)(1)
        .assert_yields(1, ())
        .assert_yields(20, ())
        .assert_returns(2);
}

#[test]
fn contramap_input_converts_replies() {
    let p: Consumer<usize, usize> = await_();
    p.contramap_input(|s: &str| s.len())
        .assert_awaits((), "four")
        .assert_returns(4);
}

#[test]
fn map_yield_converts_yields() {
    let p: Producer<i32, ()> = each([1, 2]);
    p.map_yield(|x| x * 3)
        .assert_yields(3, ())
        .assert_yields(6, ())
        .assert_returns(());
}

#[test]
fn next_splits_head_from_rest() {
    let p: Producer<i32, &str> = each([4, 5]).map_return(|()| "end");
    let (a, rest) = next(p).right().unwrap();
    assert_eq!(a, 4);
    let (b, rest) = next(rest).right().unwrap();
    assert_eq!(b, 5);
    assert_eq!(next(rest).left(), Some("end"));
}

#[test]
fn producer_iter_recovers_result() {
    let p: Producer<i32, &str> = each([1, 2]).map_return(|()| "end");
    let mut iter = p.into_iter();
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.into_return(), Some("end"));
}

#[test]
fn producer_iter_unfinished_has_no_result() {
    let p: Producer<i32, &str> = each([1, 2]).map_return(|()| "end");
    let mut iter = p.into_iter();
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.into_return(), None);
}

#[test]
fn suspend_debug_shows_payload() {
    let p: Producer<i32, ()> = yield_(7);
    assert_eq!(format!("{:?}", p.resume()), "Yield(7)");
    let p: Consumer<i32, ()> = pure(());
    assert_eq!(format!("{:?}", p.resume()), "Return(())");
}

#[test]
fn suspend_accessors() {
    let p: Consumer<i32, i32> = await_();
    let ((), k) = p.resume().into_await().unwrap();
    assert_eq!(k(3).resume().into_return(), Some(3));
    let q: Producer<i32, ()> = yield_(1);
    assert!(q.resume().into_await().is_none());
    let r: Producer<i32, ()> = yield_(1);
    let (y, _) = r.resume().into_yield().unwrap();
    assert_eq!(y, 1);
}

#[test]
fn suspend_converts_into_proxy() {
    let k: Continuation<(), Producer<i32, ()>> = Box::new(|()| pure(()));
    let p: Producer<i32, ()> = Yield(1, k).into();
    p.assert_yields(1, ()).assert_returns(());
}

struct DropCounter<'a>(&'a Cell<usize>);

impl Drop for DropCounter<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn abandoned_upstream_is_dropped() {
    let dropped = Cell::new(0);
    let guard = DropCounter(&dropped);
    let source: Producer<i32, ()> = each(1..).map_return(move |()| drop(guard));
    let p = source.compose(combinators::take(2));
    assert_eq!(combinators::to_vec(p), vec![1, 2]);
    assert_eq!(dropped.get(), 1);
}

#[test]
fn abandoned_proxy_drops_captures() {
    let dropped = Cell::new(0);
    let guard = DropCounter(&dropped);
    let p: Producer<i32, ()> = yield_(1).and_then(move |()| {
        let _guard = &guard;
        yield_(2)
    });
    let rest = p.assert_yields(1, ());
    assert_eq!(dropped.get(), 0);
    core::mem::drop(rest);
    assert_eq!(dropped.get(), 1);
}

#[test]
fn abandoned_bind_chain_drops_every_stage() {
    let dropped = Cell::new(0);
    let mut p: Producer<i32, ()> = yield_(0);
    for x in 1..=3 {
        let guard = DropCounter(&dropped);
        p = p.and_then(move |()| {
            let _guard = &guard;
            yield_(x)
        });
    }
    let rest = p.assert_yields(0, ()).assert_yields(1, ());
    assert_eq!(dropped.get(), 1);
    core::mem::drop(rest);
    assert_eq!(dropped.get(), 3);
}

#[test]
fn left_nested_binds_run_in_order() {
    let mut p: Pipe<i32, i32, i32> = pure(0);
    for _ in 0..3 {
        p = p.and_then(|total: i32| {
            await_().and_then(move |x: i32| {
                yield_(total + x).map_return(move |()| total + x)
            })
        });
    }
    p.assert_awaits((), 1)
        .assert_yields(1, ())
        .assert_awaits((), 2)
        .assert_yields(3, ())
        .assert_awaits((), 3)
        .assert_yields(6, ())
        .assert_returns(6);
}

#[test]
fn map_return_after_bind_sees_final_result() {
    let p: Producer<i32, i32> = yield_(1)
        .and_then(|()| yield_(2))
        .map_return(|()| 10)
        .map_return(|n| n + 1);
    p.assert_yields(1, ())
        .assert_yields(2, ())
        .assert_returns(11);
}

#[test]
#[should_panic(expected = "expected Yield(1), got Return(())")]
fn assert_yields_reports_return() {
    let p: Producer<i32, ()> = pure(());
    p.assert_yields(1, ());
}

#[test]
#[should_panic(expected = "expected Await(()), got Yield(1)")]
fn assert_awaits_reports_yield() {
    let p: Pipe<(), i32, ()> = yield_(1);
    p.assert_awaits((), ());
}
