//! The `sluice` crate provides bidirectional, composable streams in the style
//! of the Haskell `pipes` library.
//!
//! The central type is the `Proxy`, a suspendable computation with two ports.
//! On its upstream port a proxy can *await*: send a request and wait for a
//! reply. On its downstream port it can *yield*: send a value and wait for the
//! downstream reply. Eventually it may *return* a final result.
//!
//! ```text
//!                Upstream | Downstream
//!                    +---------+
//!                    |         |
//!   Upstream Output <==       <== Downstream Input
//!         (UO)       |         |      (DI)
//!   Upstream Input  ==>       ==> Downstream Output
//!         (UI)       |    |    |      (DO)
//!                    +----|----+
//!                         v
//!                     Result (R)
//! ```
//!
//! Running a proxy one step with `resume()` gives back a `Suspend`:
//!
//! ```rust
//! # use sluice::{Continuation, Proxy};
//! pub enum Suspend<'a, UO, UI, DI, DO, R> {
//!     Await(UO, Continuation<'a, UI, Proxy<'a, UO, UI, DI, DO, R>>),
//!     Yield(DO, Continuation<'a, DI, Proxy<'a, UO, UI, DI, DO, R>>),
//!     Return(R),
//! }
//! ```
//!
//! The `Await`, `Yield` and `Return` variants are imported into the crate's
//! root namespace, so they can be used without the `Suspend::` prefix.
//!
//! Every operation takes the proxy by value. A proxy is a single run of a
//! computation, so there is no way to resume the same step twice.
//!
//! # Shapes
//!
//! Most proxies leave some of their ports unused. Unused outputs are typed
//! `Closed`, which has no values, and unused inputs are `()`. The common
//! shapes have aliases:
//!
//!   * `Producer<B, R>` only yields `B`s.
//!   * `Consumer<A, R>` only awaits `A`s.
//!   * `Pipe<A, B, R>` awaits `A`s and yields `B`s.
//!   * `Effect<R>` does neither, so it can be run with `run_effect()`.
//!   * `Client<Q, S, R>` and `Server<Q, S, R>` send requests upstream and
//!     answer requests from downstream, respectively.
//!
//! # Examples
//!
//! ## A pipeline
//!
//! Producers, pipes and consumers are connected with `compose()`, which is
//! written `>->` in `pipes`. The consumer drives: whenever it awaits, the
//! stage above it runs until it yields.
//!
//! ```rust
//! use sluice::{Producer, combinators, each};
//!
//! let squares_of_odds: Producer<i32, ()> = each(1..)
//!     .compose(combinators::filter(|x: &i32| x % 2 == 1))
//!     .compose(combinators::map(|x: i32| x * x))
//!     .compose(combinators::take(4));
//! assert_eq!(combinators::to_vec(squares_of_odds), [1, 9, 25, 49]);
//! ```
//!
//! ## Loops
//!
//! `for_()` replaces every yield of a proxy with another proxy, so it is the
//! way to loop over a stream:
//!
//! ```rust
//! use core::cell::RefCell;
//! use sluice::{Effect, each, for_, pure, run_effect};
//!
//! let lines = RefCell::new(Vec::new());
//! let effect: Effect<()> = for_(each(["to", "be"]), |word| {
//!     lines.borrow_mut().push(word.to_uppercase());
//!     pure(())
//! });
//! run_effect(effect);
//! assert_eq!(*lines.borrow(), ["TO", "BE"]);
//! ```
//!
//! ## Writing a proxy
//!
//! Proxies are written by sequencing `await_()`, `yield_()` and other proxies
//! with `and_then()`. Recursion through `and_then()` is how a proxy loops:
//!
//! ```rust
//! use sluice::{Pipe, Producer, await_, combinators, each, yield_};
//!
//! fn pairwise_sums<'a>() -> Pipe<'a, i32, i32, ()> {
//!     await_().and_then(|a: i32| {
//!         await_().and_then(move |b: i32| {
//!             yield_(a + b).and_then(|()| pairwise_sums())
//!         })
//!     })
//! }
//!
//! let p: Producer<i32, ()> = each([1, 2, 3, 4, 5]).compose(pairwise_sums());
//! assert_eq!(combinators::to_vec(p), [3, 7]);
//! ```
//!
//! The last element has no partner, so `pairwise_sums()` is still awaiting
//! when `each()` returns, and the producer's `()` becomes the result.
//!
//! ## Requests and responses
//!
//! The values passed upstream need not be `()`. A `Server` answers each
//! request it receives with a response, and a `Client` sends requests and
//! reads the responses:
//!
//! ```rust
//! use sluice::{Client, Effect, Server, pull_compose, request, respond, run_effect};
//!
//! fn doubler<'a>(q: i32) -> Server<'a, i32, i32, i32> {
//!     respond(q * 2).and_then(doubler)
//! }
//!
//! fn ask<'a>(_: ()) -> Client<'a, i32, i32, i32> {
//!     request(3).and_then(|a: i32| request(a).map_return(move |b: i32| a + b))
//! }
//!
//! let session = pull_compose(doubler, ask);
//! let effect: Effect<i32> = session(());
//! assert_eq!(run_effect(effect), 18);
//! ```
//!
//! # Categories
//!
//! Beyond `compose()` and `and_then()`, there are four ways to connect
//! proxies, each forming a category with an identity:
//!
//!   * `respond_bind()` and `respond_compose()`, with identity `respond()`,
//!     substitute a proxy for every yield.
//!   * `request_bind()` and `request_compose()`, with identity `request()`,
//!     substitute a proxy for every await.
//!   * `push_bind()` and `push_compose()`, with identity `push()`, connect two
//!     proxies starting from the upstream side.
//!   * `pull_bind()` and `pull_compose()`, with identity `pull()`, connect two
//!     proxies starting from the downstream side. `compose()` is `pull_bind()`
//!     specialised to unit requests.
//!
//! `reflect()` swaps the upstream and downstream ports of a proxy, which turns
//! each category into its mirror image.
//!
//! # Stack use
//!
//! Every handoff of control between two proxies is recorded as a deferred
//! step, and `resume()` runs deferred steps in a loop. A pipeline of a fixed
//! shape therefore runs in constant stack space however many values flow
//! through it. Binds that have not returned yet are kept in a flat queue, so
//! a chain of `and_then()` calls built up in a loop runs, and drops, in
//! constant stack space as well.
//!
//! # Logging
//!
//! `run_effect()` and the folds emit `tracing` events at the `trace` level.
//! Nothing is logged unless the application installs a subscriber.

// Streams only need an allocator for their continuations.
//
// Tests for integrations with standard library APIs should be put in the
// integration tests in the `tests/` folder.
#![no_std]

extern crate alloc;

mod bind;
mod closed;
pub mod combinators;
mod compose;
mod each;
mod iter;
mod proxy;
mod proxy_assertions;
mod pull;
mod push;
mod reflect;
mod request;
mod respond;
mod run;
mod suspend;

pub use closed::Closed;
pub use closed::closed;
pub use compose::compose;
pub use compose::feed;
pub use compose::kleisli_compose;
pub use each::each;
pub use iter::ProducerIter;
pub use proxy::Client;
pub use proxy::Consumer;
pub use proxy::Effect;
pub use proxy::Pipe;
pub use proxy::Producer;
pub use proxy::Proxy;
pub use proxy::Server;
pub use proxy::delay;
pub use proxy::pure;
pub use proxy_assertions::ProxyAssertions;
pub use pull::cat;
pub use pull::pull;
pub use pull::pull_compose;
pub use push::push;
pub use push::push_compose;
pub use request::await_;
pub use request::request;
pub use request::request_compose;
pub use respond::for_;
pub use respond::respond;
pub use respond::respond_compose;
pub use respond::yield_;
pub use run::next;
pub use run::run_effect;
pub use suspend::Continuation;
pub use suspend::Suspend;

/// `Await`, `Yield` and `Return` are imported into the crate root namespace
/// because they are used so often.
pub use Suspend::{Await, Return, Yield};

#[cfg(test)]
mod test;
