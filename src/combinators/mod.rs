//! A prelude of ready-made proxies, in four groups:
//!
//!   * Pipes that transform the stream: `map`, `filter`, `take`, `scan`, ...
//!   * Folds that drain a `Producer` to a single value: `fold`, `to_vec`,
//!     `head`, `sum`, ...
//!   * Zips that walk two producers in lockstep: `zip`, `zip_with`.
//!   * Arrow-style routing of `Either` values: `left`, `right`, `plus`, and
//!     the seedless scans `scan1` and `scan1i`.
//!
//! Everything here is written in terms of the public API of the crate, so
//! these double as worked examples of how to build new combinators.
//!
//! ```rust
//! use sluice::{Producer, combinators, each};
//!
//! let evens: Producer<i32, ()> = each(1..)
//!     .compose(combinators::filter(|x: &i32| x % 2 == 0))
//!     .compose(combinators::take(3));
//! assert_eq!(combinators::to_vec(evens), [2, 4, 6]);
//! ```

mod arrow;
mod folds;
mod pipes;
mod zip;

pub use arrow::arr;
pub use arrow::left;
pub use arrow::plus;
pub use arrow::right;
pub use arrow::scan1;
pub use arrow::scan1i;
pub use folds::all;
pub use folds::and;
pub use folds::any;
pub use folds::elem;
pub use folds::find;
pub use folds::find_index;
pub use folds::fold;
pub use folds::fold_ret;
pub use folds::head;
pub use folds::is_empty;
pub use folds::last;
pub use folds::length;
pub use folds::maximum;
pub use folds::minimum;
pub use folds::not_elem;
pub use folds::or;
pub use folds::product;
pub use folds::sum;
pub use folds::to_vec;
pub use pipes::chain;
pub use pipes::concat;
pub use pipes::discard;
pub use pipes::drain;
pub use pipes::drop;
pub use pipes::drop_while;
pub use pipes::elem_indices;
pub use pipes::filter;
pub use pipes::find_indices;
pub use pipes::map;
pub use pipes::map_many;
pub use pipes::repeat;
pub use pipes::replicate;
pub use pipes::scan;
pub use pipes::take;
pub use pipes::take_while;
pub use zip::zip;
pub use zip::zip_with;
