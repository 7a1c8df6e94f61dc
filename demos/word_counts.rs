//! Counts words in a text and prints the most frequent ones.
//!
//! Lines are split into words by a `map_many()` stage, normalised by `map()`
//! and `filter()`, and counted by a fold. The ranking is itself streamed
//! through `take()` into a printing loop built with `for_()`.
//!
//! Run with: `cargo run --example word_counts`

use std::collections::BTreeMap;

use sluice::Effect;
use sluice::Producer;
use sluice::combinators::filter;
use sluice::combinators::fold;
use sluice::combinators::map;
use sluice::combinators::map_many;
use sluice::combinators::take;
use sluice::each;
use sluice::for_;
use sluice::pure;
use sluice::run_effect;

const TEXT: &str = "\
The quick brown fox jumps over the lazy dog.
The dog sleeps; the fox runs.
A fox, a dog, and the end.
";

fn words<'a>(text: &'a str) -> Producer<'a, String, ()> {
    each(text.lines())
        .compose(map_many(|line: &'a str| line.split_whitespace()))
        .compose(map(|word: &str| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        }))
        .compose(filter(|word: &String| !word.is_empty()))
}

fn count(words: Producer<String, ()>) -> BTreeMap<String, usize> {
    fold(
        words,
        |mut counts: BTreeMap<String, usize>, word: String| {
            *counts.entry(word).or_default() += 1;
            counts
        },
        BTreeMap::new(),
        |counts| counts,
    )
}

/// Words by descending count, ties broken alphabetically.
fn ranking(counts: BTreeMap<String, usize>) -> Vec<(String, usize)> {
    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_by(|(a, m), (b, n)| n.cmp(m).then_with(|| a.cmp(b)));
    ranked
}

fn main() {
    let ranked = ranking(count(words(TEXT)));
    let top: Producer<(String, usize), ()> = each(ranked).compose(take(4));
    let report: Effect<()> = for_(top, |(word, n)| {
        println!("{n:>3} {word}");
        pure(())
    });
    run_effect(report);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_normalised() {
        let found: Vec<String> = words("Hello, world! -- hello").into_iter().collect();
        assert_eq!(found, ["hello", "world", "hello"]);
    }

    #[test]
    fn most_frequent_first() {
        let ranked = ranking(count(words(TEXT)));
        assert_eq!(
            &ranked[..3],
            [
                ("the".to_string(), 5),
                ("dog".to_string(), 3),
                ("fox".to_string(), 3),
            ]
        );
    }
}
