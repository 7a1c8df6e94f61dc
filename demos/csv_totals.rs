//! Totals the amounts in a small CSV ledger, per account.
//!
//! The rows are parsed by a `Pipe` that yields one `Entry` per line and
//! returns early with an error at the first line it cannot read. The error
//! ends the whole pipeline: the fold downstream sees the entries before it and
//! then the pipe's `Err` as the producer's result.
//!
//! Run with: `RUST_LOG=trace cargo run --example csv_totals`

use std::collections::BTreeMap;

use sluice::Pipe;
use sluice::Producer;
use sluice::await_;
use sluice::combinators;
use sluice::each;
use sluice::pure;
use sluice::yield_;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const GOOD_LEDGER: &str = "\
groceries, 12.50
rent, 900
groceries, 3.25

refunds, -4.75
groceries, 0.5
";

const BAD_LEDGER: &str = "\
rent, 900
groceries twelve fifty
refunds, -4.75
";

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    account: String,
    cents: i64,
}

#[derive(Debug, Error, PartialEq)]
enum LedgerError {
    #[error("line {line}: expected `account, amount`, got {text:?}")]
    MissingAmount { line: usize, text: String },
    #[error("line {line}: {amount:?} is not an amount")]
    BadAmount { line: usize, amount: String },
}

/// Parses `12`, `12.5` or `-12.50` into cents.
fn parse_cents(amount: &str) -> Option<i64> {
    let (negative, digits) = match amount.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, amount),
    };
    let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
    if whole.is_empty() || frac.len() > 2 {
        return None;
    }
    let whole: i64 = whole.parse().ok()?;
    let frac: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    let cents = whole * 100 + frac;
    Some(if negative { -cents } else { cents })
}

fn parse_line(line: usize, text: &str) -> Result<Entry, LedgerError> {
    let (account, amount) =
        text.split_once(',').ok_or_else(|| LedgerError::MissingAmount {
            line,
            text: text.to_string(),
        })?;
    let amount = amount.trim();
    let cents = parse_cents(amount).ok_or_else(|| LedgerError::BadAmount {
        line,
        amount: amount.to_string(),
    })?;
    Ok(Entry {
        account: account.trim().to_string(),
        cents,
    })
}

/// Reads lines from upstream, skipping blank ones, and yields their entries.
fn entries<'a>(line: usize) -> Pipe<'a, &'a str, Entry, Result<(), LedgerError>> {
    await_().and_then(move |text: &'a str| {
        if text.trim().is_empty() {
            return entries(line + 1);
        }
        match parse_line(line, text) {
            Ok(entry) => yield_(entry).and_then(move |()| entries(line + 1)),
            Err(e) => pure(Err(e)),
        }
    })
}

fn totals(ledger: &str) -> Result<BTreeMap<String, i64>, LedgerError> {
    let rows: Producer<Entry, Result<(), LedgerError>> = each(ledger.lines())
        .map_return(|()| Ok(()))
        .compose(entries(1));
    let (totals, result) = combinators::fold_ret(
        rows,
        |mut totals: BTreeMap<String, i64>, entry: Entry| {
            *totals.entry(entry.account).or_default() += entry.cents;
            totals
        },
        BTreeMap::new(),
        |totals| totals,
    );
    result.map(|()| totals)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for (name, ledger) in [("good", GOOD_LEDGER), ("bad", BAD_LEDGER)] {
        println!("{name} ledger:");
        match totals(ledger) {
            Ok(totals) => {
                for (account, cents) in totals {
                    println!("  {account:<10} {:>8.2}", cents as f64 / 100.0);
                }
            }
            Err(e) => println!("  error: {e}"),
        }
    }
}
