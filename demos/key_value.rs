//! A key-value store served to a client over a request/response session.
//!
//! The store is a `Server` that answers each `Command` with the previous value
//! of the key. An `audit` proxy sits between the client and the store and logs
//! every exchange with `tracing`, without either end knowing it is there.
//! Neither the store nor the audit ever returns, so the session ends when the
//! client does.
//!
//! Run with: `cargo run --example key_value`

use std::collections::BTreeMap;

use sluice::Client;
use sluice::Effect;
use sluice::Proxy;
use sluice::Server;
use sluice::pull_compose;
use sluice::pure;
use sluice::request;
use sluice::respond;
use sluice::run_effect;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Put(String, String),
    Get(String),
    Delete(String),
}

type Reply = Option<String>;

fn store<'a, R: 'a>(
    mut entries: BTreeMap<String, String>,
    command: Command,
) -> Server<'a, Command, Reply, R> {
    let reply = match command {
        Command::Put(key, value) => entries.insert(key, value),
        Command::Get(key) => entries.get(&key).cloned(),
        Command::Delete(key) => entries.remove(&key),
    };
    respond(reply).and_then(move |command| store(entries, command))
}

fn audit<'a, R: 'a>(command: Command) -> Proxy<'a, Command, Reply, Command, Reply, R> {
    tracing::info!(?command, "forwarding");
    request(command).and_then(|reply: Reply| {
        tracing::info!(?reply, "answered");
        respond(reply).and_then(audit)
    })
}

fn play<'a>(
    mut script: std::vec::IntoIter<Command>,
    mut replies: Vec<Reply>,
) -> Client<'a, Command, Reply, Vec<Reply>> {
    match script.next() {
        None => pure(replies),
        Some(command) => request(command).and_then(move |reply| {
            replies.push(reply);
            play(script, replies)
        }),
    }
}

fn session(script: Vec<Command>) -> Vec<Reply> {
    let server = |command| store(BTreeMap::new(), command);
    let client = move |()| play(script.clone().into_iter(), Vec::new());
    let effect: Effect<Vec<Reply>> = pull_compose(pull_compose(server, audit), client)(());
    run_effect(effect)
}

fn put(key: &str, value: &str) -> Command {
    Command::Put(key.to_string(), value.to_string())
}

fn get(key: &str) -> Command {
    Command::Get(key.to_string())
}

fn delete(key: &str) -> Command {
    Command::Delete(key.to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let replies = session(vec![
        put("lang", "rust"),
        get("lang"),
        put("lang", "haskell"),
        delete("lang"),
        get("lang"),
    ]);
    for reply in replies {
        println!("{}", reply.as_deref().unwrap_or("<none>"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_are_previous_values() {
        let replies = session(vec![
            put("a", "1"),
            get("a"),
            put("a", "2"),
            get("b"),
            delete("a"),
            get("a"),
        ]);
        assert_eq!(
            replies,
            vec![
                None,
                Some("1".to_string()),
                Some("1".to_string()),
                None,
                Some("2".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn empty_script_sends_nothing() {
        assert_eq!(session(Vec::new()), Vec::<Reply>::new());
    }
}
