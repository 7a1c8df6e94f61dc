// Property tests for the functor, monad and category laws.
//
// Every law is checked the same way: random step lists build a server, a
// client and the proxies under test, the proxy on each side of the law is
// placed between the same server and client, and the two sessions must end
// with the same result after logging the same values in the same order.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use sluice::*;

type Log = Rc<RefCell<Vec<i64>>>;

type Step<UO, UI, DI, DO> = Rc<dyn Fn(i64) -> Proxy<'static, UO, UI, DI, DO, i64>>;

type Middle = Step<i64, i64, i64, i64>;

#[derive(Debug, Clone, Copy)]
enum ClientStep {
    Request,
    Log,
    Inc,
}

#[derive(Debug, Clone, Copy)]
enum ServerStep {
    Respond,
    Log,
    Inc,
}

#[derive(Debug, Clone, Copy)]
enum ProxyStep {
    Request,
    Respond,
    Log,
    Inc,
}

fn clients() -> impl Strategy<Value = Vec<ClientStep>> {
    let step = prop_oneof![
        Just(ClientStep::Request),
        Just(ClientStep::Log),
        Just(ClientStep::Inc),
    ];
    prop::collection::vec(step, 0..8)
}

fn servers() -> impl Strategy<Value = Vec<ServerStep>> {
    let step = prop_oneof![
        Just(ServerStep::Respond),
        Just(ServerStep::Log),
        Just(ServerStep::Inc),
    ];
    prop::collection::vec(step, 0..8)
}

fn proxies() -> impl Strategy<Value = Vec<ProxyStep>> {
    let step = prop_oneof![
        Just(ProxyStep::Request),
        Just(ProxyStep::Respond),
        Just(ProxyStep::Log),
        Just(ProxyStep::Inc),
    ];
    prop::collection::vec(step, 0..8)
}

fn log_step<UO, UI, DI, DO>(log: &Log) -> Step<UO, UI, DI, DO>
where
    UO: 'static,
    UI: 'static,
    DI: 'static,
    DO: 'static,
{
    let log = Rc::clone(log);
    Rc::new(move |n: i64| {
        log.borrow_mut().push(n);
        pure(n)
    })
}

fn inc_step<UO, UI, DI, DO>() -> Step<UO, UI, DI, DO>
where
    UO: 'static,
    UI: 'static,
    DI: 'static,
    DO: 'static,
{
    Rc::new(|n: i64| pure(n + 1))
}

// Strings steps together with `kleisli_compose()`, starting from `pure()`.
fn sequence<UO, UI, DI, DO>(steps: Vec<Step<UO, UI, DI, DO>>) -> Step<UO, UI, DI, DO>
where
    UO: 'static,
    UI: 'static,
    DI: 'static,
    DO: 'static,
{
    let start: Step<UO, UI, DI, DO> = Rc::new(pure);
    steps.into_iter().fold(start, |acc, step| {
        let next: Step<UO, UI, DI, DO> =
            Rc::new(kleisli_compose(move |x: i64| acc(x), move |x: i64| step(x)));
        next
    })
}

fn client(steps: &[ClientStep], log: &Log) -> Step<i64, i64, (), Closed> {
    sequence(
        steps
            .iter()
            .map(|step| -> Step<i64, i64, (), Closed> {
                match step {
                    ClientStep::Request => Rc::new(request),
                    ClientStep::Log => log_step(log),
                    ClientStep::Inc => inc_step(),
                }
            })
            .collect(),
    )
}

fn server(steps: &[ServerStep], log: &Log) -> Step<Closed, (), i64, i64> {
    sequence(
        steps
            .iter()
            .map(|step| -> Step<Closed, (), i64, i64> {
                match step {
                    ServerStep::Respond => Rc::new(respond),
                    ServerStep::Log => log_step(log),
                    ServerStep::Inc => inc_step(),
                }
            })
            .collect(),
    )
}

fn middle(steps: &[ProxyStep], log: &Log) -> Middle {
    sequence(
        steps
            .iter()
            .map(|step| -> Middle {
                match step {
                    ProxyStep::Request => Rc::new(request),
                    ProxyStep::Respond => Rc::new(respond),
                    ProxyStep::Log => log_step(log),
                    ProxyStep::Inc => inc_step(),
                }
            })
            .collect(),
    )
}

fn k<F>(f: F) -> Middle
where
    F: Fn(i64) -> Proxy<'static, i64, i64, i64, i64, i64> + 'static,
{
    Rc::new(f)
}

fn call(f: &Middle) -> impl Fn(i64) -> Proxy<'static, i64, i64, i64, i64, i64> + 'static {
    let f = Rc::clone(f);
    move |x| f(x)
}

fn observe(
    server_steps: &[ServerStep],
    client_steps: &[ClientStep],
    build: impl Fn(&Log) -> Middle,
) -> (i64, Vec<i64>) {
    let log = Log::default();
    let sv = server(server_steps, &log);
    let p = build(&log);
    let cl = client(client_steps, &log);
    let session = pull_compose(
        pull_compose(move |q: i64| sv(q), move |x: i64| p(x)),
        move |x: i64| cl(x),
    );
    let result = run_effect(session(0));
    let entries = log.borrow().clone();
    (result, entries)
}

fn check(
    sv: &[ServerStep],
    cl: &[ClientStep],
    lhs: impl Fn(&Log) -> Middle,
    rhs: impl Fn(&Log) -> Middle,
) -> Result<(), TestCaseError> {
    prop_assert_eq!(observe(sv, cl, lhs), observe(sv, cl, rhs));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn functor_identity(sv in servers(), cl in clients(), f in proxies()) {
        check(
            &sv,
            &cl,
            |log| {
                let f = middle(&f, log);
                k(move |x| f(x).map_return(|r| r))
            },
            |log| middle(&f, log),
        )?;
    }

    #[test]
    fn functor_composition(sv in servers(), cl in clients(), f in proxies()) {
        check(
            &sv,
            &cl,
            |log| {
                let f = middle(&f, log);
                k(move |x| f(x).map_return(|r| r * 2).map_return(|r| r + 3))
            },
            |log| {
                let f = middle(&f, log);
                k(move |x| f(x).map_return(|r| r * 2 + 3))
            },
        )?;
    }

    #[test]
    fn applicative_identity(sv in servers(), cl in clients(), f in proxies()) {
        check(
            &sv,
            &cl,
            |log| {
                let f = middle(&f, log);
                k(move |x| f(x).apply(pure(|r: i64| r)))
            },
            |log| middle(&f, log),
        )?;
    }

    #[test]
    fn kleisli_left_identity(sv in servers(), cl in clients(), f in proxies()) {
        check(
            &sv,
            &cl,
            |log| k(kleisli_compose(pure, call(&middle(&f, log)))),
            |log| middle(&f, log),
        )?;
    }

    #[test]
    fn kleisli_right_identity(sv in servers(), cl in clients(), f in proxies()) {
        check(
            &sv,
            &cl,
            |log| k(kleisli_compose(call(&middle(&f, log)), pure)),
            |log| middle(&f, log),
        )?;
    }

    #[test]
    fn kleisli_associativity(
        sv in servers(),
        cl in clients(),
        f in proxies(),
        g in proxies(),
        h in proxies(),
    ) {
        check(
            &sv,
            &cl,
            |log| {
                let fg = k(kleisli_compose(
                    call(&middle(&f, log)),
                    call(&middle(&g, log)),
                ));
                k(kleisli_compose(call(&fg), call(&middle(&h, log))))
            },
            |log| {
                let gh = k(kleisli_compose(
                    call(&middle(&g, log)),
                    call(&middle(&h, log)),
                ));
                k(kleisli_compose(call(&middle(&f, log)), call(&gh)))
            },
        )?;
    }

    #[test]
    fn respond_left_identity(sv in servers(), cl in clients(), f in proxies()) {
        check(
            &sv,
            &cl,
            |log| k(respond_compose(respond, call(&middle(&f, log)))),
            |log| middle(&f, log),
        )?;
    }

    #[test]
    fn respond_right_identity(sv in servers(), cl in clients(), f in proxies()) {
        check(
            &sv,
            &cl,
            |log| k(respond_compose(call(&middle(&f, log)), respond)),
            |log| middle(&f, log),
        )?;
    }

    #[test]
    fn respond_associativity(
        sv in servers(),
        cl in clients(),
        f in proxies(),
        g in proxies(),
        h in proxies(),
    ) {
        check(
            &sv,
            &cl,
            |log| {
                let fg = k(respond_compose(
                    call(&middle(&f, log)),
                    call(&middle(&g, log)),
                ));
                k(respond_compose(call(&fg), call(&middle(&h, log))))
            },
            |log| {
                let gh = k(respond_compose(
                    call(&middle(&g, log)),
                    call(&middle(&h, log)),
                ));
                k(respond_compose(call(&middle(&f, log)), call(&gh)))
            },
        )?;
    }

    #[test]
    fn respond_distributivity(
        sv in servers(),
        cl in clients(),
        f in proxies(),
        g in proxies(),
        h in proxies(),
    ) {
        check(
            &sv,
            &cl,
            |log| {
                let fg = k(kleisli_compose(
                    call(&middle(&f, log)),
                    call(&middle(&g, log)),
                ));
                k(respond_compose(call(&fg), call(&middle(&h, log))))
            },
            |log| {
                let h = middle(&h, log);
                let fh = k(respond_compose(call(&middle(&f, log)), call(&h)));
                let gh = k(respond_compose(call(&middle(&g, log)), call(&h)));
                k(kleisli_compose(call(&fh), call(&gh)))
            },
        )?;
    }

    #[test]
    fn respond_zero(sv in servers(), cl in clients(), f in proxies()) {
        check(
            &sv,
            &cl,
            |log| k(respond_compose(pure, call(&middle(&f, log)))),
            |_| k(pure),
        )?;
    }

    #[test]
    fn request_left_identity(sv in servers(), cl in clients(), f in proxies()) {
        check(
            &sv,
            &cl,
            |log| k(request_compose(request, call(&middle(&f, log)))),
            |log| middle(&f, log),
        )?;
    }

    #[test]
    fn request_right_identity(sv in servers(), cl in clients(), f in proxies()) {
        check(
            &sv,
            &cl,
            |log| k(request_compose(call(&middle(&f, log)), request)),
            |log| middle(&f, log),
        )?;
    }

    #[test]
    fn request_associativity(
        sv in servers(),
        cl in clients(),
        f in proxies(),
        g in proxies(),
        h in proxies(),
    ) {
        check(
            &sv,
            &cl,
            |log| {
                let fg = k(request_compose(
                    call(&middle(&f, log)),
                    call(&middle(&g, log)),
                ));
                k(request_compose(call(&fg), call(&middle(&h, log))))
            },
            |log| {
                let gh = k(request_compose(
                    call(&middle(&g, log)),
                    call(&middle(&h, log)),
                ));
                k(request_compose(call(&middle(&f, log)), call(&gh)))
            },
        )?;
    }

    #[test]
    fn request_distributivity(
        sv in servers(),
        cl in clients(),
        f in proxies(),
        g in proxies(),
        h in proxies(),
    ) {
        check(
            &sv,
            &cl,
            |log| {
                let gh = k(kleisli_compose(
                    call(&middle(&g, log)),
                    call(&middle(&h, log)),
                ));
                k(request_compose(call(&middle(&f, log)), call(&gh)))
            },
            |log| {
                let f = middle(&f, log);
                let fg = k(request_compose(call(&f), call(&middle(&g, log))));
                let fh = k(request_compose(call(&f), call(&middle(&h, log))));
                k(kleisli_compose(call(&fg), call(&fh)))
            },
        )?;
    }

    #[test]
    fn request_zero(sv in servers(), cl in clients(), f in proxies()) {
        check(
            &sv,
            &cl,
            |log| k(request_compose(call(&middle(&f, log)), pure)),
            |_| k(pure),
        )?;
    }

    #[test]
    fn push_left_identity(sv in servers(), cl in clients(), f in proxies()) {
        check(
            &sv,
            &cl,
            |log| k(push_compose(push, call(&middle(&f, log)))),
            |log| middle(&f, log),
        )?;
    }

    #[test]
    fn push_right_identity(sv in servers(), cl in clients(), f in proxies()) {
        check(
            &sv,
            &cl,
            |log| k(push_compose(call(&middle(&f, log)), push)),
            |log| middle(&f, log),
        )?;
    }

    #[test]
    fn push_associativity(
        sv in servers(),
        cl in clients(),
        f in proxies(),
        g in proxies(),
        h in proxies(),
    ) {
        check(
            &sv,
            &cl,
            |log| {
                let fg = k(push_compose(
                    call(&middle(&f, log)),
                    call(&middle(&g, log)),
                ));
                k(push_compose(call(&fg), call(&middle(&h, log))))
            },
            |log| {
                let gh = k(push_compose(
                    call(&middle(&g, log)),
                    call(&middle(&h, log)),
                ));
                k(push_compose(call(&middle(&f, log)), call(&gh)))
            },
        )?;
    }

    #[test]
    fn pull_left_identity(sv in servers(), cl in clients(), f in proxies()) {
        check(
            &sv,
            &cl,
            |log| k(pull_compose(pull, call(&middle(&f, log)))),
            |log| middle(&f, log),
        )?;
    }

    #[test]
    fn pull_right_identity(sv in servers(), cl in clients(), f in proxies()) {
        check(
            &sv,
            &cl,
            |log| k(pull_compose(call(&middle(&f, log)), pull)),
            |log| middle(&f, log),
        )?;
    }

    #[test]
    fn pull_associativity(
        sv in servers(),
        cl in clients(),
        f in proxies(),
        g in proxies(),
        h in proxies(),
    ) {
        check(
            &sv,
            &cl,
            |log| {
                let fg = k(pull_compose(
                    call(&middle(&f, log)),
                    call(&middle(&g, log)),
                ));
                k(pull_compose(call(&fg), call(&middle(&h, log))))
            },
            |log| {
                let gh = k(pull_compose(
                    call(&middle(&g, log)),
                    call(&middle(&h, log)),
                ));
                k(pull_compose(call(&middle(&f, log)), call(&gh)))
            },
        )?;
    }

    #[test]
    fn reflect_request_is_respond(sv in servers(), cl in clients()) {
        check(
            &sv,
            &cl,
            |_| k(|x| request(x).reflect()),
            |_| k(respond),
        )?;
    }

    #[test]
    fn reflect_distributes_over_request_compose(
        sv in servers(),
        cl in clients(),
        f in proxies(),
        g in proxies(),
    ) {
        check(
            &sv,
            &cl,
            |log| {
                let fg = k(request_compose(
                    call(&middle(&f, log)),
                    call(&middle(&g, log)),
                ));
                k(move |x| fg(x).reflect())
            },
            |log| {
                let f = middle(&f, log);
                let g = middle(&g, log);
                k(respond_compose(
                    move |x| g(x).reflect(),
                    move |x| f(x).reflect(),
                ))
            },
        )?;
    }

    #[test]
    fn reflect_distributes_over_pull_compose(
        sv in servers(),
        cl in clients(),
        f in proxies(),
        g in proxies(),
    ) {
        check(
            &sv,
            &cl,
            |log| {
                let fg = k(pull_compose(
                    call(&middle(&f, log)),
                    call(&middle(&g, log)),
                ));
                k(move |x| fg(x).reflect())
            },
            |log| {
                let f = middle(&f, log);
                let g = middle(&g, log);
                k(push_compose(
                    move |x| g(x).reflect(),
                    move |x| f(x).reflect(),
                ))
            },
        )?;
    }

    #[test]
    fn reflect_involution(sv in servers(), cl in clients(), f in proxies()) {
        check(
            &sv,
            &cl,
            |log| {
                let f = middle(&f, log);
                k(move |x| f(x).reflect().reflect())
            },
            |log| middle(&f, log),
        )?;
    }
}
