use outcome_core::{Outcome, UnwrapFault};
use tools::CallCounter;

mod tools;

#[test]
fn test_ok_properties() {
    for v in [-3, 0, 7, i32::MAX] {
        let ok: Outcome<i32, String> = Outcome::Ok(v);

        assert!(ok.is_ok());
        assert_eq!(ok.clone().unwrap(), v);
        assert_eq!(ok.map(|v| v as i64 * 2).unwrap(), v as i64 * 2);
    }
}

#[test]
fn test_err_properties() {
    for e in ["", "bad", "worse"] {
        let err: Outcome<i32, &str> = Outcome::Err(e);

        assert!(err.is_err());
        assert_eq!(err.unwrap_err(), e);
        assert_eq!(err.map(|v| v + 1), Outcome::Err(e));
    }
}

#[test]
fn test_unwrap_fault_carries_original() {
    let err: Outcome<i32, String> = Outcome::Err(String::from("bad"));

    let fault: UnwrapFault<i32, String> = err.clone().try_unwrap().unwrap_err();
    assert_eq!(fault.outcome(), &err);
    assert_eq!(fault.into_outcome(), err);
}

#[test]
fn test_and_then_on_err_never_calls_op() {
    let counter = CallCounter::new();

    let err: Outcome<i32, &str> = Outcome::Err("bad");
    assert_eq!(err.and_then(counter.passthrough()), Outcome::Err("bad"));
    assert_eq!(counter.calls(), 0);

    let ok: Outcome<i32, &str> = Outcome::Ok(1);
    assert_eq!(ok.and_then(counter.passthrough()), Outcome::Ok(1));
    assert_eq!(counter.calls(), 1);
}

#[test]
fn test_combinator_chain() {
    let parse = |s: &str| -> Outcome<i32, String> {
        s.parse::<i32>().map_err(|e| e.to_string()).into()
    };

    let total = parse("20")
        .and_then(|a| parse("22").map(|b| a + b))
        .map_err(|e| format!("parse failed: {}", e))
        .unwrap_or(0);
    assert_eq!(total, 42);

    let fallback = parse("x")
        .or_else(|_| parse("7"))
        .inspect_err(|_| unreachable!())
        .unwrap();
    assert_eq!(fallback, 7);
}

#[test]
fn test_async_combinators() {
    async fn lookup(id: u32) -> Outcome<String, &'static str> {
        if id == 1 {
            Outcome::Ok(String::from("root"))
        } else {
            Outcome::Err("unknown user")
        }
    }

    let name = futures_executor::block_on(async {
        Outcome::<u32, &str>::Ok(1)
            .and_then_async(lookup)
            .await
            .map_async(|name| async move { name.to_uppercase() })
            .await
    });
    assert_eq!(name, Outcome::Ok(String::from("ROOT")));

    let recovered = futures_executor::block_on(async {
        Outcome::<u32, &str>::Ok(2)
            .and_then_async(lookup)
            .await
            .or_else_async(|_| async { Outcome::<String, ()>::Ok(String::from("guest")) })
            .await
    });
    assert_eq!(recovered, Outcome::Ok(String::from("guest")));
}
