use outcome::{as_result, Outcome};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid value: {0}")]
struct ValueKind(String);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("missing key: {0}")]
struct KeyKind(String);

#[as_result(ValueKind)]
fn validate(raw: &str) -> anyhow::Result<usize> {
    if raw.is_empty() {
        return Err(KeyKind(String::from("raw")).into());
    }
    if raw.contains(' ') {
        return Err(ValueKind(raw.to_string()).into());
    }
    Ok(raw.len())
}

#[test]
fn test_success_becomes_ok() -> anyhow::Result<()> {
    assert_eq!(validate("abc")?.ok(), Some(3));
    Ok(())
}

#[test]
fn test_declared_kind_becomes_err() -> anyhow::Result<()> {
    let failure = validate("a b")?.downcast_err::<ValueKind>()?;

    assert_eq!(failure, Outcome::Err(ValueKind(String::from("a b"))));
    Ok(())
}

#[test]
fn test_undeclared_kind_propagates() {
    let fault = validate("").unwrap_err();

    assert_eq!(
        fault.downcast_ref::<KeyKind>(),
        Some(&KeyKind(String::from("raw")))
    );
}

struct Registry {
    entries: Vec<(u32, String)>,
}

impl Registry {
    #[as_result(KeyKind, ValueKind)]
    fn name(&self, id: u32) -> anyhow::Result<String> {
        let (_, name) = self
            .entries
            .iter()
            .find(|(key, _)| *key == id)
            .ok_or_else(|| KeyKind(id.to_string()))?;
        Ok(name.clone())
    }
}

#[test]
fn test_method_with_several_kinds() -> anyhow::Result<()> {
    let registry = Registry {
        entries: vec![(1, String::from("one"))],
    };

    assert_eq!(registry.name(1)?.ok(), Some(String::from("one")));
    assert!(registry.name(2)?.unwrap_err().is::<KeyKind>());
    Ok(())
}

#[as_result(ValueKind)]
async fn load(key: u32) -> anyhow::Result<String> {
    match key {
        0 => Err(ValueKind(String::from("zero")).into()),
        1 => Ok(String::from("loaded")),
        _ => anyhow::bail!("storage offline"),
    }
}

#[test]
fn test_async_function() -> anyhow::Result<()> {
    futures_executor::block_on(async {
        assert_eq!(load(1).await?.ok(), Some(String::from("loaded")));
        assert!(load(0).await?.unwrap_err().is::<ValueKind>());

        let fault = load(9).await.unwrap_err();
        assert_eq!(fault.to_string(), "storage offline");
        Ok::<(), anyhow::Error>(())
    })
}
