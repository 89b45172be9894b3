use std::num::ParseIntError;

use log::{error, info, warn};
use outcome::{as_result, seq, Outcome, Res};

#[derive(Debug, thiserror::Error)]
#[error("port {0} is reserved")]
struct ReservedPort(u16);

#[as_result(ParseIntError, ReservedPort)]
fn parse_port(raw: &str) -> anyhow::Result<u16> {
    let port: u16 = raw.trim().parse()?;
    if port < 1024 {
        return Err(ReservedPort(port).into());
    }
    Ok(port)
}

fn parse_host(raw: &str) -> Outcome<String, String> {
    if raw.is_empty() {
        Outcome::Err(String::from("empty host"))
    } else {
        Outcome::Ok(raw.to_string())
    }
}

fn address(host: &str, port: &str) -> anyhow::Result<Outcome<String, String>> {
    let port: Res<u16> = parse_port(port)?;

    Ok(seq! {
        host <- parse_host(host);
        port <- port.map_err(|e| e.to_string());
        => format!("{}:{}", host, port)
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| String::from("127.0.0.1"));
    let port = args.next().unwrap_or_else(|| String::from("8080"));

    match address(&host, &port)? {
        Outcome::Ok(address) => info!("resolved address: {}", address),
        Outcome::Err(reason) => warn!("could not resolve address: {}", reason),
    }

    address("", "80")?
        .inspect_err(|reason| error!("expected failure: {}", reason))
        .ignore();

    Ok(())
}
