use basic_url::{Components, Url};
use std::{env, io};
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("basic_url=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    // An optional argument is used as the default protocol.
    let options = Components {
        default_protocol: env::args().nth(1),
        ..Components::default()
    };

    for line in io::stdin().lines() {
        let line = line.expect("failed to read line");
        match Url::parse_with(&line, options.clone()) {
            Ok(url) => {
                println!("{url:#?}");
                match url.to_canonical_string() {
                    Ok(s) => println!("=> {s}"),
                    Err(e) => println!("=> Error: {e}"),
                }
            }
            Err(e) => println!("Error: {e}"),
        };
    }
}
