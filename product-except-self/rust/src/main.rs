use std::io::{self, Read};

use color_eyre::eyre::{Result, WrapErr};
use product_except_self::{checked_product_except_self, product_except_self};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, OverflowMode};

mod config;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL)),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = if args.is_empty() {
        let mut buf = String::with_capacity(512);
        io::stdin()
            .read_to_string(&mut buf)
            .wrap_err("failed to read stdin")?;
        buf
    } else {
        args.join(" ")
    };

    let result = run(&config, &input)?;

    println!("{result:?}");

    Ok(())
}

fn run(config: &Config, input: &str) -> Result<Vec<i64>> {
    let nums = parse_nums(input)?;

    let result = match config.overflow() {
        OverflowMode::Wrapping => product_except_self(&nums),
        OverflowMode::Checked => checked_product_except_self(&nums)?,
    };

    Ok(result)
}

// Accepts whitespace or commas between values, and the brackets of a printed list.
fn parse_nums(input: &str) -> Result<Vec<i64>> {
    input
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']'))
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .wrap_err_with(|| format!("invalid integer '{token}'"))
        })
        .collect()
}
