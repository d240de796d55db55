use anyhow::Context;
use pipes_cli::{quote, render, Config};
use pipes_shared::OrderRequest;
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read orders from {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read orders from stdin")?;
            buf
        }
    };

    let requests: Vec<OrderRequest> =
        serde_json::from_str(&input).context("Orders must be a JSON array")?;
    tracing::debug!(count = requests.len(), "orders parsed");

    let quote = quote(requests, config.pricing.clone());
    for rejection in &quote.rejections {
        eprintln!("{}", rejection.describe());
    }

    println!("{}", render(&quote.basket, &config.output)?);
    Ok(())
}
