//! Fetch Identities Example
//!
//! Fetches a handful of fake identities from uinames.com and prints them.
//! Pass an alternate endpoint URL as the first argument to target a
//! different server, e.g. a local mock.

// Example-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]
#![allow(clippy::expect_used)]

use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uinames::{HyperClient, Request, RequestOption};
use url::Url;

#[tokio::main]
async fn main() -> uinames::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uinames=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let endpoint = std::env::args()
        .nth(1)
        .map(|raw| Url::parse(&raw))
        .transpose()?;

    let options = [
        RequestOption::Amount(5),
        RequestOption::ExtraData,
        RequestOption::Region("Germany".to_string()),
    ];
    let request = match endpoint {
        Some(url) => Request::with_base_url(url, options)?,
        None => Request::new(options)?,
    };

    let client = HyperClient::with_timeout(Duration::from_secs(10));
    let identities = request.send(&client).await?;

    println!("Fetched {} identities:", identities.len());
    for identity in &identities {
        println!(
            "  {} {} ({}, {})",
            identity.name, identity.surname, identity.gender, identity.region
        );
    }

    let json = serde_json::to_string_pretty(&identities).expect("identities serialize");
    println!("\n{json}");

    Ok(())
}
