#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

mod commands;
mod errors;
mod framework;
mod games;
mod utils;
mod watchers;

use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use tracing::{error, info};

use framework::{Config, PoiseData};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    framework::logging::init_tracing();

    info!(version = env!("CARGO_PKG_VERSION"), "starting idolbot");

    let config = Config::load()
        .inspect_err(|err| error!(%err, "could not load config"))
        .context("config could not be loaded")?;

    let token = config.bot.token().to_owned();
    let intents = framework::poise::intents();
    let framework = framework::poise::build(PoiseData::new(config));

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .context("client should be valid")?;

    client
        .start()
        .await
        .inspect_err(|err| error!(%err, "client stopped"))
        .context("client returned an error")?;

    Ok(())
}
