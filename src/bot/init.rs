use crate::bot::Handler;
use crate::config::Config;
use anyhow::{Context as _, Result};
use serenity::all::ActivityData;
use serenity::prelude::*;

/// Build the Discord client and run its blocking connection loop.
pub async fn start_bot(config: &Config) -> Result<()> {
    tracing::info!("[INIT] Starting webgroup Discord bot");

    let handler = Handler::new();
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.token, intents)
        .event_handler(handler)
        .activity(ActivityData::watching("Webgroup issues"))
        .await
        .context("Error creating client")?;

    tracing::info!("[INIT] Starting client...");
    client.start().await.context("Discord client error")?;

    Ok(())
}
