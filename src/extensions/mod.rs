mod info;
mod ping;

use serenity::all::{CommandInteraction, Context, CreateCommand};
use thiserror::Error;

/// A self-contained module adding slash commands to the bot, initialized by
/// name from the static registry at startup.
#[serenity::async_trait]
pub trait Extension: Send + Sync {
    /// Registry name of this extension.
    fn name(&self) -> &'static str;

    /// Slash command names this extension answers to.
    fn command_names(&self) -> &'static [&'static str];

    /// Command definitions to register with Discord, one per entry in
    /// [`Self::command_names`].
    fn commands(&self) -> Vec<CreateCommand>;

    /// Handle one command interaction addressed to this extension. The
    /// interaction has already been deferred when auto-defer is enabled, so
    /// handlers respond by editing the deferred response.
    async fn run(
        &self,
        context: &Context,
        interaction: &CommandInteraction,
    ) -> anyhow::Result<()>;
}

#[derive(Debug, Error)]
pub enum ExtensionError {
    /// The extension could not construct its initial state.
    #[error("extension setup failed: {0}")]
    Setup(String),
}

pub type InitFn = fn() -> Result<Box<dyn Extension>, ExtensionError>;

/// Static registry mapping an extension name to its initializer. New
/// extensions are added here rather than discovered from the filesystem.
pub fn registry() -> Vec<(&'static str, InitFn)> {
    vec![("ping", ping::init), ("info", info::init)]
}
