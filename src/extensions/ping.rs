use crate::extensions::{Extension, ExtensionError};
use serenity::all::{CommandInteraction, Context, CreateCommand, EditInteractionResponse};

/// Minimal liveness check: `/ping` answers with `Pong!`.
struct Ping;

pub fn init() -> Result<Box<dyn Extension>, ExtensionError> {
    Ok(Box::new(Ping))
}

#[serenity::async_trait]
impl Extension for Ping {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn command_names(&self) -> &'static [&'static str] {
        &["ping"]
    }

    fn commands(&self) -> Vec<CreateCommand> {
        vec![CreateCommand::new("ping").description("Check that the bot is alive")]
    }

    async fn run(
        &self,
        context: &Context,
        interaction: &CommandInteraction,
    ) -> anyhow::Result<()> {
        let message = EditInteractionResponse::new().content("Pong!");
        interaction.edit_response(&context.http, message).await?;

        Ok(())
    }
}
