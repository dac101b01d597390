use crate::extensions::{Extension, ExtensionError};
use serenity::all::{
    Colour, CommandInteraction, Context, CreateCommand, CreateEmbed, CreateEmbedFooter,
    EditInteractionResponse,
};

/// `/info` shows what the bot is and where to report problems.
struct Info;

pub fn init() -> Result<Box<dyn Extension>, ExtensionError> {
    Ok(Box::new(Info))
}

#[serenity::async_trait]
impl Extension for Info {
    fn name(&self) -> &'static str {
        "info"
    }

    fn command_names(&self) -> &'static [&'static str] {
        &["info"]
    }

    fn commands(&self) -> Vec<CreateCommand> {
        vec![CreateCommand::new("info").description("Show information about the webgroup bot")]
    }

    async fn run(
        &self,
        context: &Context,
        interaction: &CommandInteraction,
    ) -> anyhow::Result<()> {
        let embed = CreateEmbed::new()
            .title("Webgroup Bot")
            .description("The webgroup's Discord bot, watching over webgroup issues.")
            .color(Colour::from_rgb(34, 197, 94))
            .field(
                "Report Issues",
                "Found a bug or have a feature request? Ping the webgroup!",
                false,
            )
            .footer(CreateEmbedFooter::new("Open source and community driven"));

        let message = EditInteractionResponse::new().embed(embed);
        interaction.edit_response(&context.http, message).await?;

        Ok(())
    }
}
