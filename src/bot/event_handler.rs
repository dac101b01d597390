use crate::bot::Handler;
use serenity::all::{
    Colour, Command, CommandInteraction, CreateEmbed, EditInteractionResponse, Interaction, Ready,
};
use serenity::prelude::*;

#[serenity::async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, context: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        // Acknowledge up front so extensions have the full response window
        if self.auto_defer {
            if let Err(why) = command.defer(&context.http).await {
                tracing::error!("[CMD] Failed to defer /{}: {why}", command.data.name);
                return;
            }
        }

        let result = match self.extension_for(&command.data.name) {
            Some(extension) => extension.run(&context, &command).await,
            None => {
                tracing::warn!("[CMD] Unknown command received: '{}'", command.data.name);
                send_error(
                    &context,
                    &command,
                    &format!("Unknown command: `{}`.", command.data.name),
                )
                .await
            }
        };

        if let Err(e) = result {
            tracing::error!("[CMD] Error processing /{}: {e:?}", command.data.name);

            if let Err(send_err) = send_error(
                &context,
                &command,
                "An unexpected error occurred. Please try again later.",
            )
            .await
            {
                tracing::error!("[CMD] Failed to send error response to user: {send_err}");
            }
        }
    }

    async fn ready(&self, context: Context, ready: Ready) {
        tracing::info!("[BOT] Logged in as {}", ready.user.name);

        if !self.sync_commands {
            return;
        }

        let commands_vec: Vec<_> = self
            .extensions
            .iter()
            .flat_map(|extension| extension.commands())
            .collect();
        let command_count = commands_vec.len();

        match Command::set_global_commands(&context, commands_vec).await {
            Ok(_) => tracing::info!(
                "[CMD] Successfully registered {} global commands",
                command_count
            ),
            Err(why) => tracing::error!("[CMD] Failed to register global commands: {why}"),
        }
    }
}

/// Report an error to the invoking user on the deferred response.
async fn send_error(
    context: &Context,
    interaction: &CommandInteraction,
    error_message: &str,
) -> anyhow::Result<()> {
    let embed = CreateEmbed::new()
        .title("Error")
        .description(error_message)
        .color(Colour::RED);

    let edit_message = EditInteractionResponse::new().embed(embed);
    interaction
        .edit_response(&context.http, edit_message)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to edit error response: {}", e))?;

    Ok(())
}
