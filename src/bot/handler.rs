use crate::bot::extension_loader;
use crate::extensions::Extension;

/// State shared with the event handler: the loaded extensions plus the two
/// behavior flags (acknowledge interactions before dispatch, push the command
/// set to Discord on ready).
pub struct Handler {
    pub extensions: Vec<Box<dyn Extension>>,
    pub auto_defer: bool,
    pub sync_commands: bool,
}

impl Handler {
    pub fn new() -> Self {
        Handler {
            extensions: extension_loader::load_all(),
            auto_defer: true,
            sync_commands: true,
        }
    }

    /// Find the extension claiming a slash command name.
    pub fn extension_for(&self, command_name: &str) -> Option<&dyn Extension> {
        self.extensions
            .iter()
            .find(|extension| extension.command_names().contains(&command_name))
            .map(|extension| extension.as_ref())
    }
}
