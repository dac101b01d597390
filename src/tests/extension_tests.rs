#[cfg(test)]
pub mod tests {
    use crate::bot::{Handler, extension_loader};
    use crate::extensions::{self, Extension, ExtensionError, InitFn};
    use serenity::all::{CommandInteraction, Context, CreateCommand};

    struct Dummy(&'static str);

    #[serenity::async_trait]
    impl Extension for Dummy {
        fn name(&self) -> &'static str {
            self.0
        }

        fn command_names(&self) -> &'static [&'static str] {
            &[]
        }

        fn commands(&self) -> Vec<CreateCommand> {
            vec![]
        }

        async fn run(
            &self,
            _context: &Context,
            _interaction: &CommandInteraction,
        ) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn init_a() -> Result<Box<dyn Extension>, ExtensionError> {
        Ok(Box::new(Dummy("a")))
    }

    fn init_b() -> Result<Box<dyn Extension>, ExtensionError> {
        Ok(Box::new(Dummy("b")))
    }

    fn init_bad() -> Result<Box<dyn Extension>, ExtensionError> {
        Err(ExtensionError::Setup("refused to come up".to_string()))
    }

    #[test]
    fn one_failing_extension_does_not_stop_the_others() {
        let registry: Vec<(&'static str, InitFn)> =
            vec![("a", init_a), ("bad", init_bad), ("b", init_b)];

        let loaded = extension_loader::load(&registry);
        let names: Vec<_> = loaded.iter().map(|extension| extension.name()).collect();

        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn empty_registry_loads_nothing() {
        let loaded = extension_loader::load(&[]);
        assert!(loaded.is_empty());
    }

    #[test]
    fn registry_names_are_unique_and_bare() {
        let registry = extensions::registry();
        let mut names: Vec<_> = registry.iter().map(|(name, _)| *name).collect();

        for name in &names {
            assert!(!name.is_empty());
            assert!(
                !name.contains('/') && !name.contains('.'),
                "'{}' should be a bare module name",
                name
            );
        }

        names.sort();
        names.dedup();
        assert_eq!(names.len(), registry.len(), "duplicate extension name");
    }

    #[test]
    fn shipped_extensions_all_load() {
        let loaded = extension_loader::load_all();
        assert_eq!(loaded.len(), extensions::registry().len());

        for extension in &loaded {
            assert_eq!(
                extension.commands().len(),
                extension.command_names().len(),
                "extension '{}' declares a command without a definition",
                extension.name()
            );
        }
    }

    #[test]
    fn handler_routes_commands_to_the_owning_extension() {
        let handler = Handler::new();

        let extension = handler.extension_for("ping").expect("ping should be loaded");
        assert_eq!(extension.name(), "ping");
        assert!(handler.extension_for("does-not-exist").is_none());
    }
}
