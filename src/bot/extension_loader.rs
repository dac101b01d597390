use crate::extensions::{self, Extension, InitFn};

/// Initialize every extension in the static registry.
pub fn load_all() -> Vec<Box<dyn Extension>> {
    load(&extensions::registry())
}

/// Run each initializer in registry order. A failing extension is logged and
/// skipped; it never aborts the other extensions or startup itself.
pub fn load(registry: &[(&'static str, InitFn)]) -> Vec<Box<dyn Extension>> {
    let mut loaded = Vec::with_capacity(registry.len());

    for (name, init) in registry {
        match init() {
            Ok(extension) => {
                tracing::info!("[EXT] Loaded extension: {}", extension.name());
                loaded.push(extension);
            }
            Err(e) => {
                tracing::error!("[EXT] Failed to load extension {name}: {e}");
            }
        }
    }

    loaded
}
