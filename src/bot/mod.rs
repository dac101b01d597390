mod event_handler;
mod handler;

pub(crate) mod extension_loader;
pub mod init;

// Re-export Handler for convenience
pub use handler::Handler;
