mod config_tests;
mod extension_tests;
