/// Subprocess adapters for the external metadata provider
mod command_provider;

pub use command_provider::{CommandMetadataProvider, DEFAULT_PROVIDER_COMMAND};
