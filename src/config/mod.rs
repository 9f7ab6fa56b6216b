mod manager;

pub use manager::{
    ConfigFile, ConfigManager, PromptConfig, ResolveOptions, ResolvedConfig, TlxConfig,
    resolve_config,
};
