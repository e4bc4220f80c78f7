//! 业务逻辑服务层

mod config_service;
mod game_service;
mod provider_service;

pub use config_service::{
    API_KEY_ENV, ALT_API_KEY_ENV, AppConfig, ConfigService, DEFAULT_LOG_FILTER, ENDPOINT_ENV,
    EnvConfigService, LOG_ENV,
};
pub use game_service::{TranslationGuessGame, run_translation};
pub use provider_service::{MissingCredentialsProvider, build_provider};
