//! Translation Guess Core Library
//!
//! Platform-independent game logic for the "guess the language" game:
//! - Language catalog (the fixed pool of target languages)
//! - Game session state machine (translate → guess → feedback → restart)
//! - Game controller that drives a [`TranslationProvider`](translation_guess_provider::TranslationProvider)
//! - Configuration and credential resolution
//!
//! Presentation layers (the TUI) own the event loop and only talk to this crate
//! through [`TranslationGuessGame`] and the storage traits.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{AppConfig, ConfigService, EnvConfigService, TranslationGuessGame};
pub use traits::{CredentialStore, InMemoryCredentialStore};
pub use types::{
    GameSession, GuessFeedback, Language, LanguageCatalog, PendingTranslation, Phase,
};
