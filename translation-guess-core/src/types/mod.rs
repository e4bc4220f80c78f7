//! 类型定义模块

mod language;
mod session;

pub use language::{Language, LanguageCatalog};
pub use session::{
    CORRECT_GUESS_MESSAGE, GameSession, GuessFeedback, PendingTranslation, Phase,
};

// Re-export provider 库的公共类型
pub use translation_guess_provider::{
    ProviderCredentials, ProviderMetadata, ProviderType, TranslateRequest, Translation,
};
