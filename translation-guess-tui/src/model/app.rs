//! 应用主状态结构

use translation_guess_core::TranslationGuessGame;
use translation_guess_core::services::API_KEY_ENV;

use super::{ModalState, Page};

/// API Key 的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// 环境变量
    Environment,
    /// 系统钥匙串
    Keyring,
    /// 未配置，所有翻译都会失败
    Missing,
}

impl KeySource {
    pub fn label(self) -> &'static str {
        match self {
            KeySource::Environment => "key: env",
            KeySource::Keyring => "key: keyring",
            KeySource::Missing => "key: missing",
        }
    }
}

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 游戏控制器（持有会话状态）
    pub game: TranslationGuessGame,

    /// API Key 来源
    pub key_source: KeySource,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new(game: TranslationGuessGame, key_source: KeySource) -> Self {
        let mut app = Self {
            should_quit: false,
            game,
            key_source,
            status_message: None,
            modal: ModalState::new(),
        };

        if key_source == KeySource::Missing {
            app.set_status(format!("No API key: set {API_KEY_ENV} or press Ctrl+K"));
        }

        app
    }

    /// 当前页面
    pub fn page(&self) -> Page {
        Page::of(self.game.session())
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
