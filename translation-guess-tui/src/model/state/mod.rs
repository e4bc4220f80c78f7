//! 页面状态模块
//!
//! 游戏本身的状态在 `translation_guess_core::GameSession` 中，
//! 这里只保留 TUI 独有的弹窗状态。

mod modal;

pub use modal::{Modal, ModalState};
