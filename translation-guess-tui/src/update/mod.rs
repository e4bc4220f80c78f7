//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │ AppMessage│          └──┬────┬──┘         │   │
//！│  │        ▲               │ InputMsg  │        修改 │    │ Command    │   │
//！│  │        │               │ ModalMsg  │             ▼    │            │   │
//！│  │   ┌─────────┐          └───────────┘       ┌────────┐ │            │   │
//！│  │   │  View   │ ◀──────── 读取 ───────────── │ Model  │ │            │   │
//！│  │   │   层    │                              │   层   │ │            │   │
//！│  │   └────┬────┘                              └────────┘ │            │   │
//！│  └────────│──────────────────────────────────────────────│────────────┘   │
//！│           │                     TranslationFinished ▲    │ 后台任务      │
//！│           ▼                                         │    ▼               │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ translation-guess-│           │
//！│                                           │       core        │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod input;              // 输入框子消息处理（原文 / 猜测）
//!         mod modal;              // 弹窗子消息处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) -> Option<Command> {...}
//!
//!
//!         —— 的主更新函数。
//!             使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!             复杂的子消息委托给子模块处理（input、modal）。
//!
//!             Update 本身不做 IO：需要网络或钥匙串时返回一个 Command，
//!             由 app.rs 交给 Backend 执行。于是 update 可以在测试中直接调用。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一轮游戏在 Update 层的样子
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Input(Submit)           → game.begin_translation()  → Command::Translate(pending)
//!     TranslationFinished     → game.complete_translation(round , result)
//!                               轮次不匹配（已重新开始）的结果直接丢弃
//!     Input(Submit)           → game.submit_guess(..)     （结果页）
//!     Restart                 → game.restart()            （出现反馈之后）
//!

mod input;
mod modal;

use crate::message::{AppMessage, Command};
use crate::model::App;

/// 主更新函数
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::Input(input_msg) => input::update(app, input_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::TranslationFinished { round, result } => {
            if !app.game.complete_translation(round, result) {
                log::debug!("Discarded stale translation result for round {round}");
            }
            None
        }

        AppMessage::Restart => {
            if app.game.session().can_restart() {
                app.game.restart();
                app.clear_status();
            }
            None
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::ShowApiKey => {
            app.modal.show_api_key();
            None
        }

        AppMessage::ClearStatus => {
            app.clear_status();
            None
        }

        AppMessage::Noop => None,
    }
}
