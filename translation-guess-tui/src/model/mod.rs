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
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 游戏规则相关的状态（原文、目标语言、译文、猜测、反馈、加载中、错误）
//! 全部在 translation-guess-core 的 `GameSession` 里，由 `TranslationGuessGame` 持有；
//! 这一层只补充 TUI 自己需要的东西。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod page;           // 页面（由会话推导）
//!
//!         pub mod state;      // 弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub game: TranslationGuessGame,     // 游戏控制器
//!             pub key_source: KeySource,          // API Key 来源（环境变量 / 钥匙串 / 缺失）
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub modal: ModalState               // 弹窗状态
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = model::App::new(game, key_source);
//!         - 在 update/mod.rs 中修改：app.game.restart();
//!         - 在 view/mod.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、页面（Page）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/page.rs 中定义页面枚举：
//!         - Input：输入原文，提交翻译
//!         - Result：显示译文，输入猜测，显示反馈
//!
//!     Page 不存储在 App 中，而是每次由 `Page::of(session)` 推导：
//!         译文非空 → Result，否则 → Input
//!
//!     这样页面永远不会和会话状态不一致。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/modal.rs 中定义：
//!
//!         Modal 枚举：
//!             - Help
//!             - ApiKey { value, show_secret, error }
//!
//!         ModalState 容器：
//!             - active: Option<Modal>    // None = 无弹窗, Some = 有弹窗
//!             - show_help() / show_api_key()
//!             - close()
//!
//!     数据流：
//!         用户按 Ctrl+K
//!             ↓
//!         event/handler.rs 返回 AppMessage::ShowApiKey
//!             ↓
//!         update/mod.rs 调用 app.modal.show_api_key()
//!             ↓
//!         view/components/modal.rs 检测到弹窗，渲染弹窗 UI
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod page;
pub mod state;

pub use app::{App, KeySource};
pub use page::Page;
pub use state::{Modal, ModalState};
