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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/粘贴等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!             最长等待 timeout；超时返回 Ok(None)，
//!             主循环借这个空档回收后台翻译结果。
//!
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Paste(String)                // 粘贴（需终端开启 bracketed paste）
//!             Event::Resize(width , height)       // 下一帧自动按新尺寸重绘
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 只处理 Press，忽略 Release / Repeat
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 全局快捷键，就地处理
//!                 - 其余交给 handle_input_keys，作用于当前页面的输入框
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 快捷键一览（keymap.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Enter           → InputMessage::Submit      翻译 / 提交猜测
//!         Alt+Enter       → InputMessage::Newline     原文换行
//!         Ctrl+R / F5     → AppMessage::Restart       有反馈后重新开始
//!         Ctrl+K          → AppMessage::ShowApiKey    设置 API Key
//!         F1 / ?          → AppMessage::ShowHelp      ? 只在输入框为空时生效
//!         Esc             → AppMessage::ClearStatus
//!         Alt+Q / Ctrl+C  → AppMessage::Quit
//!
//!     弹窗内：
//!         Esc         → ModalMessage::Close
//!         Enter       → ModalMessage::Confirm
//!         Alt+S       → ModalMessage::ToggleSecrets
//!         字符输入     → ModalMessage::Input(c)
//!         Backspace   → ModalMessage::Backspace
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
