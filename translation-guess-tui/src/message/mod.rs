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
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod input;          // 输入框子消息
//!         mod modal;          // 弹窗子消息
//!         mod command;        // Update 产出的副作用
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             Input(InputMessage),                // 输入框子消息，与主消息分离
//!             Modal(ModalMessage),                // 弹窗子消息
//!             TranslationFinished { round, result }, // 后台翻译完成（不是按键产生的）
//!             Restart,                            // 重新开始
//!             ShowHelp,                           // 显示帮助
//!             ShowApiKey,                         // 设置 API Key
//!             ClearStatus,                        // 清除状态栏消息
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!
//!     InputMessage 不区分原文输入框和猜测输入框，
//!     由 Update 层根据当前页面决定作用到哪一个字段。
//!
//!
//!     TranslationFinished 是唯一一个不是由按键产生的消息：
//!         主循环每一轮从 Backend 的通道里取出完成的翻译，
//!         包装成 TranslationFinished 交给 update()。
//!         携带的 round 用于丢弃重新开始之前发出的请求结果。
//!
//!
//!     Command 是反方向的：
//!         update() 返回 Option<Command>，主循环把它交给 Backend 执行
//!             - Command::Translate(pending)   在 tokio 运行时里发起翻译
//!             - Command::SaveApiKey(key)      写入钥匙串并替换 Provider
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod command;
mod input;
mod modal;

pub use app::AppMessage;
pub use command::Command;
pub use input::InputMessage;
pub use modal::ModalMessage;
