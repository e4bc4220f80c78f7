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
//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有的 IO。
//! 游戏规则在 translation-guess-core 中，这里只负责把它接到真实环境上。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod core_service;               // 核心服务入口
//!         mod credential_service;         // 凭证存储（keyring）
//!         mod translation_service;        // 后台翻译任务（tokio 运行时）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/core_service.rs 中定义：
//!
//!         CoreService 是 Backend 层的入口。
//!
//!         创建流程：
//!             1. 由 EnvConfigService 读取 AppConfig（main.rs）
//!             2. 创建 KeyringCredentialStore（凭证存储）
//!             3. 创建 TranslationService（后台运行时 + 结果通道）
//!
//!         提供的方法：
//!             - initial_provider()    环境变量 → 钥匙串 → 缺失，构建 Provider
//!             - translate()           后台执行一次翻译
//!             - drain_completed()     取回已完成的翻译
//!             - save_api_key()        校验并保存新的 Key
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、凭证存储（KeyringCredentialStore）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/credential_service.rs 中定义：
//!
//!         实现 translation-guess-core 的 CredentialStore trait。
//!         使用系统 keyring（钥匙串）保存 API Key。
//!
//!         条目：service = "translation-guess"，user = "google-translate-api-key"
//!
//!         钥匙串调用是阻塞的，统一放进 spawn_blocking。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按下 Enter
//!         ↓
//!     Update 层返回 Command::Translate(pending)
//!         ↓
//!     app.rs 调用 CoreService::translate()
//!         ↓
//!     后台任务调用 Google Translate
//!         ↓
//!     (round , result) 写入通道
//!         ↓
//!     app.rs 每轮 drain_completed()，转成 AppMessage::TranslationFinished
//!         ↓
//!     Update 层回填会话（过期轮次丢弃）
//!         ↓
//!     View 层重新渲染
//!

mod core_service;
mod credential_service;
mod translation_service;

pub use core_service::CoreService;
