//! Translation Guess TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! Translation Guess TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     EnvConfigService::load()        // 读取环境变量配置
//!     init_logging()                  // 文件日志，必须在进入备用屏幕之前
//!     CoreService::new()              // 后台运行时 + 钥匙串
//!     initial_provider()              // 环境变量 → 钥匙串 → 缺失
//!     init_terminal()                 // 初始化终端
//!     app::run()                      // 运行 app.rs 主循环
//!     restore_terminal()              // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 配置错误（例如 TRANSLATION_GUESS_ENDPOINT 不是 http(s) 地址）在进入 TUI 之前报出，
//! 此时终端还是正常状态，错误直接打印到 stderr。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use translation_guess_core::{ConfigService, EnvConfigService, TranslationGuessGame};

use backend::CoreService;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 读取配置
    let config = EnvConfigService::new().load()?;

    // 2. 初始化日志（失败不影响游戏）
    match init_logging(&config.log_filter) {
        Ok(path) => tracing::info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {e}"),
    }
    tracing::info!(
        "Starting Translation Guess v{} ({config:?})",
        env!("CARGO_PKG_VERSION")
    );

    // 3. 准备后台服务和 Provider
    let mut core = CoreService::new(config)?;
    let (provider, key_source) = core.initial_provider()?;

    // 4. 创建应用实例
    let mut app = model::App::new(TranslationGuessGame::new(provider), key_source);

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut core);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 返回结果
    result
}
