//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时（main.rs），App 被初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     game: TranslationGuessGame {                    // 游戏控制器
//!         session: GameSession::default(),                // 空的一轮：Phase::Idle
//!         provider: Arc<dyn TranslationProvider>,         // 由 CoreService::initial_provider() 构建
//!     },
//!     key_source: KeySource,                          // API Key 来自环境变量 / 钥匙串 / 缺失
//!     status_message: None,                           // 状态栏消息（Key 缺失时给出提示）
//!     modal: ModalState { active: None },             // 没有弹窗
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     for done in core.drain_completed() {            // 回收后台翻译结果
//!         update::update(&mut app , TranslationFinished{..})
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         if let Some(cmd) = update::update(&mut app , msg) {
//!             execute(cmd)                                // 交给 Backend 执行副作用
//!         }
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::backend::CoreService;
use crate::event;
use crate::message::{AppMessage, Command};
use crate::model::{App, KeySource};
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, core: &mut CoreService) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 回收已完成的翻译
        for done in core.drain_completed() {
            dispatch(
                app,
                core,
                AppMessage::TranslationFinished {
                    round: done.round,
                    result: done.result,
                },
            );
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态并执行副作用
            dispatch(app, core, msg);
        }
    }

    tracing::info!("Exiting");
    Ok(())
}

/// 更新状态，有副作用时交给 Backend 执行
fn dispatch(app: &mut App, core: &CoreService, msg: AppMessage) {
    if let Some(cmd) = update::update(app, msg) {
        execute(app, core, cmd);
    }
}

/// 执行 Update 层产出的副作用
fn execute(app: &mut App, core: &CoreService, cmd: Command) {
    match cmd {
        Command::Translate(pending) => {
            core.translate(app.game.provider(), pending);
        }

        Command::SaveApiKey(api_key) => match core.save_api_key(api_key) {
            Ok(provider) => {
                app.game.set_provider(provider);
                app.key_source = KeySource::Keyring;
                app.set_status("API key saved");
            }
            Err(e) => {
                tracing::warn!("Failed to save API key: {e}");
                app.set_status(format!("Failed to save API key: {e}"));
            }
        },
    }
}
