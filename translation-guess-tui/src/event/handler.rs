//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, InputMessage, ModalMessage};
use crate::model::{App, Modal, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Paste(text) => handle_paste(text, app),
        _ => AppMessage::Noop, // 终端窗口大小改变时下一轮自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::RESTART.matches(&key) || DefaultKeymap::RESTART_ALT.matches(&key) {
        return AppMessage::Restart;
    }

    if DefaultKeymap::API_KEY.matches(&key) {
        return AppMessage::ShowApiKey;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ClearStatus;
    }

    handle_input_keys(key, app)
}

/// 处理输入框的按键
fn handle_input_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::NEWLINE.matches(&key) {
        return AppMessage::Input(InputMessage::Newline);
    }
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Input(InputMessage::Submit);
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Input(InputMessage::Backspace),

        // 只接受无修饰键或 Shift 的字符，避免 Ctrl/Alt 组合键写进输入框
        KeyCode::Char(ch) if is_plain(key.modifiers) => {
            // 输入框为空时 ? 打开帮助
            if ch == '?' && focused_text(app).is_empty() {
                AppMessage::ShowHelp
            } else {
                AppMessage::Input(InputMessage::Char(ch))
            }
        }

        _ => AppMessage::Noop,
    }
}

/// 处理粘贴
fn handle_paste(text: String, app: &App) -> AppMessage {
    if text.is_empty() {
        return AppMessage::Noop;
    }
    if app.modal.is_open() {
        AppMessage::Modal(ModalMessage::Paste(text))
    } else {
        AppMessage::Input(InputMessage::Paste(text))
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    match modal {
        Modal::Help => match key.code {
            KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('?' | 'q') => {
                AppMessage::Modal(ModalMessage::Close)
            }
            _ => AppMessage::Noop,
        },
        Modal::ApiKey { .. } => {
            if DefaultKeymap::TOGGLE_SECRETS.matches(&key) {
                return AppMessage::Modal(ModalMessage::ToggleSecrets);
            }
            match key.code {
                KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
                KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
                KeyCode::Char(ch) if is_plain(key.modifiers) => {
                    AppMessage::Modal(ModalMessage::Input(ch))
                }
                _ => AppMessage::Noop,
            }
        }
    }
}

/// 没有 Ctrl/Alt 修饰
fn is_plain(modifiers: KeyModifiers) -> bool {
    (modifiers - KeyModifiers::SHIFT).is_empty()
}

/// 当前页面中获得焦点的输入框内容
fn focused_text(app: &App) -> &str {
    let session = app.game.session();
    match app.page() {
        Page::Input => session.input_text(),
        Page::Result => session.user_guess(),
    }
}
