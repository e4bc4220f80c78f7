//! 弹窗更新逻辑

use crate::message::{Command, ModalMessage};
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    match app.modal.active {
        Some(Modal::Help) => {
            handle_simple_modal(app, &msg);
            None
        }
        Some(Modal::ApiKey { .. }) => handle_api_key(app, msg),
        None => None,
    }
}

/// 处理 API Key 弹窗
fn handle_api_key(app: &mut App, msg: ModalMessage) -> Option<Command> {
    let Some(Modal::ApiKey {
        ref mut value,
        ref mut show_secret,
        ref mut error,
    }) = app.modal.active
    else {
        return None;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::ToggleSecrets => {
            *show_secret = !*show_secret;
        }

        ModalMessage::Input(ch) => {
            value.push(ch);
            *error = None;
        }

        ModalMessage::Paste(text) => {
            value.push_str(text.trim());
            *error = None;
        }

        ModalMessage::Backspace => {
            value.pop();
            *error = None;
        }

        ModalMessage::Confirm => {
            let key = value.trim().to_string();
            if key.is_empty() {
                *error = Some("API key cannot be empty".to_string());
                return None;
            }
            app.modal.close();
            app.set_status("Saving API key...");
            return Some(Command::SaveApiKey(key));
        }
    }
    None
}

/// 处理简单弹窗（只能关闭）
fn handle_simple_modal(app: &mut App, msg: &ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
    }
}
