//! 输入框更新逻辑
//!
//! 输入页编辑原文，结果页编辑猜测；哪个输入框生效由会话状态决定。

use crate::message::{Command, InputMessage};
use crate::model::{App, Page};

/// 处理输入框消息
pub fn update(app: &mut App, msg: InputMessage) -> Option<Command> {
    match app.page() {
        Page::Input => update_source_text(app, msg),
        Page::Result => update_guess(app, msg),
    }
}

/// 输入页：编辑原文，Enter 发起翻译
fn update_source_text(app: &mut App, msg: InputMessage) -> Option<Command> {
    if let InputMessage::Submit = msg {
        let pending = app.game.begin_translation()?;
        log::info!(
            "Round {} started, {} chars to translate",
            pending.round,
            pending.text.chars().count()
        );
        app.clear_status();
        return Some(Command::Translate(pending));
    }

    let text = app.game.input_text_mut();
    match msg {
        InputMessage::Char(ch) => text.push(ch),
        InputMessage::Paste(pasted) => text.push_str(&pasted.replace("\r\n", "\n")),
        InputMessage::Newline => text.push('\n'),
        InputMessage::Backspace => {
            text.pop();
        }
        InputMessage::Submit => {}
    }
    None
}

/// 结果页：编辑猜测，Enter 提交
fn update_guess(app: &mut App, msg: InputMessage) -> Option<Command> {
    // 已作答的一轮不再接受输入，等待重新开始
    if !app.game.session().can_guess() {
        return None;
    }

    if let InputMessage::Submit = msg {
        let guess = app.game.session().user_guess().to_owned();
        match app.game.submit_guess(guess) {
            Ok(feedback) => log::info!("Guess submitted, correct: {}", feedback.is_correct),
            Err(e) => log::warn!("Guess rejected: {e}"),
        }
        return None;
    }

    let guess = app.game.user_guess_mut();
    match msg {
        InputMessage::Char(ch) => guess.push(ch),
        InputMessage::Paste(pasted) => {
            guess.push_str(pasted.lines().next().unwrap_or_default());
        }
        InputMessage::Backspace => {
            guess.pop();
        }
        // 猜测只有一行
        InputMessage::Newline | InputMessage::Submit => {}
    }
    None
}
