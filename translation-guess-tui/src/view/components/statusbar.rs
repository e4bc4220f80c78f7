//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use translation_guess_core::Phase;
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    // Key 来源靠右显示，宽度不够时省略
    let label = format!(" {} ", app.key_source.label());
    let used: usize = spans.iter().map(|s| s.content.width()).sum();
    let available = usize::from(area.width);
    if used + label.width() < available {
        spans.push(Span::raw(" ".repeat(available - used - label.width())));
        spans.push(Span::styled(label, Styles::hint_desc()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.modal.is_open() {
        hints.push(("Enter", "Confirm"));
        hints.push(("Esc", "Close"));
        return hints;
    }

    match app.game.session().phase() {
        Phase::Idle | Phase::Failed => {
            hints.push(("Enter", "Translate"));
            hints.push(("Alt+Enter", "Newline"));
        }
        Phase::Translating => {
            hints.push(("…", "Translating"));
        }
        Phase::AwaitingGuess => {
            hints.push(("Enter", "Submit Guess"));
        }
        Phase::Answered => {
            hints.push(("Ctrl+R", "Restart"));
        }
    }

    hints.push(("Ctrl+K", "API Key"));
    hints.push(("F1", "Help"));
    hints.push(("Alt+q", "Quit"));

    hints
}
