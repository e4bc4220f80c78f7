//! 弹窗组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use translation_guess_core::LanguageCatalog;
use translation_guess_provider::{FieldType, GoogleTranslateProvider, TranslationProvider};

use crate::model::{App, Modal};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::ApiKey {
            value,
            show_secret,
            error,
        } => render_api_key(frame, value, *show_secret, error.as_deref()),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗边框并返回内容区域
fn modal_frame(frame: &mut Frame, title: &str, width: u16, height: u16) -> Rect {
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// 密钥显示：默认用圆点遮盖
fn masked(value: &str, show_secret: bool) -> String {
    if show_secret {
        value.to_string()
    } else {
        "•".repeat(value.chars().count().min(32))
    }
}

/// 渲染 API Key 弹窗
///
/// 标题、字段名和提示都取自 provider 元数据
fn render_api_key(frame: &mut Frame, value: &str, show_secret: bool, error: Option<&str>) {
    let meta = GoogleTranslateProvider::metadata();
    let Some(field) = meta.required_fields.first() else {
        return;
    };
    let inner = modal_frame(frame, &meta.name, 60, 14);

    let secret = field.field_type == FieldType::Password;
    let value_line = if value.is_empty() {
        Line::from(vec![
            Span::styled("  ▎", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("Paste or type your {}", field.label),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        Line::styled(
            format!("  {}▎", masked(value, show_secret || !secret)),
            Style::default().fg(Color::Cyan),
        )
    };

    let label = if secret {
        format!("{} ⊖", field.label)
    } else {
        field.label.clone()
    };

    let hint = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::styled(label, Style::default().fg(Color::Gray)),
        value_line,
        Line::from(""),
    ];
    if let Some(ref help) = field.help_text {
        lines.push(Line::styled(help.clone(), hint));
    }
    lines.push(Line::styled("Stored in the system keyring.", hint));
    if let Some(ref var) = field.env_var {
        lines.push(Line::styled(format!("{var} overrides it when set."), hint));
    }

    // 错误信息
    if let Some(err) = error {
        lines.push(Line::styled(
            format!("  ⚠ {err}"),
            Style::default().fg(Color::Red),
        ));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" Save | ", hint),
        Span::styled("Alt+s", Style::default().fg(Color::Yellow)),
        Span::styled(if show_secret { " Hide | " } else { " Show | " }, hint),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" Cancel", hint),
    ]));

    frame.render_widget(
        Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: false }),
        inner,
    );
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let inner = modal_frame(frame, "Help", 60, 22);

    let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let shortcut = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ])
    };

    let languages = LanguageCatalog::all()
        .iter()
        .map(|lang| lang.name)
        .collect::<Vec<_>>()
        .join(", ");

    let lines = vec![
        Line::styled("How to play", heading),
        Line::styled(
            "Type some text, it is translated into a random language.",
            Style::default().fg(Color::White),
        ),
        Line::styled("Guess which one.", Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled("Shortcuts", heading),
        shortcut("Enter", "Translate / Submit guess"),
        shortcut("Alt+Enter", "New line"),
        shortcut("Ctrl+R / F5", "Restart after feedback"),
        shortcut("Ctrl+K", "Set API key"),
        shortcut("F1 / ?", "Help"),
        shortcut("Esc", "Clear status / Close"),
        shortcut("Alt+q", "Quit"),
        Line::from(""),
        Line::styled("Languages", heading),
        Line::styled(languages, Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::styled("Press Esc to close the help", Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(
        Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: true }),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn screen(value: &str, show_secret: bool, error: Option<&str>) -> String {
        let Ok(mut terminal) = Terminal::new(TestBackend::new(80, 24)) else {
            return String::new();
        };
        let drawn = terminal.draw(|frame| render_api_key(frame, value, show_secret, error));
        assert!(drawn.is_ok());
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn api_key_modal_renders_provider_metadata() {
        let meta = GoogleTranslateProvider::metadata();
        let text = screen("", false, None);

        assert!(text.contains(&meta.name));
        assert!(text.contains("API Key ⊖"));
        assert!(text.contains("Paste or type your API Key"));
        assert!(text.contains("GOOGLE_TRANSLATE_API_KEY overrides it when set."));
        assert!(text.contains("Translation API enabled"));
        assert!(!text.contains("Google Translate API Key"));
    }

    #[test]
    fn api_key_modal_masks_value_and_shows_error() {
        let text = screen("secret-key", false, Some("API key cannot be empty"));
        assert!(text.contains("••••••••••"));
        assert!(!text.contains("secret-key"));
        assert!(text.contains("API key cannot be empty"));

        let text = screen("secret-key", true, None);
        assert!(text.contains("secret-key"));
    }

    #[test]
    fn secrets_are_masked_by_default() {
        assert_eq!(masked("abc", false), "•••");
        assert_eq!(masked("abc", true), "abc");
        assert_eq!(masked(&"k".repeat(40), false).chars().count(), 32);
    }

    #[test]
    fn centered_rect_fits_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(56, 11, area);
        assert_eq!(rect, Rect::new(0, 0, 20, 5));

        let rect = centered_rect(10, 3, Rect::new(0, 0, 30, 9));
        assert_eq!(rect, Rect::new(10, 3, 10, 3));
    }
}
