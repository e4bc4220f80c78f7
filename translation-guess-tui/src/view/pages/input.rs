//! 输入页：输入原文并发起翻译

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::model::App;
use crate::view::theme::{Styles, colors};

use super::{button, text_lines};

/// 渲染输入页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let session = app.game.session();
    let loading = session.is_loading();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // 标签
            Constraint::Min(3),    // 文本框
            Constraint::Length(1), // 间隔
            Constraint::Length(1), // 按钮
            Constraint::Length(2), // 错误信息
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::styled("Text to translate", Styles::label())),
        layout[0],
    );

    // 文本框：翻译进行中时不显示光标
    let focused = !loading && !app.modal.is_open();
    let border_style = if focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };
    let textarea = Paragraph::new(text_lines(
        session.input_text(),
        focused,
        Style::default().fg(c.fg),
    ))
    .block(Block::default().borders(Borders::ALL).border_style(border_style))
    .wrap(Wrap { trim: false });
    frame.render_widget(textarea, layout[1]);

    let label = if loading { "Translating..." } else { "Translate" };
    frame.render_widget(Paragraph::new(button(label, !loading)), layout[3]);

    if let Some(error) = session.error_message() {
        frame.render_widget(
            Paragraph::new(Line::styled(format!("  {error}"), Style::default().fg(c.error))),
            layout[4],
        );
    }
}
