//! 结果页：显示译文，猜测语言

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::model::App;
use crate::view::theme::{Styles, colors};

use super::{CURSOR, button, text_lines};

/// 渲染结果页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let session = app.game.session();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // 标签
            Constraint::Min(3),    // 译文
            Constraint::Length(1), // 间隔
            Constraint::Length(4), // 猜测 / 反馈
            Constraint::Length(1), // 按钮
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::styled("Translated text", Styles::label())),
        layout[0],
    );

    let translated = Paragraph::new(text_lines(
        session.translated_text(),
        false,
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.border)),
    )
    .wrap(Wrap { trim: false });
    frame.render_widget(translated, layout[1]);

    if session.can_guess() {
        let focused = !app.modal.is_open();
        let cursor = if focused { CURSOR } else { "" };
        let guess = vec![
            Line::styled("Which language is this?", Styles::label()),
            Line::styled(
                format!("  {}{cursor}", session.user_guess()),
                Style::default().fg(c.fg),
            ),
        ];
        frame.render_widget(
            Paragraph::new(guess).block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(c.border_focused)),
            ),
            layout[3],
        );
        frame.render_widget(Paragraph::new(button("Submit Guess", true)), layout[4]);
    }

    if let Some(feedback) = session.guess_feedback() {
        let color = if feedback.is_correct {
            c.feedback_correct
        } else {
            c.feedback_incorrect
        };
        let lines = vec![
            Line::styled(format!("Your guess: {}", session.user_guess()), Styles::label()),
            Line::from(""),
            Line::styled(
                feedback.message.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ];
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            layout[3],
        );
    }

    if session.can_restart() {
        frame.render_widget(Paragraph::new(button("Restart", true)), layout[4]);
    }
}
