//! 页面视图

pub mod input;
pub mod result;

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::theme::Styles;

/// 输入框中的光标
pub(crate) const CURSOR: &str = "▎";

/// 按钮行，例如 `[ Translate ]`
pub(crate) fn button(label: &str, enabled: bool) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("[ {label} ]"), Styles::button(enabled)),
    ])
}

/// 多行文本输入框的内容，`focused` 时在末尾显示光标
pub(crate) fn text_lines(text: &str, focused: bool, style: Style) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = text
        .split('\n')
        .map(|line| Line::styled(format!("  {line}"), style))
        .collect();

    if focused && let Some(last) = lines.last_mut() {
        last.push_span(Span::styled(CURSOR, style));
    }
    lines
}
