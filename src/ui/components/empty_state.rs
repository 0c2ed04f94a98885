use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染空列表占位文字（垂直居中）
pub fn render(frame: &mut Frame, area: Rect, message: &str, colors: &ThemeColors) {
    let [_, content_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    let paragraph = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(colors.muted),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, content_area);
}
