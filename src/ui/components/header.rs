use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

/// Header 高度：标题 + 副标题
pub const HEADER_HEIGHT: u16 = 2;

const TITLE: &str = "Task Manager";
const SUBTITLE: &str = "Organize your day efficiently";

/// 渲染标题区域（标题、副标题、完成计数）
pub fn render(frame: &mut Frame, area: Rect, done: usize, total: usize, colors: &ThemeColors) {
    let [title_area, subtitle_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let left = Span::styled(
        format!(" ☰  {}", TITLE),
        Style::default()
            .fg(colors.title)
            .add_modifier(Modifier::BOLD),
    );
    let right = Span::styled(
        format!("{}/{} done ", done, total),
        Style::default().fg(colors.muted),
    );

    // 计算中间填充空格
    let padding_len = (title_area.width as usize).saturating_sub(left.width() + right.width());
    let line = Line::from(vec![left, Span::raw(" ".repeat(padding_len)), right]);
    frame.render_widget(Paragraph::new(line), title_area);

    let subtitle = Line::from(Span::styled(
        format!("    {}", SUBTITLE),
        Style::default().fg(colors.muted),
    ));
    frame.render_widget(Paragraph::new(subtitle), subtitle_area);
}
