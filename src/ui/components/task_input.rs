//! 输入框 + "Add Task" 按钮

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::tail;
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

/// 输入行高度（带边框）
pub const INPUT_HEIGHT: u16 = 3;

const PLACEHOLDER: &str = "Add a new task...";
const BUTTON_LABEL: &str = "+ Add Task";

/// 渲染输入行
pub fn render(
    frame: &mut Frame,
    area: Rect,
    draft: &str,
    focused: bool,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let button_width = BUTTON_LABEL.chars().count() as u16 + 4;
    let [input_area, _, button_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(button_width),
    ])
    .areas(area);

    // 输入框
    let border_color = if focused { colors.highlight } else { colors.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(input_area);
    frame.render_widget(block, input_area);

    let cursor = if focused {
        Span::styled("█", Style::default().fg(colors.highlight))
    } else {
        Span::raw("")
    };

    let line = if draft.is_empty() {
        Line::from(vec![
            Span::raw(" "),
            cursor,
            Span::styled(PLACEHOLDER, Style::default().fg(colors.muted)),
        ])
    } else {
        // 光标和左边距占 2 列
        let visible = tail(draft, (inner.width as usize).saturating_sub(2));
        Line::from(vec![
            Span::raw(" "),
            Span::styled(visible, Style::default().fg(colors.text)),
            cursor,
        ])
    };
    frame.render_widget(Paragraph::new(line), inner);

    // 按钮
    let button = Paragraph::new(Line::from(Span::styled(
        BUTTON_LABEL,
        Style::default()
            .fg(colors.button_fg)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.highlight))
            .style(Style::default().bg(colors.highlight)),
    );
    frame.render_widget(button, button_area);

    click_areas.input = Some(input_area);
    click_areas.add_button = Some(button_area);
}
