//! 快捷键帮助面板

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 帮助面板宽度
const PANEL_WIDTH: u16 = 40;

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let area = frame.area();
    let lines = build_help_lines(colors);
    let panel_height = lines.len() as u16 + 2;

    // 居中计算
    let x = area.x + area.width.saturating_sub(PANEL_WIDTH) / 2;
    let y = area.y + area.height.saturating_sub(panel_height) / 2;
    let panel_area = Rect::new(
        x,
        y,
        PANEL_WIDTH.min(area.width),
        panel_height.min(area.height),
    );

    // 清除背景
    frame.render_widget(Clear, panel_area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.panel));

    frame.render_widget(Paragraph::new(lines).block(block), panel_area);
}

/// 构建帮助内容行
fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        section_header("Input", colors),
        key_line("type", "Edit the new task", colors),
        key_line("Enter", "Add task", colors),
        key_line("Tab / ↓", "Go to the list", colors),
        Line::from(""),
        section_header("List", colors),
        key_line("j / ↓", "Move down", colors),
        key_line("k / ↑", "Move up", colors),
        key_line("Space", "Toggle done", colors),
        key_line("d / Del", "Delete task", colors),
        key_line("i / Tab", "Back to input", colors),
        Line::from(""),
        section_header("Other", colors),
        key_line("t", "Next theme", colors),
        key_line("click", "Toggle / delete / add", colors),
        key_line("q / ^C", "Quit", colors),
        key_line("?", "Close help", colors),
    ]
}

fn section_header(title: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(colors.title)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &'static str, desc: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("   {:<10}", key),
            Style::default().fg(colors.highlight),
        ),
        Span::styled(desc, Style::default().fg(colors.text)),
    ])
}
