use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};

use super::truncate;
use crate::board::TaskRow;
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

const DELETE_ICON: &str = "✕";

/// 渲染任务列表，每个任务一行：选择器、完成图标、文本、删除按钮
pub fn render(
    frame: &mut Frame,
    area: Rect,
    rows: &[TaskRow<'_>],
    selected: Option<usize>,
    focused: bool,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let height = area.height as usize;
    if height == 0 {
        return;
    }

    // 选中行超出可视范围时向下滚动
    let offset = match selected {
        Some(sel) if sel >= height => sel + 1 - height,
        _ => 0,
    };

    for (i, row) in rows.iter().enumerate().skip(offset).take(height) {
        let row_area = Rect {
            x: area.x,
            y: area.y + (i - offset) as u16,
            width: area.width,
            height: 1,
        };
        let is_selected = selected == Some(i);
        render_row(frame, row_area, row, is_selected, focused, colors);

        let [_, toggle_area, _, delete_area] = row_columns(row_area);
        click_areas.rows.push((row_area, i));
        click_areas.toggles.push((toggle_area, row.id));
        click_areas.deletes.push((delete_area, row.id));
    }
}

fn row_columns(area: Rect) -> [Rect; 4] {
    Layout::horizontal([
        Constraint::Length(2), // 选择器
        Constraint::Length(3), // 完成图标
        Constraint::Fill(1),   // 文本
        Constraint::Length(3), // 删除按钮
    ])
    .areas(area)
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    row: &TaskRow<'_>,
    is_selected: bool,
    focused: bool,
    colors: &ThemeColors,
) {
    // 已完成行使用次级背景
    let bg = if row.completed {
        colors.bg_secondary
    } else {
        colors.panel
    };
    frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

    let [selector_area, toggle_area, text_area, delete_area] = row_columns(area);

    let selector = if is_selected && focused { "❯" } else { " " };
    frame.render_widget(
        Paragraph::new(Span::styled(selector, Style::default().fg(colors.highlight))),
        selector_area,
    );

    let icon_style = if row.completed {
        Style::default().fg(colors.done).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.muted)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {} ", row.icon()), icon_style)),
        toggle_area,
    );

    let mut text_style = if row.completed {
        Style::default()
            .fg(colors.muted)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(colors.text)
    };
    if is_selected && focused {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    let text = truncate(row.text, text_area.width as usize);
    frame.render_widget(Paragraph::new(Span::styled(text, text_style)), text_area);

    let delete_color = if is_selected { colors.danger } else { colors.muted };
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {} ", DELETE_ICON),
            Style::default().fg(delete_color),
        )),
        delete_area,
    );
}
