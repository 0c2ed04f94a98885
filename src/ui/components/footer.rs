use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::Focus;
use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(frame: &mut Frame, area: Rect, focus: Focus, has_items: bool, colors: &ThemeColors) {
    let shortcuts = get_shortcuts(focus, has_items);

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn get_shortcuts(focus: Focus, has_items: bool) -> Vec<(&'static str, &'static str)> {
    match focus {
        Focus::Input => {
            if has_items {
                vec![("Enter", "add"), ("Tab", "list"), ("Esc", "list"), ("^C", "quit")]
            } else {
                vec![("Enter", "add"), ("Esc", "quit")]
            }
        }
        Focus::List => vec![
            ("Space", "toggle"),
            ("d", "delete"),
            ("i", "input"),
            ("t", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ],
    }
}
