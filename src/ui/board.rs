//! TaskBoard 页面渲染

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Borders, Padding, Widget},
    Frame,
};

use crate::app::{App, Focus};
use crate::board::BoardView;

use super::components::{
    empty_state, footer, header, help_panel, task_input, task_list, toast,
};

/// 卡片最大宽度
const CARD_MAX_WIDTH: u16 = 84;

/// 渲染整个页面，同时填充本帧的点击区域
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.ui.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [_, main_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let card_width = CARD_MAX_WIDTH.min(main_area.width.saturating_sub(2));
    let [_, card_area, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(card_width),
        Constraint::Fill(1),
    ])
    .areas(main_area);

    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(colors.panel));
    let inner = card.inner(card_area);
    frame.render_widget(card, card_area);

    let [_, header_area, _, input_area, _, list_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(task_input::INPUT_HEIGHT),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    header::render(
        frame,
        header_area,
        app.board.completed_count(),
        app.board.len(),
        &colors,
    );

    task_input::render(
        frame,
        input_area,
        app.board.draft(),
        app.focus == Focus::Input,
        &colors,
        &mut app.ui.click_areas,
    );

    match app.board.view() {
        BoardView::Empty { message } => empty_state::render(frame, list_area, message, &colors),
        BoardView::List(rows) => task_list::render(
            frame,
            list_area,
            &rows,
            app.list_state.selected(),
            app.focus == Focus::List,
            &colors,
            &mut app.ui.click_areas,
        ),
    }

    footer::render(
        frame,
        footer_area,
        app.focus,
        !app.board.is_empty(),
        &colors,
    );

    // 渲染 Toast
    if let Some(ref t) = app.ui.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, &colors);
        }
    }

    // 渲染帮助面板
    if app.ui.show_help {
        help_panel::render(frame, &colors);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::EMPTY_MESSAGE;
    use crate::theme::Theme;
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Modifier, Terminal};

    fn draw(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        app.ui.click_areas.reset();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_empty_board_shows_placeholder() {
        let mut app = App::new(Theme::Classic);
        let text = screen_text(&draw(&mut app));

        assert!(text.contains("Task Manager"));
        assert!(text.contains("Add a new task..."));
        assert!(text.contains("+ Add Task"));
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(app.ui.click_areas.rows.is_empty());
        assert!(app.ui.click_areas.add_button.is_some());
    }

    #[test]
    fn test_tasks_replace_placeholder() {
        let mut app = App::new(Theme::Classic);
        app.seed_tasks(&["Write report", "Call dentist"]);
        let text = screen_text(&draw(&mut app));

        assert!(!text.contains(EMPTY_MESSAGE));
        let first = text.find("Write report").unwrap();
        let second = text.find("Call dentist").unwrap();
        assert!(first < second);
        assert!(text.contains("0/2 done"));
        assert_eq!(app.ui.click_areas.toggles.len(), 2);
        assert_eq!(app.ui.click_areas.deletes.len(), 2);
    }

    #[test]
    fn test_completed_task_is_struck_through() {
        let mut app = App::new(Theme::Classic);
        app.seed_tasks(&["Write report", "Call dentist"]);
        let id = app.board.tasks()[0].id;
        app.toggle_task(id);
        let buffer = draw(&mut app);

        let (row_rect, _) = app.ui.click_areas.rows[0];
        let struck = (row_rect.left()..row_rect.right())
            .any(|x| buffer[(x, row_rect.y)].modifier.contains(Modifier::CROSSED_OUT));
        assert!(struck);

        let (open_rect, _) = app.ui.click_areas.rows[1];
        let open_struck = (open_rect.left()..open_rect.right())
            .any(|x| buffer[(x, open_rect.y)].modifier.contains(Modifier::CROSSED_OUT));
        assert!(!open_struck);

        assert!(screen_text(&buffer).contains("1/2 done"));
    }

    #[test]
    fn test_click_areas_drive_commands() {
        let mut app = App::new(Theme::Classic);
        app.seed_tasks(&["Write report", "Call dentist"]);
        draw(&mut app);

        let (toggle, first) = app.ui.click_areas.toggles[0];
        let (delete, second) = app.ui.click_areas.deletes[1];
        assert_eq!(first, app.board.tasks()[0].id);
        assert_eq!(second, app.board.tasks()[1].id);

        app.toggle_task(first);
        app.delete_task(second);
        assert!(toggle.width > 0 && delete.width > 0);

        let text = screen_text(&draw(&mut app));
        assert!(text.contains("Write report"));
        assert!(!text.contains("Call dentist"));
        assert!(text.contains("✔"));
    }

    #[test]
    fn test_wide_task_text_gets_ellipsis() {
        let mut app = App::new(Theme::Classic);
        app.seed_tasks(&["写季度报告".repeat(8)]);
        let text = screen_text(&draw(&mut app));

        let row = text.lines().find(|l| l.contains('写')).unwrap();
        assert!(row.contains('…'));
        assert!(row.contains('✕'));
    }

    #[test]
    fn test_draft_and_help_render() {
        let mut app = App::new(Theme::Dark);
        app.board.set_draft("Buy milk");
        app.toggle_help();
        let text = screen_text(&draw(&mut app));

        assert!(text.contains("Buy milk"));
        assert!(!text.contains("Add a new task..."));
        assert!(text.contains("Help"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = App::new(Theme::Classic);
        app.seed_tasks(&["a", "b", "c"]);
        app.ui.show_toast("Theme: Classic");
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
    }
}
