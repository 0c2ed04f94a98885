use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::app::{App, Focus};
use crate::ui::click_areas::ClickTarget;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.ui.clear_expired_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.ui.check_system_theme();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            // 只处理按下事件
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 帮助面板优先
    if app.ui.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc
        ) {
            app.toggle_help();
        }
        return;
    }

    match app.focus {
        Focus::Input => handle_input_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

/// 输入框获得焦点时的键盘事件
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 提交
        KeyCode::Enter => app.submit_draft(),

        // 删除字符
        KeyCode::Backspace => app.board.pop_char(),

        // 切到列表
        KeyCode::Tab | KeyCode::Down => app.focus_list(),

        // 有任务时切到列表，否则退出
        KeyCode::Esc => {
            if app.board.is_empty() {
                app.quit();
            } else {
                app.focus_list();
            }
        }

        // 输入字符
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.board.push_char(c);
        }

        _ => {}
    }
}

/// 列表获得焦点时的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 完成 / 取消完成
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => app.toggle_selected(),

        // 删除
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        // 回到输入框
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Tab => {
            app.focus_input()
        }

        // 主题
        KeyCode::Char('t') | KeyCode::Char('T') => app.cycle_theme(),

        // 帮助
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// 鼠标左键点击，命中区域来自上一帧的 ClickAreas
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || app.ui.show_help {
        return;
    }

    let Some(target) = app.ui.click_areas.hit(mouse.column, mouse.row) else {
        return;
    };

    match target {
        ClickTarget::Input => app.focus_input(),
        ClickTarget::AddButton => app.submit_draft(),
        ClickTarget::Toggle(id) => app.toggle_task(id),
        ClickTarget::Delete(id) => app.delete_task(id),
        ClickTarget::Row(index) => {
            app.focus_list();
            app.select(index);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
