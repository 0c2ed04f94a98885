use std::path::PathBuf;

use ratatui::widgets::ListState;
use tracing::{debug, warn};

use crate::board::TaskBoard;
use crate::model::TaskId;
use crate::storage::config::{self, Config, ThemeConfig};
use crate::theme::Theme;
use crate::ui_state::UiState;

/// 接收键盘输入的区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// 输入框：字符进入草稿
    Input,
    /// 任务列表：字符作为快捷键
    List,
}

/// 全局应用状态
pub struct App {
    /// 任务看板（草稿 + 任务列表）
    pub board: TaskBoard,
    /// 当前焦点
    pub focus: Focus,
    /// 列表选择状态
    pub list_state: ListState,
    /// UI 状态
    pub ui: UiState,
    /// 是否应该退出
    pub should_quit: bool,
    /// 主题切换后写回的配置文件，None 表示不保存
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            board: TaskBoard::new(),
            focus: Focus::Input,
            list_state: ListState::default(),
            ui: UiState::new(theme),
            should_quit: false,
            config_path: None,
        }
    }

    /// 设置主题持久化路径
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// 预置任务（走 AddTask，空白文本同样被忽略）
    pub fn seed_tasks<S: AsRef<str>>(&mut self, texts: &[S]) {
        for text in texts {
            self.board.set_draft(text.as_ref());
            self.board.add_task();
        }
        self.board.clear_draft();
        self.ensure_selection();
    }

    // ========== Commands ==========

    /// 提交草稿，成功时选中新任务
    pub fn submit_draft(&mut self) {
        if let Some(id) = self.board.add_task() {
            self.list_state.select(self.board.position(id));
        }
    }

    /// 翻转指定任务
    pub fn toggle_task(&mut self, id: TaskId) {
        self.board.toggle_task(id);
    }

    /// 删除指定任务，并修正选中项
    ///
    /// 被选中的任务仍在时继续选中它；只有选中的任务本身被删掉时才按行号收敛。
    pub fn delete_task(&mut self, id: TaskId) {
        let selected = self.selected_id();
        if self.board.delete_task(id).is_none() {
            return;
        }

        match selected.and_then(|sel| self.board.position(sel)) {
            Some(index) => self.list_state.select(Some(index)),
            None => self.clamp_selection(),
        }
    }

    /// 翻转当前选中的任务
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.toggle_task(id);
        }
    }

    /// 删除当前选中的任务
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.delete_task(id);
        }
    }

    // ========== Selection ==========

    /// 当前选中任务的 ID
    pub fn selected_id(&self) -> Option<TaskId> {
        let index = self.list_state.selected()?;
        self.board.tasks().get(index).map(|t| t.id)
    }

    /// 选中指定行
    pub fn select(&mut self, index: usize) {
        if index < self.board.len() {
            self.list_state.select(Some(index));
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.board.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.board.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    /// 确保列表非空时有选中项
    fn ensure_selection(&mut self) {
        if !self.board.is_empty() && self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }
    }

    /// 删除后修正选中项；列表清空时回到输入框
    fn clamp_selection(&mut self) {
        let len = self.board.len();
        if len == 0 {
            self.list_state.select(None);
            self.focus = Focus::Input;
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(current.min(len - 1)));
    }

    // ========== Focus ==========

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    /// 切到列表（列表为空时保持在输入框）
    pub fn focus_list(&mut self) {
        if self.board.is_empty() {
            return;
        }
        self.ensure_selection();
        self.focus = Focus::List;
    }

    // ========== UI ==========

    /// 切换到下一个主题并保存
    pub fn cycle_theme(&mut self) {
        let theme = self.ui.theme.next();
        self.ui.set_theme(theme);
        self.ui.show_toast(format!("Theme: {}", theme.label()));
        debug!(theme = theme.label(), "theme changed");

        if let Some(ref path) = self.config_path {
            let config = Config {
                theme: ThemeConfig {
                    name: theme.label().to_string(),
                },
            };
            if let Err(e) = config::save_config_to(path, &config) {
                warn!("failed to save config: {}", e);
                self.ui.show_toast(format!("Config not saved: {}", e));
            }
        }
    }

    pub fn toggle_help(&mut self) {
        self.ui.show_help = !self.ui.show_help;
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

// ============================================================================
// Tests
// ============================================================================
