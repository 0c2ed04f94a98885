use ratatui::layout::Rect;

use crate::model::TaskId;

/// 鼠标点击命中的目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// 输入框
    Input,
    /// "Add Task" 按钮
    AddButton,
    /// 任务的完成状态图标
    Toggle(TaskId),
    /// 任务的删除按钮
    Delete(TaskId),
    /// 任务行其余部分 (行索引)
    Row(usize),
}

/// 每帧渲染时缓存的可点击区域
#[derive(Debug, Default, Clone)]
pub struct ClickAreas {
    pub input: Option<Rect>,
    pub add_button: Option<Rect>,
    /// 完成状态图标 (区域, 任务 ID)
    pub toggles: Vec<(Rect, TaskId)>,
    /// 删除按钮 (区域, 任务 ID)
    pub deletes: Vec<(Rect, TaskId)>,
    /// 整行 (区域, 行索引)
    pub rows: Vec<(Rect, usize)>,
}

impl ClickAreas {
    pub fn reset(&mut self) {
        self.input = None;
        self.add_button = None;
        self.toggles.clear();
        self.deletes.clear();
        self.rows.clear();
    }

    /// 查找坐标命中的目标，行内按钮优先于整行
    pub fn hit(&self, col: u16, row: u16) -> Option<ClickTarget> {
        if self.add_button.is_some_and(|r| contains(&r, col, row)) {
            return Some(ClickTarget::AddButton);
        }
        if self.input.is_some_and(|r| contains(&r, col, row)) {
            return Some(ClickTarget::Input);
        }
        if let Some((_, id)) = self.toggles.iter().find(|(r, _)| contains(r, col, row)) {
            return Some(ClickTarget::Toggle(*id));
        }
        if let Some((_, id)) = self.deletes.iter().find(|(r, _)| contains(r, col, row)) {
            return Some(ClickTarget::Delete(*id));
        }
        self.rows
            .iter()
            .find(|(r, _)| contains(r, col, row))
            .map(|(_, index)| ClickTarget::Row(*index))
    }
}

/// 检查坐标 (col, row) 是否在 Rect 内
pub fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
