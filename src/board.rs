//! TaskBoard 核心状态
//!
//! 持有输入框草稿和有序任务列表，提供 add / toggle / delete 三个命令，
//! 以及一个纯函数 [`TaskBoard::view`] 供渲染层使用。

use tracing::debug;

use crate::model::{Task, TaskId, TaskIdGen};

/// 任务列表为空时显示的占位文字
pub const EMPTY_MESSAGE: &str = "No tasks yet. Add your first task above!";

/// 渲染用的单行描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow<'a> {
    pub id: TaskId,
    pub text: &'a str,
    pub completed: bool,
}

impl TaskRow<'_> {
    /// 完成状态图标
    pub fn icon(&self) -> &'static str {
        if self.completed {
            "✔"
        } else {
            "○"
        }
    }
}

/// 列表区域的渲染描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardView<'a> {
    /// 无任务：只显示一条占位文字
    Empty { message: &'static str },
    /// 按插入顺序排列的任务行
    List(Vec<TaskRow<'a>>),
}

/// 任务看板状态
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    draft: String,
    tasks: Vec<Task>,
    ids: TaskIdGen,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Draft ==========

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// 草稿追加字符
    pub fn push_char(&mut self, c: char) {
        self.draft.push(c);
    }

    /// 草稿删除最后一个字符
    pub fn pop_char(&mut self) {
        self.draft.pop();
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    // ========== Commands ==========

    /// 将当前草稿提交为新任务
    ///
    /// 草稿去除首尾空白后为空时什么都不做（草稿保留）。成功时追加到末尾、清空草稿并返回新 ID。
    pub fn add_task(&mut self) -> Option<TaskId> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.ids.next_id();
        self.tasks.push(Task::new(id, text.to_string()));
        self.draft.clear();
        debug!(%id, count = self.tasks.len(), "task added");
        Some(id)
    }

    /// 翻转指定任务的完成状态，ID 不存在时返回 false
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        debug!(%id, completed = task.completed, "task toggled");
        true
    }

    /// 删除指定任务，其余任务相对顺序不变
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(index);
        debug!(%id, count = self.tasks.len(), "task deleted");
        Some(task)
    }

    // ========== Queries ==========

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[cfg(test)]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// 任务在列表中的位置
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// 当前状态的渲染描述（纯函数，无副作用）
    pub fn view(&self) -> BoardView<'_> {
        if self.tasks.is_empty() {
            return BoardView::Empty {
                message: EMPTY_MESSAGE,
            };
        }

        BoardView::List(
            self.tasks
                .iter()
                .map(|t| TaskRow {
                    id: t.id,
                    text: &t.text,
                    completed: t.completed,
                })
                .collect(),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(texts: &[&str]) -> TaskBoard {
        let mut board = TaskBoard::new();
        for text in texts {
            board.set_draft(*text);
            board.add_task();
        }
        board
    }

    fn texts(board: &TaskBoard) -> Vec<&str> {
        board.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_add_trims_text() {
        let mut board = TaskBoard::new();
        board.set_draft("  Buy milk  ");
        assert!(board.add_task().is_some());

        assert_eq!(board.len(), 1);
        assert_eq!(board.tasks()[0].text, "Buy milk");
        assert!(!board.tasks()[0].completed);
        assert_eq!(board.draft(), "");
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut board = board_with(&["Existing"]);
        let before = board.tasks().to_vec();

        for blank in ["", "   ", "\t\n"] {
            board.set_draft(blank);
            assert_eq!(board.add_task(), None);
            assert_eq!(board.tasks(), before.as_slice());
            // 草稿不清空
            assert_eq!(board.draft(), blank);
        }
    }

    #[test]
    fn test_add_preserves_call_order() {
        let board = board_with(&["one", "two", "three", "four"]);
        assert_eq!(texts(&board), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_ids_are_unique_and_not_reused() {
        let mut board = board_with(&["a", "b"]);
        let last = board.tasks()[1].id;
        board.delete_task(last);

        board.set_draft("c");
        let id = board.add_task().unwrap();
        assert_ne!(id, last);
        assert!(id > last);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut board = board_with(&["a", "b"]);
        let id = board.tasks()[0].id;

        assert!(board.toggle_task(id));
        assert!(board.get(id).unwrap().completed);
        assert!(!board.tasks()[1].completed);

        assert!(board.toggle_task(id));
        assert!(!board.get(id).unwrap().completed);
        assert_eq!(texts(&board), vec!["a", "b"]);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut board = board_with(&["a", "b", "c", "d"]);
        let id = board.tasks()[1].id;

        let removed = board.delete_task(id).unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(board.len(), 3);
        assert_eq!(texts(&board), vec!["a", "c", "d"]);
        assert!(board.get(id).is_none());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut board = board_with(&["a", "b"]);
        let gone = board.tasks()[0].id;
        board.delete_task(gone);
        let before = board.tasks().to_vec();

        assert!(!board.toggle_task(gone));
        assert_eq!(board.tasks(), before.as_slice());

        assert!(board.delete_task(gone).is_none());
        assert_eq!(board.tasks(), before.as_slice());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut board = TaskBoard::new();
        assert!(board.is_empty());

        board.set_draft("Write report");
        board.add_task();
        board.set_draft("Call dentist");
        board.add_task();

        let snapshot: Vec<(&str, bool)> = board
            .tasks()
            .iter()
            .map(|t| (t.text.as_str(), t.completed))
            .collect();
        assert_eq!(
            snapshot,
            vec![("Write report", false), ("Call dentist", false)]
        );

        let first = board.tasks()[0].id;
        let second = board.tasks()[1].id;

        board.toggle_task(first);
        assert!(board.tasks()[0].completed);
        assert!(!board.tasks()[1].completed);

        board.delete_task(second);
        assert_eq!(board.len(), 1);
        assert_eq!(board.tasks()[0].text, "Write report");
        assert!(board.tasks()[0].completed);
    }

    #[test]
    fn test_view_empty_placeholder() {
        let board = TaskBoard::new();
        assert_eq!(
            board.view(),
            BoardView::Empty {
                message: EMPTY_MESSAGE
            }
        );
    }

    #[test]
    fn test_view_rows_follow_tasks() {
        let mut board = board_with(&["a", "b"]);
        let id = board.tasks()[1].id;
        board.toggle_task(id);

        let BoardView::List(rows) = board.view() else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text, "a");
        assert!(!rows[0].completed);
        assert_eq!(rows[1].id, id);
        assert!(rows[1].completed);
        assert_eq!(rows[0].icon(), "○");
        assert_eq!(rows[1].icon(), "✔");
    }

    #[test]
    fn test_completed_count() {
        let mut board = board_with(&["a", "b", "c"]);
        let ids: Vec<TaskId> = board.tasks().iter().map(|t| t.id).collect();
        board.toggle_task(ids[0]);
        board.toggle_task(ids[2]);
        assert_eq!(board.completed_count(), 2);
    }

    #[test]
    fn test_draft_editing() {
        let mut board = TaskBoard::new();
        board.push_char('h');
        board.push_char('i');
        assert_eq!(board.draft(), "hi");
        board.pop_char();
        assert_eq!(board.draft(), "h");
        board.clear_draft();
        assert_eq!(board.draft(), "");
        // 空草稿上删除不 panic
        board.pop_char();
    }
}
