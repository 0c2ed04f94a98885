use std::fmt;

/// 任务 ID
///
/// 由所属 [`TaskIdGen`] 单调递增分配，进程生命周期内不复用；只用于查找和删除，不显示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 单调递增的 ID 分配器（从 1 开始）
#[derive(Debug, Clone)]
pub struct TaskIdGen {
    next: u64,
}

impl TaskIdGen {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// 分配下一个 ID
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        id
    }
}

impl Default for TaskIdGen {
    fn default() -> Self {
        Self::new()
    }
}

/// 单个待办事项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// 去除首尾空白后的文本，创建后不可修改
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub(crate) fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}
