use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 截断字符串到指定最大显示宽度（按终端列计），超出部分用省略号替代
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // 省略号占 1 列
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// 保留字符串末尾、显示宽度不超过 max_width 的部分（输入框横向滚动用）
pub fn tail(s: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (i, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            return &s[i + c.len_utf8()..];
        }
        used += w;
    }
    s
}

pub mod empty_state;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod task_input;
pub mod task_list;
pub mod toast;
