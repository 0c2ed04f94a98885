mod colors;
mod detect;

use ratatui::style::Color;

pub use colors::*;
pub use detect::detect_system_theme;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// 黄底深蓝字的默认配色
    #[default]
    Classic,
    Auto,
    Dark,
    Light,
    Nord,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Auto => "Auto",
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Nord => "Nord",
        }
    }

    /// 所有主题列表
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Classic,
            Theme::Auto,
            Theme::Dark,
            Theme::Light,
            Theme::Nord,
        ]
    }

    /// 下一个主题（循环）
    pub fn next(&self) -> Theme {
        let themes = Theme::all();
        let index = themes.iter().position(|t| t == self).unwrap_or(0);
        themes[(index + 1) % themes.len()]
    }

    /// 从名称创建主题（用于配置加载），大小写不敏感，未知名称返回 None
    pub fn from_name(name: &str) -> Option<Self> {
        Theme::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(name.trim()))
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 面板背景色（卡片）
    pub panel: Color,
    /// 次级背景色（已完成行、选中行）
    pub bg_secondary: Color,
    /// 标题颜色
    pub title: Color,
    /// 高亮色（焦点边框、快捷键、按钮）
    pub highlight: Color,
    /// 按钮文字
    pub button_fg: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（占位符、已完成任务）
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 已完成图标
    pub done: Color,
    /// 删除按钮
    pub danger: Color,
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Classic => classic_colors(),
        Theme::Auto => auto_colors(detect_system_theme()),
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
        Theme::Nord => nord_colors(),
    }
}

/// Auto 主题在已知深浅色时的配色
pub fn auto_colors(dark: bool) -> ThemeColors {
    if dark {
        dark_colors()
    } else {
        light_colors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trip() {
        for theme in Theme::all() {
            assert_eq!(Theme::from_name(theme.label()), Some(*theme));
        }
        assert_eq!(Theme::from_name("nord"), Some(Theme::Nord));
        assert_eq!(Theme::from_name("Solarized"), None);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut theme = Theme::default();
        for _ in 0..Theme::all().len() {
            theme = theme.next();
        }
        assert_eq!(theme, Theme::default());
        assert_eq!(Theme::Nord.next(), Theme::Classic);
    }

    #[test]
    fn test_auto_colors_follow_darkness() {
        assert_eq!(auto_colors(true).bg, dark_colors().bg);
        assert_eq!(auto_colors(false).bg, light_colors().bg);
    }
}
