//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 默认主题：明黄背景 + 深蓝文字
pub fn classic_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(255, 205, 0),         // #ffcd00
        panel: Color::Rgb(255, 255, 255),
        bg_secondary: Color::Rgb(249, 250, 251), // gray-50
        title: Color::Rgb(0, 29, 74),        // #001d4a
        highlight: Color::Rgb(255, 205, 0),
        button_fg: Color::Rgb(0, 29, 74),
        text: Color::Rgb(0, 29, 74),
        muted: Color::Rgb(156, 163, 175),    // gray-400
        border: Color::Rgb(243, 244, 246),   // gray-100
        done: Color::Rgb(255, 205, 0),
        danger: Color::Rgb(239, 68, 68),     // red-500
    }
}

/// 深色主题
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),
        panel: Color::Rgb(24, 24, 24),
        bg_secondary: Color::Rgb(48, 48, 48),
        title: Color::White,
        highlight: Color::Rgb(0, 255, 136), // 亮绿色
        button_fg: Color::Black,
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),
        border: Color::Rgb(68, 68, 68),
        done: Color::Rgb(0, 255, 136),
        danger: Color::Rgb(255, 85, 85),
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),
        panel: Color::Rgb(250, 250, 250),
        bg_secondary: Color::Rgb(230, 230, 230),
        title: Color::Rgb(30, 30, 30),
        highlight: Color::Rgb(0, 128, 68), // 深绿色
        button_fg: Color::White,
        text: Color::Rgb(30, 30, 30),
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        done: Color::Rgb(0, 150, 80),
        danger: Color::Rgb(200, 50, 50),
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),            // nord0
        panel: Color::Rgb(46, 52, 64),
        bg_secondary: Color::Rgb(59, 66, 82),  // nord1
        title: Color::Rgb(136, 192, 208),      // nord8
        highlight: Color::Rgb(136, 192, 208),
        button_fg: Color::Rgb(46, 52, 64),
        text: Color::Rgb(236, 239, 244),       // nord6
        muted: Color::Rgb(76, 86, 106),        // nord3
        border: Color::Rgb(67, 76, 94),        // nord2
        done: Color::Rgb(163, 190, 140),       // nord14
        danger: Color::Rgb(191, 97, 106),      // nord11
    }
}
