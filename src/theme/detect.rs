//! 终端 / 系统深浅色检测

use std::process::Command;

/// 检测当前是否为深色环境
///
/// 优先读取终端设置的 `COLORFGBG`（如 "15;0"），其次在 macOS 上询问 AppleInterfaceStyle。
/// 都拿不到时按浅色处理。
pub fn detect_system_theme() -> bool {
    detect_from(std::env::var("COLORFGBG").ok().as_deref())
}

fn detect_from(colorfgbg: Option<&str>) -> bool {
    if let Some(dark) = colorfgbg.and_then(dark_from_colorfgbg) {
        return dark;
    }

    // 其他平台没有 `defaults`，不必每次轮询都起一个注定失败的进程
    if cfg!(not(target_os = "macos")) {
        return false;
    }

    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
        })
        .unwrap_or(false)
}

/// 解析 `COLORFGBG`：最后一段是背景色索引，0-6 和 8 视为深色背景
fn dark_from_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}
