pub mod config;

use std::path::PathBuf;

use crate::error::{BoardError, Result};

/// 获取 ~/.taskboard/ 目录路径
pub fn app_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".taskboard"))
        .ok_or_else(|| BoardError::config("cannot find home directory"))
}

/// 确保 ~/.taskboard/ 目录存在
pub fn ensure_app_dir() -> Result<PathBuf> {
    let dir = app_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
