//! 日志初始化
//!
//! TUI 占用了终端，所以日志写到 ~/.taskboard/taskboard.log。
//! 级别由 `TASKBOARD_LOG` 控制（EnvFilter 语法），默认 info。

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{BoardError, Result};
use crate::storage;

/// 日志级别环境变量
pub const LOG_ENV: &str = "TASKBOARD_LOG";

/// 默认日志文件路径
pub fn log_path() -> Result<PathBuf> {
    Ok(storage::ensure_app_dir()?.join("taskboard.log"))
}

/// 安装全局 subscriber，追加写入 `path`
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| BoardError::config(format!("logger already set: {}", e)))
}
