//! TaskBoard 统一错误类型定义
//!
//! 任务操作本身没有错误路径（非法输入和未知 ID 都是 no-op），
//! 这里只覆盖配置文件、日志文件等外围 I/O。

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    /// I/O 错误（文件读写、目录操作等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;

impl BoardError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
