//! # 统一错误处理模块
//!
//! 定义 rtbatch 的所有错误类型，使用 `thiserror` 派生。
//!
//! 外部程序的非零退出码不属于错误，不在此处建模。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// rtbatch 统一错误类型
#[derive(Error, Debug)]
pub enum RtBatchError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read directory: {path}")]
    DirectoryReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to console")]
    ConsoleWriteError(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("Failed to launch external command '{command}' for {file}")]
    CommandLaunchError {
        command: String,
        file: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, RtBatchError>;
