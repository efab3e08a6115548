//! # 美化输出工具
//!
//! 提供统一的终端错误输出样式。RUNNING / DONE 进度行由
//! `batch/runner.rs` 直接写出，不带颜色，便于管道处理。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印错误消息（含错误链）
pub fn print_error(err: &dyn std::error::Error) {
    eprintln!("{} {}", "[ERR]".red().bold(), err);

    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("      {} {}", "caused by:".dimmed(), cause);
        source = cause.source();
    }
}
