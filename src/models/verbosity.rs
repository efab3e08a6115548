//! # 输出模式
//!
//! 控制外部程序的标准输出是丢弃还是直接显示在终端。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用

use std::process::Stdio;

/// 外部程序标准输出的处理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// 丢弃外部程序输出
    #[default]
    Quiet,
    /// 继承当前终端输出
    Verbose,
}

impl Verbosity {
    /// 由 `--verbose` 开关构造
    pub fn from_flag(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Quiet
        }
    }

    /// 子进程 stdout 的连接方式
    pub fn child_stdout(self) -> Stdio {
        match self {
            Verbosity::Quiet => Stdio::null(),
            Verbosity::Verbose => Stdio::inherit(),
        }
    }
}

impl std::fmt::Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verbosity::Quiet => write!(f, "quiet"),
            Verbosity::Verbose => write!(f, "verbose"),
        }
    }
}
