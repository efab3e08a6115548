//! # 命令执行模块
//!
//! 实现命令行操作的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `models/`
//! - 子模块: run

pub mod run;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    run::execute(cli.run)
}
