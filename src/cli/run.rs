//! # 运行参数 CLI 定义
//!
//! 输出模式与外部光线追踪器命令。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use crate::models::command::DEFAULT_TRACER;
use clap::Args;

/// 运行参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Show the ray tracer's standard output instead of discarding it
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Ray tracer command; the scene file name is appended as its last argument
    /// (e.g. 'RayTracer', 'python3 RayTracer.py')
    #[arg(short, long, default_value = DEFAULT_TRACER)]
    pub command: String,
}
