//! # 数据模型模块
//!
//! 定义外部光线追踪器命令和输出模式的数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: command, verbosity

pub mod command;
pub mod verbosity;

pub use command::TracerCommand;
pub use verbosity::Verbosity;
