//! # 批量处理模块
//!
//! 逐个将测试场景文件交给外部光线追踪器执行。
//!
//! ## 功能
//! - 枚举工作目录中的 `.txt` 候选文件
//! - 顺序启动外部程序并等待其结束
//! - 输出 RUNNING / DONE 进度行
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 使用 `walkdir` 列出目录
//! - 使用 `models/` 中的命令与输出模式

pub mod collector;
pub mod runner;

pub use collector::{Candidate, CandidateCollector};
pub use runner::{BatchResult, BatchRunner};
