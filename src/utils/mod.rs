//! # 工具函数模块
//!
//! 提供美化输出等工具。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: output

pub mod output;
