//! # 候选文件收集器
//!
//! 读取一次目录列表，保留名称以 `.txt` 结尾的条目。
//!
//! ## 功能
//! - 仅列出目录本身的条目，不递归
//! - 区分大小写的精确后缀匹配，无通配符语义
//! - 保持平台返回的列表顺序
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{Result, RtBatchError};

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use walkdir::WalkDir;

/// 测试文件后缀
pub const CANDIDATE_SUFFIX: &str = ".txt";

/// 单个候选测试文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// 目录条目名（原样传给外部程序）
    name: OsString,
}

impl Candidate {
    pub fn new(name: impl Into<OsString>) -> Self {
        Self { name: name.into() }
    }

    pub fn file_name(&self) -> &OsStr {
        &self.name
    }

    /// 用于终端显示的名称
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }

    /// 判断条目名是否为候选文件
    pub fn matches(name: &OsStr) -> bool {
        name.as_encoded_bytes()
            .ends_with(CANDIDATE_SUFFIX.as_bytes())
    }
}

/// 候选文件收集器
pub struct CandidateCollector {
    /// 工作目录
    dir: PathBuf,
}

impl CandidateCollector {
    /// 创建新的收集器
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// 收集所有候选文件，目录不可读时立即返回错误
    pub fn collect(&self) -> Result<Vec<Candidate>> {
        let walker = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        let mut candidates = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| RtBatchError::DirectoryReadError {
                path: self.dir.display().to_string(),
                source: e.into(),
            })?;

            if Candidate::matches(entry.file_name()) {
                candidates.push(Candidate::new(entry.file_name()));
            }
        }

        Ok(candidates)
    }
}
