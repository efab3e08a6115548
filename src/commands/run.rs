//! # run 命令实现
//!
//! 对当前工作目录中的每个 `.txt` 文件调用一次外部光线追踪器。
//!
//! ## 功能
//! - 解析外部命令配置
//! - 扫描一次当前目录
//! - 顺序执行并输出进度行
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `batch/`, `models/`

use crate::batch::{BatchResult, BatchRunner, CandidateCollector};
use crate::cli::run::RunArgs;
use crate::error::{Result, RtBatchError};
use crate::models::{TracerCommand, Verbosity};

use std::io::Write;
use std::path::Path;

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<()> {
    let command = TracerCommand::parse(&args.command)?;
    let verbosity = Verbosity::from_flag(args.verbose);

    let cwd = std::env::current_dir().map_err(|e| RtBatchError::DirectoryReadError {
        path: ".".to_string(),
        source: e,
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_all(&cwd, command, verbosity, &mut out)?;

    Ok(())
}

/// 扫描 `dir` 并对所有候选文件运行外部程序
pub fn run_all<W: Write>(
    dir: &Path,
    command: TracerCommand,
    verbosity: Verbosity,
    out: &mut W,
) -> Result<BatchResult> {
    let candidates = CandidateCollector::new(dir).collect()?;
    log::debug!("found {} candidate(s) in {}", candidates.len(), dir.display());

    BatchRunner::new(command, verbosity).run(dir, &candidates, out)
}
