//! # 批量执行器
//!
//! 顺序执行外部光线追踪器，每个候选文件一次。
//!
//! ## 功能
//! - 单线程同步执行，上一个子进程结束后才启动下一个
//! - 每个文件输出 `RUNNING <name>` 与 `DONE <name>` 两行
//! - 外部程序的非零退出码被忽略，仅记入统计
//! - 启动失败立即中止，剩余文件不再执行
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `models/` 中的 `TracerCommand` 与 `Verbosity`

use super::Candidate;
use crate::error::{Result, RtBatchError};
use crate::models::{TracerCommand, Verbosity};

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitStatus;

/// 批量执行统计
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// 已执行的文件数
    pub attempted: usize,
    /// 非零退出（含被信号终止）的次数
    pub nonzero_exits: usize,
}

impl BatchResult {
    /// 记录一次子进程结束
    pub fn record(&mut self, status: ExitStatus) {
        self.attempted += 1;
        if !status.success() {
            self.nonzero_exits += 1;
        }
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 外部程序
    command: TracerCommand,
    /// 子进程输出模式
    verbosity: Verbosity,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(command: TracerCommand, verbosity: Verbosity) -> Self {
        Self { command, verbosity }
    }

    /// 在 `workdir` 中依次对每个候选文件调用外部程序，进度行写入 `out`
    pub fn run<W: Write>(
        &self,
        workdir: &Path,
        candidates: &[Candidate],
        out: &mut W,
    ) -> Result<BatchResult> {
        log::debug!(
            "running '{}' ({}) on {} candidate(s) in {}",
            self.command,
            self.verbosity,
            candidates.len(),
            workdir.display()
        );

        let mut result = BatchResult::default();

        for candidate in candidates {
            let name = candidate.display_name();
            announce(out, "RUNNING", &name)?;

            let mut cmd = self.command.command_for(workdir, candidate.file_name());
            cmd.stdout(self.verbosity.child_stdout());

            let status = cmd.status().map_err(|e| self.launch_error(&name, e))?;
            log::debug!("{} exited with {}", name, status);
            result.record(status);

            announce(out, "DONE", &name)?;
        }

        log::debug!(
            "batch finished: {} attempted, {} non-zero exit(s)",
            result.attempted,
            result.nonzero_exits
        );

        Ok(result)
    }

    fn launch_error(&self, file: &str, e: io::Error) -> RtBatchError {
        if e.kind() == io::ErrorKind::NotFound {
            RtBatchError::CommandNotFound {
                command: self.command.program().to_string(),
            }
        } else {
            RtBatchError::CommandLaunchError {
                command: self.command.to_string(),
                file: file.to_string(),
                source: e,
            }
        }
    }
}

/// 写出一行进度并立即刷新，保证与子进程输出的先后顺序
fn announce<W: Write>(out: &mut W, tag: &str, name: &str) -> Result<()> {
    writeln!(out, "{} {}", tag, name).map_err(RtBatchError::ConsoleWriteError)?;
    out.flush().map_err(RtBatchError::ConsoleWriteError)
}
