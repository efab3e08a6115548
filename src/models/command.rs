//! # 外部光线追踪器命令
//!
//! 将配置字符串（如 `RayTracer` 或 `python3 RayTracer.py`）拆分为
//! 可执行程序与前置参数，并为每个测试文件构造子进程命令。
//!
//! ## 依赖关系
//! - 被 `cli/run.rs` 的参数经 `commands/run.rs` 构造
//! - 被 `batch/runner.rs` 使用

use crate::error::{Result, RtBatchError};

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

/// 默认的外部程序名（Windows 下 `Command` 会自动补全 `.exe`）
pub const DEFAULT_TRACER: &str = "RayTracer";

/// 外部光线追踪器调用配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracerCommand {
    /// 可执行程序（或解释器）
    program: String,
    /// 位于文件名之前的参数，如脚本路径
    prefix_args: Vec<String>,
}

impl TracerCommand {
    /// 解析以空白分隔的命令字符串
    pub fn parse(spec: &str) -> Result<Self> {
        let mut parts = spec.split_whitespace().map(str::to_string);

        let program = parts.next().ok_or_else(|| {
            RtBatchError::InvalidArgument("tracer command must not be empty".to_string())
        })?;

        Ok(Self {
            program,
            prefix_args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn prefix_args(&self) -> &[String] {
        &self.prefix_args
    }

    /// 为单个测试文件构造子进程命令，文件名作为最后一个参数
    pub fn command_for(&self, workdir: &Path, file_name: &OsStr) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.prefix_args)
            .arg(file_name)
            .current_dir(workdir);
        cmd
    }
}

impl Default for TracerCommand {
    fn default() -> Self {
        TracerCommand {
            program: DEFAULT_TRACER.to_string(),
            prefix_args: vec![],
        }
    }
}

impl std::fmt::Display for TracerCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.prefix_args() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_executable() {
        let cmd = TracerCommand::parse("RayTracer").unwrap();
        assert_eq!(cmd.program(), "RayTracer");
        assert!(cmd.prefix_args().is_empty());
        assert_eq!(cmd, TracerCommand::default());
    }

    #[test]
    fn test_parse_interpreter_prefix() {
        let cmd = TracerCommand::parse("  python3   RayTracer.py ").unwrap();
        assert_eq!(cmd.program(), "python3");
        assert_eq!(cmd.prefix_args(), ["RayTracer.py".to_string()]);
        assert_eq!(cmd.to_string(), "python3 RayTracer.py");
    }

    #[test]
    fn test_parse_blank_rejected() {
        assert!(matches!(
            TracerCommand::parse(""),
            Err(RtBatchError::InvalidArgument(_))
        ));
        assert!(matches!(
            TracerCommand::parse(" \t "),
            Err(RtBatchError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_command_for_appends_file_name() {
        let tracer = TracerCommand::parse("python3 RayTracer.py").unwrap();
        let cmd = tracer.command_for(Path::new("/tmp"), OsStr::new("scene.txt"));

        assert_eq!(cmd.get_program(), "python3");
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(args, [OsStr::new("RayTracer.py"), OsStr::new("scene.txt")]);
        assert_eq!(cmd.get_current_dir(), Some(Path::new("/tmp")));
    }
}
