//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! 只有一个操作：对当前目录下所有 `.txt` 文件运行外部光线追踪器，
//! 参数定义在 `run.rs` 中并展开到顶层。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: run

pub mod run;

use clap::Parser;

/// rtbatch - 光线追踪器批量测试运行器
#[derive(Parser, Debug)]
#[command(name = "rtbatch")]
#[command(version)]
#[command(
    about = "Run an external ray tracer once for every .txt file in the current directory",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub run: run::RunArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::command::DEFAULT_TRACER;

    #[test]
    fn test_defaults_are_quiet_raytracer() {
        let cli = Cli::try_parse_from(["rtbatch"]).unwrap();
        assert!(!cli.run.verbose);
        assert_eq!(cli.run.command, DEFAULT_TRACER);
    }

    #[test]
    fn test_verbose_and_command() {
        let cli =
            Cli::try_parse_from(["rtbatch", "-v", "--command", "python3 RayTracer.py"]).unwrap();
        assert!(cli.run.verbose);
        assert_eq!(cli.run.command, "python3 RayTracer.py");
    }

    #[test]
    fn test_rejects_positional_path() {
        assert!(Cli::try_parse_from(["rtbatch", "scenes/"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
