use aicommit_rs::*;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use git::diff::GitCli;
use llm::StatusSink;
use tokio::runtime::Runtime;
use ui::ConsoleSink;

fn main() -> Result<()> {
    // reqwest (rustls-no-provider) 需要进程级 crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    let cli = Cli::parse();

    // 根据 verbose 标志设置日志级别
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // 初始化 tracing 日志
    // 写入 stderr：hook 的 stdout 留给状态输出，git 会原样展示
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // 配置损坏时退回默认值：hook 不能因为配置问题阻塞 commit
    let config = config::load_config().unwrap_or_else(|e| {
        tracing::warn!("failed to load config, using defaults: {}", e);
        Default::default()
    });

    // 创建 tokio 运行时
    let rt = Runtime::new()?;

    rt.block_on(async {
        let sink = ConsoleSink::new(config.ui.colored);

        match cli.command {
            Commands::Run { commit_msg_file } => {
                // 参数缺失：打印用法后正常退出（exit 0），不阻塞 commit
                let Some(commit_msg_file) = commit_msg_file else {
                    sink.warn("usage: aicommit-rs run <commit-msg-file>");
                    return Ok(());
                };

                // git 不在 PATH 上同样是软失败
                let git = match GitCli::new() {
                    Ok(git) => git,
                    Err(e) => {
                        sink.warn(&e.to_string());
                        return Ok(());
                    }
                };

                commands::hook::run_hook_safe(&commit_msg_file, &config, &git, &sink).await;
                Ok(())
            }
            Commands::Install { force } => {
                if let Err(e) = commands::hook::install(force) {
                    sink.warn(&e.to_string());
                    std::process::exit(1);
                }
                Ok(())
            }
            Commands::Uninstall => {
                if let Err(e) = commands::hook::uninstall() {
                    sink.warn(&e.to_string());
                    std::process::exit(1);
                }
                Ok(())
            }
        }
    })
}
