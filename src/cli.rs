use clap::{Parser, Subcommand, builder::styling};

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

#[derive(Parser)]
#[command(name = "aicommit-rs")]
#[command(author, version, long_about = None)]
#[command(about = "AI-assisted commit-msg hook: drafts a commit message from the staged diff")]
#[command(styles = STYLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the commit-msg hook (git passes the message file path)
    Run {
        /// Path to the commit message file
        // Option<..> 而不是必选参数：参数缺失时由我们打印用法并以 0 退出，
        // 不能让 clap 以非 0 退出导致 commit 被阻塞
        commit_msg_file: Option<String>,
    },

    /// Install the commit-msg hook into the current git repository
    Install {
        /// Overwrite an existing hook not installed by aicommit-rs
        #[arg(short, long)]
        force: bool,
    },

    /// Remove the commit-msg hook installed by aicommit-rs
    Uninstall,
}
