// 库文件，导出模块
pub mod shell;
pub mod ssh;
pub mod utils;

use anyhow::Result;
use shell::Shell;
use ssh::SshTransport;

/// Start an interactive SCP shell on stdin/stdout and run it to completion.
pub fn run_shell() -> Result<()> {
    let mut shell = Shell::new(SshTransport);
    shell::repl::run(&mut shell)
}
