// 交互式循环：读行、分发、打印结果
use crate::shell::command::{Command, HELP};
use crate::shell::session::Shell;
use crate::shell::transport::Transport;
use crate::utils::error::ShellError;
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub const PROMPT: &str = "(scp) ";
const BANNER: &str = "Welcome to the SCP shell. Type help or ? to list commands.";

/// Run the interactive loop until `exit` or end-of-input.
///
/// Handlers return typed results; this loop's only job is reading lines,
/// routing, and printing. No command failure terminates the process.
pub fn run<T: Transport>(shell: &mut Shell<T>) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    println!("{BANNER}");
    println!();

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match Command::parse(line) {
                    Command::Connect(args) => report(shell.connect(args)),
                    Command::Put(args) => report(shell.put(args)),
                    Command::Get(args) => report(shell.get(args)),
                    Command::Exit => {
                        println!("{}", shell.shutdown());
                        break;
                    }
                    Command::Help(topic) => print_help(topic),
                    Command::Unknown(keyword) => {
                        println!("Unknown command: {keyword}. Type 'help' to list commands.");
                    }
                }
            }
            // Ctrl+D 和 Ctrl+C 都按 exit 处理
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => {
                println!("{}", shell.shutdown());
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn report(result: Result<String, ShellError>) {
    match result {
        Ok(message) => println!("{message}"),
        Err(e) => println!("{e}"),
    }
}

fn print_help(topic: &str) {
    if topic.is_empty() {
        println!("Available commands:");
        for (name, description) in HELP {
            println!("  {name:<10}{description}");
        }
        return;
    }
    match HELP.iter().find(|(name, _)| *name == topic) {
        Some((_, description)) => println!("{description}"),
        None => println!("No help for '{topic}'."),
    }
}
