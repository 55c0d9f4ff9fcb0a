// Shell模块入口
pub mod command;
pub mod repl;
pub mod session;
pub mod transport;

pub use session::Shell;
pub use transport::Transport;
