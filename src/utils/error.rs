use thiserror::Error;

/// 传输层错误：SSH/SCP协作方返回的失败
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("SSH error: {0}")]
    SshError(#[from] ssh2::Error),
}

/// Shell层错误：命令处理器的类型化结果。
/// Display 字符串就是打印给用户的整行诊断。
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Invalid arguments. Usage: {0}")]
    Usage(&'static str),

    #[error("Not connected. Use 'connect' first.")]
    NotConnected,

    #[error("Failed to connect: {0}")]
    ConnectFailed(TransportError),

    #[error("Failed to copy file: {0}")]
    CopyFailed(TransportError),

    #[error("Failed to retrieve file: {0}")]
    RetrieveFailed(TransportError),
}
