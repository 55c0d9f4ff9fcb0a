// 会话状态管理：两个可选句柄 + 各命令的处理器
use crate::shell::command::{expect_args, CONNECT_USAGE, GET_USAGE, PUT_USAGE};
use crate::shell::transport::Transport;
use crate::utils::error::ShellError;

/// The session shell: one transport plus zero-or-one active connection.
///
/// `connection` and `channel` are created together by a successful `connect`
/// and released together (channel first). They are never populated partially:
/// a failed `connect` leaves both empty.
pub struct Shell<T: Transport> {
    transport: T,
    connection: Option<T::Connection>,
    channel: Option<T::Channel>,
}

impl<T: Transport> Shell<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            connection: None,
            channel: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// `connect <hostname> <username> <password>`
    ///
    /// An existing connection is closed before dialing the new host, so a
    /// repeated `connect` never leaks the previous handles. The flip side is
    /// that a failed re-dial leaves the session disconnected.
    pub fn connect(&mut self, args: &str) -> Result<String, ShellError> {
        let [hostname, username, password] = expect_args::<3>(args, CONNECT_USAGE)?;

        self.disconnect();

        let connection = self
            .transport
            .connect(hostname, username, password)
            .map_err(ShellError::ConnectFailed)?;
        let channel = match self.transport.open_channel(&connection) {
            Ok(channel) => channel,
            Err(e) => {
                // 通道打开失败：不保留半截状态
                self.transport.close_connection(connection);
                return Err(ShellError::ConnectFailed(e));
            }
        };

        self.connection = Some(connection);
        self.channel = Some(channel);
        Ok(format!("Connected to {hostname}"))
    }

    /// `put <local_path> <remote_path>`
    pub fn put(&mut self, args: &str) -> Result<String, ShellError> {
        // 连接状态检查先于参数检查
        let Some(channel) = self.channel.as_mut() else {
            return Err(ShellError::NotConnected);
        };
        let [local_path, remote_path] = expect_args::<2>(args, PUT_USAGE)?;

        self.transport
            .copy_to(channel, local_path, remote_path)
            .map_err(ShellError::CopyFailed)?;
        Ok(format!("File {local_path} copied to {remote_path}"))
    }

    /// `get <remote_path> <local_path>`
    pub fn get(&mut self, args: &str) -> Result<String, ShellError> {
        let Some(channel) = self.channel.as_mut() else {
            return Err(ShellError::NotConnected);
        };
        let [remote_path, local_path] = expect_args::<2>(args, GET_USAGE)?;

        self.transport
            .copy_from(channel, remote_path, local_path)
            .map_err(ShellError::RetrieveFailed)?;
        Ok(format!("File {remote_path} retrieved to {local_path}"))
    }

    /// `exit` and end-of-input. Releases whatever is open and returns the
    /// farewell line; safe to call with nothing connected, and again after.
    pub fn shutdown(&mut self) -> String {
        self.disconnect();
        "Goodbye!".to_string()
    }

    /// Release both handles if present, channel before the connection it is
    /// bound to. `Option::take` makes repeated release a no-op.
    fn disconnect(&mut self) {
        if let Some(channel) = self.channel.take() {
            self.transport.close_channel(channel);
        }
        if let Some(connection) = self.connection.take() {
            self.transport.close_connection(connection);
        }
    }
}
