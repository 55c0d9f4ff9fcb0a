// 传输协作方接口
use crate::utils::error::TransportError;

/// The capability the shell needs from an SSH/SCP implementation.
///
/// A `Connection` is an authenticated session with a remote host; a `Channel`
/// is the file-copy facility opened on top of it. The shell creates the two
/// together and releases them together, channel first.
pub trait Transport {
    type Connection;
    type Channel;

    /// Establish an authenticated session. Unknown host keys are accepted
    /// automatically; there is no verification gate.
    fn connect(
        &self,
        hostname: &str,
        username: &str,
        password: &str,
    ) -> Result<Self::Connection, TransportError>;

    /// Open a file-transfer channel bound to an established connection.
    fn open_channel(&self, connection: &Self::Connection)
        -> Result<Self::Channel, TransportError>;

    /// Copy a local file to a remote path.
    fn copy_to(
        &self,
        channel: &mut Self::Channel,
        local_path: &str,
        remote_path: &str,
    ) -> Result<(), TransportError>;

    /// Copy a remote file to a local path.
    fn copy_from(
        &self,
        channel: &mut Self::Channel,
        remote_path: &str,
        local_path: &str,
    ) -> Result<(), TransportError>;

    /// Release a channel. Consumes the handle, so release happens once.
    fn close_channel(&self, channel: Self::Channel);

    /// Release a connection.
    fn close_connection(&self, connection: Self::Connection);
}
