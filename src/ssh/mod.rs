// SSH模块入口
pub mod client;
pub mod scp;

pub use client::SshClient;
pub use scp::ScpChannel;

use crate::shell::Transport;
use crate::utils::error::TransportError;

/// ssh2-backed implementation of the shell's transport capability.
pub struct SshTransport;

impl Transport for SshTransport {
    type Connection = SshClient;
    type Channel = ScpChannel;

    fn connect(
        &self,
        hostname: &str,
        username: &str,
        password: &str,
    ) -> Result<SshClient, TransportError> {
        SshClient::connect(hostname, username, password)
    }

    fn open_channel(&self, connection: &SshClient) -> Result<ScpChannel, TransportError> {
        ScpChannel::open(connection)
    }

    fn copy_to(
        &self,
        channel: &mut ScpChannel,
        local_path: &str,
        remote_path: &str,
    ) -> Result<(), TransportError> {
        channel.put(local_path, remote_path)
    }

    fn copy_from(
        &self,
        channel: &mut ScpChannel,
        remote_path: &str,
        local_path: &str,
    ) -> Result<(), TransportError> {
        channel.get(remote_path, local_path)
    }

    fn close_channel(&self, channel: ScpChannel) {
        drop(channel);
    }

    fn close_connection(&self, connection: SshClient) {
        connection.disconnect();
    }
}
