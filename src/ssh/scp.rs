// SCP文件传输通道
use crate::ssh::SshClient;
use crate::utils::error::TransportError;
use log::debug;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// File-copy facility layered on an established SSH session. Holds its own
/// handle to the underlying session, so it stays usable for the lifetime of
/// the connection it was opened from.
pub struct ScpChannel {
    session: ssh2::Session,
}

impl ScpChannel {
    pub fn open(client: &SshClient) -> Result<Self, TransportError> {
        Ok(ScpChannel {
            session: client.session().clone(),
        })
    }

    /// Copy a local file to the remote path via `scp -t`.
    pub fn put(&self, local_path: &str, remote_path: &str) -> Result<(), TransportError> {
        let mut file = File::open(local_path)?;
        let size = file.metadata()?.len();
        debug!("scp put {local_path} -> {remote_path} ({size} bytes)");

        let mut channel = self
            .session
            .scp_send(Path::new(remote_path), 0o644, size, None)?;
        io::copy(&mut file, &mut channel)?;
        channel.send_eof()?;
        channel.wait_eof()?;
        channel.close()?;
        channel.wait_close()?;
        Ok(())
    }

    /// Copy a remote file to the local path via `scp -f`.
    pub fn get(&self, remote_path: &str, local_path: &str) -> Result<(), TransportError> {
        let (mut channel, stat) = self.session.scp_recv(Path::new(remote_path))?;
        debug!("scp get {remote_path} -> {local_path} ({} bytes)", stat.size());

        let mut file = File::create(local_path)?;
        // 不能读超过 stat.size()，后面跟着的是协议数据
        io::copy(&mut (&mut channel).take(stat.size()), &mut file)?;
        channel.send_eof()?;
        channel.wait_eof()?;
        channel.close()?;
        channel.wait_close()?;
        Ok(())
    }
}
