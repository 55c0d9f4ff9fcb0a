// SSH客户端封装
use crate::utils::error::TransportError;
use log::debug;
use ssh2::Session;
use std::net::TcpStream;

pub struct SshClient {
    session: Session,
}

impl SshClient {
    /// Dial the host and authenticate with a password. The hostname may
    /// carry an explicit `host:port`; otherwise port 22 is used. Host keys
    /// are not verified, unknown hosts are accepted.
    pub fn connect(
        hostname: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, TransportError> {
        let addr = if hostname.contains(':') {
            hostname.to_string()
        } else {
            format!("{hostname}:22")
        };
        debug!("connecting to {addr}");
        let tcp = TcpStream::connect(&addr)?;

        let mut session = Session::new()?;
        session.set_tcp_stream(tcp);
        session.handshake()?;
        debug!("SSH handshake completed, authenticating as {username}");

        session.userauth_password(username, password)?;
        if !session.authenticated() {
            return Err(TransportError::AuthenticationFailed);
        }
        debug!("authentication successful");

        Ok(SshClient { session })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Send an SSH disconnect. Errors are ignored, the peer may already be gone.
    pub fn disconnect(&self) {
        let _ = self
            .session
            .disconnect(None, "closing session", None);
    }
}
