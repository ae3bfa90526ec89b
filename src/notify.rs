// src/notify.rs

//! Service manager readiness notification (`sd_notify` datagram protocol).

use anyhow::{Context, Result};
use log::{debug, warn};
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::net::UnixDatagram;
use std::path::Path;

pub const NOTIFY_SOCKET_ENV: &str = "NOTIFY_SOCKET";

/// Tells the service manager the splash is up. A no-op when not running
/// under one; failures are logged and otherwise ignored.
pub fn notify_ready() {
    let Some(socket) = std::env::var_os(NOTIFY_SOCKET_ENV) else {
        debug!("Notify: {} not set", NOTIFY_SOCKET_ENV);
        return;
    };
    match send(&socket, "READY=1") {
        Ok(()) => debug!("Notify: readiness sent"),
        Err(e) => warn!("Notify: {:#}", e),
    }
}

/// Sends one datagram to `socket`. A leading `@` names an abstract socket.
pub fn send(socket: &OsStr, message: &str) -> Result<()> {
    let sender = UnixDatagram::unbound().context("Failed to create notify socket")?;
    let bytes = socket.as_bytes();
    let sent = if let Some(name) = bytes.strip_prefix(b"@") {
        use std::os::linux::net::SocketAddrExt;
        let addr = std::os::unix::net::SocketAddr::from_abstract_name(name)
            .context("Invalid abstract notify socket name")?;
        sender.send_to_addr(message.as_bytes(), &addr)
    } else {
        sender.send_to(message.as_bytes(), Path::new(socket))
    };
    sent.with_context(|| format!("Failed to notify {:?}", socket))?;
    Ok(())
}
