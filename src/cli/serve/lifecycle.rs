//! Server lifecycle management.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Result, anyhow};
use tiny_http::Server;

use crate::{core::register_server, log};

/// Maximum number of port binding attempts.
const MAX_PORT_RETRIES: u16 = 10;

/// Bind to the specified interface and port, with automatic port retry.
pub fn bind_with_retry(interface: IpAddr, base_port: u16) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;

    for offset in 0..MAX_PORT_RETRIES {
        let Some(port) = base_port.checked_add(offset) else {
            break;
        };
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow!(
        "Failed to bind after {} attempts (from port {}): {}",
        MAX_PORT_RETRIES,
        base_port,
        last_error.map_or_else(|| "no port available".to_string(), |e| e.to_string())
    ))
}

/// Register server for graceful shutdown.
///
/// Ctrl+C then unblocks the server and the request loop returns.
pub fn register_server_for_shutdown(server: &Arc<Server>) {
    register_server(Arc::clone(server));
}
