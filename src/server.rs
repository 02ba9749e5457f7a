//! Listening address selection

use std::io;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::warn;

/// How many following ports are tried when the configured one is taken
pub const PORT_RETRIES: u16 = 3;

/// First address from `addr` upwards whose port can be bound
///
/// A port that is already in use moves the search to the next port, at most
/// `retries` times. Any other bind error is returned as is.
pub async fn available_addr(addr: SocketAddr, retries: u16) -> io::Result<SocketAddr> {
    let mut candidate = addr;
    let mut remaining = retries;

    loop {
        match TcpListener::bind(candidate).await {
            Ok(listener) => return listener.local_addr(),
            Err(e) if e.kind() == io::ErrorKind::AddrInUse && remaining > 0 => {
                let next = candidate.port().checked_add(1).ok_or(e)?;
                warn!(port = candidate.port(), next, "Port in use, trying the next one");
                candidate.set_port(next);
                remaining -= 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_free_port_is_kept() {
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let resolved = available_addr(addr, PORT_RETRIES).await.unwrap();
        assert_ne!(resolved.port(), 0);
        assert_eq!(resolved.ip(), addr.ip());
    }

    #[tokio::test]
    async fn test_taken_port_moves_to_next() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();

        let resolved = available_addr(addr, PORT_RETRIES).await.unwrap();

        assert!(resolved.port() > addr.port());
        assert!(resolved.port() <= addr.port() + PORT_RETRIES);
    }

    #[tokio::test]
    async fn test_taken_port_without_retries_fails() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();

        let err = available_addr(addr, 0).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AddrInUse);
    }
}
