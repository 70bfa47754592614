//! Pre-flight connectivity probe.

use std::time::Duration;
use tokio::net::TcpStream;
use tracing::debug;

/// Opens a TCP connection to the probe address to distinguish "no network
/// at all" from "the price APIs are down". Returns false on any failure.
pub async fn check(probe: &str, timeout: Duration) -> bool {
    match tokio::time::timeout(timeout, TcpStream::connect(probe)).await {
        Ok(Ok(_)) => true,
        Ok(Err(err)) => {
            debug!(probe, error = %err, "Connectivity probe failed");
            false
        }
        Err(_) => {
            debug!(probe, "Connectivity probe timed out");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[tokio::test]
    async fn test_reachable_listener_passes() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        assert!(check(&addr, Duration::from_secs(1)).await);
    }

    #[tokio::test]
    async fn test_closed_port_fails() {
        // Bind then drop so the port is known to be closed.
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().to_string()
        };

        assert!(!check(&addr, Duration::from_secs(1)).await);
    }
}
