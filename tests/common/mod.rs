//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;
use transform_service::http::ServeError;
use transform_service::net::Listener;
use transform_service::{HttpServer, Logger, Shutdown};

/// A server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    handle: JoinHandle<Result<(), ServeError>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the serve loop to return.
    pub async fn stop(self) -> Result<(), ServeError> {
        self.shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("server did not stop in time")
            .expect("server task panicked")
    }
}

/// Start the service on 127.0.0.1 with an OS-assigned port.
pub async fn start_server() -> TestServer {
    let listener = Listener::bind("127.0.0.1:0".parse().unwrap(), 256).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();

    let server = HttpServer::new(Logger::disabled());
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    TestServer { addr, shutdown, handle }
}

/// Write raw bytes to the server and read until it closes the connection.
#[allow(dead_code)]
pub async fn raw_exchange(addr: SocketAddr, request: &[u8]) -> String {
    let mut socket = TcpStream::connect(addr).await.unwrap();
    socket.write_all(request).await.unwrap();
    read_to_close(&mut socket).await
}

/// Read everything the server sends until it closes the connection.
#[allow(dead_code)]
pub async fn read_to_close(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    tokio::time::timeout(Duration::from_secs(5), socket.read_to_end(&mut buf))
        .await
        .expect("server did not close the connection")
        .unwrap();
    String::from_utf8_lossy(&buf).into_owned()
}
