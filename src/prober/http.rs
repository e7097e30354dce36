use anyhow::Result;
use reqwest::Client;
use tokio::time::Duration;

use super::HttpProbe;

/// [`HttpProbe`] backed by a shared `reqwest` client.
///
/// Redirects follow the client's default policy. The body is drained before
/// returning so the measured time covers the whole response.
#[derive(Debug, Clone)]
pub struct ReqwestProbe {
    client: Client,
}

impl ReqwestProbe {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

impl HttpProbe for ReqwestProbe {
    async fn get(&self, url: &str, timeout: Duration) -> Result<u16> {
        let resp = self.client.get(url).timeout(timeout).send().await?;
        let status = resp.status().as_u16();
        let _ = resp.bytes().await?;
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one connection with a canned response and returns the bound address.
    async fn serve_once(response: &'static str) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = sock.read(&mut buf).await;
            sock.write_all(response.as_bytes()).await.unwrap();
            sock.shutdown().await.ok();
        });
        addr
    }

    #[tokio::test]
    async fn returns_ok_status() {
        let addr = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok",
        )
        .await;
        let probe = ReqwestProbe::new().unwrap();
        let status = probe
            .get(&format!("http://{addr}/"), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(status, 200);
    }

    #[tokio::test]
    async fn returns_non_ok_status_without_error() {
        let addr = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        let probe = ReqwestProbe::new().unwrap();
        let status = probe
            .get(&format!("http://{addr}/health"), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(status, 503);
    }

    #[tokio::test]
    async fn connection_refused_is_an_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let probe = ReqwestProbe::new().unwrap();
        let result = probe
            .get(&format!("http://{addr}/"), Duration::from_secs(5))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_sock, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let probe = ReqwestProbe::new().unwrap();
        let err = probe
            .get(&format!("http://{addr}/"), Duration::from_secs(1))
            .await
            .unwrap_err();
        let err = err.downcast_ref::<reqwest::Error>().unwrap();
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn malformed_url_is_an_error() {
        let probe = ReqwestProbe::new().unwrap();
        let result = probe.get("not a url", Duration::from_secs(1)).await;
        assert!(result.is_err());
    }
}
