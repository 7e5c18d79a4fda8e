use crate::config::ClientConfig;
use std::future::Future;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Could not connect to {url}: {reason}")]
    Connect { url: String, reason: String },
    #[error("Request to {url} timed out")]
    Timeout { url: String },
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl TransportError {
    fn from_reqwest(url: String, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout { url }
        } else if err.is_connect() {
            TransportError::Connect {
                url,
                reason: err.to_string(),
            }
        } else {
            TransportError::Http { url, source: err }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// Issues a GET for a path relative to the game service root and hands back
// the raw status and body. Any status is a successful transport; deciding
// what a 4xx/5xx means is left to the caller.
pub trait Transport {
    fn get(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| TransportError::from_reqwest(config.base_url().to_string(), err))?;
        Ok(HttpTransport {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn get(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
        let url = format!("{}{}", self.base_url, path);
        let request = self.client.get(&url);
        async move {
            debug!("GET {}", url);
            let response = request
                .send()
                .await
                .map_err(|err| TransportError::from_reqwest(url.clone(), err))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|err| TransportError::from_reqwest(url.clone(), err))?;
            debug!("GET {} -> {} ({} bytes)", url, status, body.len());
            Ok(TransportResponse { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let response = |status| TransportResponse {
            status,
            body: String::new(),
        };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(302).is_success());
        assert!(!response(400).is_success());
        assert!(!response(500).is_success());
    }

    #[test]
    fn test_base_url_comes_from_config() {
        let transport = HttpTransport::new(&ClientConfig::default()).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8080/machikoroapp");
    }
}
