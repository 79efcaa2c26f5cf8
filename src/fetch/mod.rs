use anyhow::{Context, Result};
use tracing::debug;
use url::Url;

/// The response surface the connector needs from a transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Blocking HTTP collaborator. Timeout and TLS policy belong to the
/// implementation, not to the core; the core only checks the status code.
pub trait HttpTransport {
    fn fetch(&self, url: &Url, auth_header: &str) -> Result<HttpResponse>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn fetch(&self, url: &Url, auth_header: &str) -> Result<HttpResponse> {
        (**self).fetch(url, auth_header)
    }
}

/// `reqwest`-backed blocking transport.
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for HttpClient {
    fn fetch(&self, url: &Url, auth_header: &str) -> Result<HttpResponse> {
        debug!(%url, "GET");
        let resp = self
            .client
            .get(url.clone())
            .header(reqwest::header::AUTHORIZATION, auth_header)
            .send()
            .with_context(|| format!("GET {} failed", url))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .with_context(|| format!("reading body from {}", url))?;
        Ok(HttpResponse { status, body })
    }
}

/// Resolve a dataset path against the vendor base URL.
pub fn dataset_url(base: &Url, dataset_path: &str) -> Result<Url> {
    base.join(dataset_path)
        .with_context(|| format!("joining `{}` onto {}", dataset_path, base))
}
